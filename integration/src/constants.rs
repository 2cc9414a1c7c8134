//! Constants used in the integration tests

/// The default devnet private key, the first default account in an Anvil
/// node
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default devnet RPC endpoint
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://127.0.0.1:8545";

/// The amount of the test ERC20 minted for the sweep test
pub(crate) const TRANSFER_AMOUNT: u64 = 1000;

/// The test ERC20 contract key in the deployments file
pub(crate) const TEST_ERC20_CONTRACT_KEY: &str = "test_erc20_contract";

/// The test Safe contract key in the deployments file
pub(crate) const TEST_SAFE_CONTRACT_KEY: &str = "test_safe_contract";

/// The dummy upgrade target contract key in the deployments file
pub(crate) const VAULT_UPGRADE_TARGET_CONTRACT_KEY: &str = "vault_upgrade_target_contract";
