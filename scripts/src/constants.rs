//! Constants used in the deploy & administration scripts

use alloy_primitives::address;
use contracts_common::types::FeedRecord;

/// The creation bytecode of the TransparentUpgradeableProxy contract
///
/// Compiled from https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/transparent/TransparentUpgradeableProxy.sol
pub const PROXY_BYTECODE: &str = include_str!("../artifacts/TransparentUpgradeableProxy.bin");

/// The creation bytecode of the vault implementation contract
pub const VAULT_BYTECODE: &str = include_str!("../artifacts/Vault.bin");

/// The creation bytecode of the registry contract
pub const REGISTRY_BYTECODE: &str = include_str!("../artifacts/Registry.bin");

/// The creation bytecode of the price oracle contract
pub const PRICE_ORACLE_BYTECODE: &str = include_str!("../artifacts/PriceOracle.bin");

/// The creation bytecode of the swap diamond contract
pub const SWAP_DIAMOND_BYTECODE: &str = include_str!("../artifacts/SwapDiamond.bin");

/// The creation bytecode of the limit orderbook contract
pub const LIMIT_ORDERBOOK_BYTECODE: &str = include_str!("../artifacts/LimitOrderbook.bin");

/// The creation bytecode of the token adapter contract
pub const TOKEN_ADAPTER_BYTECODE: &str = include_str!("../artifacts/TokenAdapter.bin");

/// The creation bytecode of the swap facet contract
pub const SWAP_FACET_BYTECODE: &str = include_str!("../artifacts/SwapFacet.bin");

/// The creation bytecode of the quote facet contract
pub const QUOTE_FACET_BYTECODE: &str = include_str!("../artifacts/QuoteFacet.bin");

/// The creation bytecode of the admin facet contract
pub const ADMIN_FACET_BYTECODE: &str = include_str!("../artifacts/AdminFacet.bin");

/// The number of confirmations to wait for a submitted transaction
pub const NUM_TX_CONFIRMATIONS: u64 = 1;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The vault implementation contract key in the `deployments.json` file
pub const VAULT_CONTRACT_KEY: &str = "vault_contract";

/// The vault proxy contract key in the `deployments.json` file
pub const VAULT_PROXY_CONTRACT_KEY: &str = "vault_proxy_contract";

/// The vault proxy admin contract key in the `deployments.json` file
pub const VAULT_PROXY_ADMIN_CONTRACT_KEY: &str = "vault_proxy_admin_contract";

/// The registry contract key in the `deployments.json` file
pub const REGISTRY_CONTRACT_KEY: &str = "registry_contract";

/// The price oracle contract key in the `deployments.json` file
pub const PRICE_ORACLE_CONTRACT_KEY: &str = "price_oracle_contract";

/// The swap diamond contract key in the `deployments.json` file
pub const SWAP_DIAMOND_CONTRACT_KEY: &str = "swap_diamond_contract";

/// The limit orderbook contract key in the `deployments.json` file
pub const LIMIT_ORDERBOOK_CONTRACT_KEY: &str = "limit_orderbook_contract";

/// The token adapter contract key in the `deployments.json` file
pub const TOKEN_ADAPTER_CONTRACT_KEY: &str = "token_adapter_contract";

/// The swap facet contract key in the `deployments.json` file
pub const SWAP_FACET_CONTRACT_KEY: &str = "swap_facet_contract";

/// The quote facet contract key in the `deployments.json` file
pub const QUOTE_FACET_CONTRACT_KEY: &str = "quote_facet_contract";

/// The admin facet contract key in the `deployments.json` file
pub const ADMIN_FACET_CONTRACT_KEY: &str = "admin_facet_contract";

/// The signatures of the functions routed to the swap facet
pub const SWAP_FACET_SIGNATURES: [&str; 2] = [
    "swapExactTokensForTokens(uint256,uint256,address[],address)",
    "swapTokensForExactTokens(uint256,uint256,address[],address)",
];

/// The signatures of the functions routed to the quote facet
pub const QUOTE_FACET_SIGNATURES: [&str; 2] = [
    "getAmountsOut(uint256,address[])",
    "getAmountsIn(uint256,address[])",
];

/// The signatures of the functions routed to the admin facet
pub const ADMIN_FACET_SIGNATURES: [&str; 4] = [
    "setFeeBps(uint256)",
    "feeBps()",
    "setPaused(bool)",
    "feeRecipient()",
];

/// The feed registrations pushed onto the oracle when no feeds file is given.
///
/// Token addresses are the canonical mainnet deployments; feeds are the
/// corresponding Chainlink USD aggregators.
pub const DEFAULT_FEED_RECORDS: [FeedRecord; 5] = [
    // WETH / ETH-USD
    FeedRecord {
        token: address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        feed: address!("0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419"),
    },
    // WBTC / BTC-USD
    FeedRecord {
        token: address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599"),
        feed: address!("0xF4030086522a5bEEa4988F8cA5B36dbC97BeE88c"),
    },
    // USDC / USDC-USD
    FeedRecord {
        token: address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
        feed: address!("0x8fFfFfd4AfB6115b954Bd326cbe7B4BA576818f6"),
    },
    // DAI / DAI-USD
    FeedRecord {
        token: address!("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
        feed: address!("0xAed0c38402a5d19df6E4c03F4E2DceD6e29c1ee9"),
    },
    // USDT / USDT-USD
    FeedRecord {
        token: address!("0xdAC17F958D2ee523a2206206994597C13D831ec7"),
        feed: address!("0x3E7d1eAB13ad0104d2750B8863b489D65364e32D"),
    },
];
