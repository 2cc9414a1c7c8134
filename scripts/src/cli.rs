//! Definitions of CLI arguments and commands for the deploy &
//! administration scripts

use alloy::providers::DynProvider;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{
        deploy_contract, deploy_proxy, set_strategy, sweep_safe, sync_facets, sync_feeds, upgrade,
    },
    errors::ScriptError,
    types::SuiteContract,
};

/// The CLI for the deploy & administration scripts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the account submitting transactions
    // TODO: Better key management
    #[arg(short, long, env = "SUITE_PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "SUITE_RPC_URL")]
    pub rpc_url: String,

    /// Path to the deployments file
    #[arg(short, long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The task to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy & administration tasks
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the vault upgradeable proxy contract
    DeployProxy(DeployProxyArgs),
    /// Deploy a suite contract from its compiled artifact
    DeployContract(DeployContractArgs),
    /// Upgrade the vault proxy to a new implementation
    Upgrade(UpgradeArgs),
    /// Reconcile the price oracle against the desired feed table
    SyncFeeds(SyncFeedsArgs),
    /// Reconcile the swap diamond's selector routing against the desired
    /// facets
    SyncFacets(SyncFacetsArgs),
    /// Push a strategy plan onto the registry for a vault
    SetStrategy(SetStrategyArgs),
    /// Move the full token balance out of a Safe or a Safe-owned holder
    SweepSafe(SweepSafeArgs),
}

impl Command {
    /// Run the command against the given client
    pub async fn run(
        self,
        client: DynProvider,
        priv_key: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployProxy(args) => deploy_proxy(args, client, deployments_path).await,
            Command::DeployContract(args) => {
                deploy_contract(args, client, priv_key, deployments_path).await
            }
            Command::Upgrade(args) => upgrade(args, client, deployments_path).await,
            Command::SyncFeeds(args) => sync_feeds(args, client, deployments_path).await,
            Command::SyncFacets(args) => sync_facets(args, client, deployments_path).await,
            Command::SetStrategy(args) => set_strategy(args, client, deployments_path).await,
            Command::SweepSafe(args) => sweep_safe(args, client, priv_key).await,
        }
    }
}

/// Deploy the vault upgradeable proxy contract.
///
/// Concretely, this is a [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy),
/// which itself deploys a `ProxyAdmin` contract.
///
/// Calls made directly to the `TransparentUpgradeableProxy` contract will be forwarded to the implementation contract.
/// Upgrade calls can only be made to the `TransparentUpgradeableProxy` through the `ProxyAdmin`.
#[derive(Args)]
pub struct DeployProxyArgs {
    /// Address of the owner for the proxy admin contract
    #[arg(short, long)]
    pub owner: String,

    /// Vault implementation contract address in hex.
    ///
    /// Defaults to the implementation recorded in the deployments file.
    #[arg(short, long)]
    pub vault: Option<String>,

    /// Address of the token the vault accepts deposits in
    #[arg(short, long)]
    pub underlying: String,

    /// Name of the vault share token
    #[arg(short, long)]
    pub name: String,

    /// Symbol of the vault share token
    #[arg(short, long)]
    pub symbol: String,
}

/// Deploy a suite contract from its compiled artifact, with the constructor
/// arguments the suite wires it up with
#[derive(Args)]
pub struct DeployContractArgs {
    /// The contract to deploy
    #[arg(short, long)]
    pub contract: SuiteContract,

    /// Address receiving ownership (or fees) where the constructor takes
    /// one; defaults to the deployer
    #[arg(short, long)]
    pub owner: Option<String>,
}

/// Upgrade the vault implementation
#[derive(Args)]
pub struct UpgradeArgs {
    /// Address of the proxy admin contract.
    ///
    /// Defaults to the admin recorded in the deployments file.
    #[arg(long)]
    pub proxy_admin: Option<String>,

    /// Address of the proxy contract.
    ///
    /// Defaults to the proxy recorded in the deployments file.
    #[arg(long)]
    pub proxy: Option<String>,

    /// Address of the new implementation contract
    #[arg(short, long)]
    pub implementation: String,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when upgrading
    #[arg(short, long)]
    pub calldata: Option<String>,
}

/// Reconcile the price oracle's registered feeds against the desired table
#[derive(Args)]
pub struct SyncFeedsArgs {
    /// Address of the price oracle contract.
    ///
    /// Defaults to the oracle recorded in the deployments file.
    #[arg(short, long)]
    pub oracle: Option<String>,

    /// Path to a JSON file holding the desired feed table.
    ///
    /// Defaults to the built-in table.
    #[arg(short, long)]
    pub feeds_path: Option<String>,
}

/// Reconcile the swap diamond's selector routing against the desired facets
#[derive(Args)]
pub struct SyncFacetsArgs {
    /// Address of the swap diamond contract.
    ///
    /// Defaults to the diamond recorded in the deployments file.
    #[arg(short, long)]
    pub diamond: Option<String>,
}

/// Push a strategy plan onto the registry for a vault
#[derive(Args)]
pub struct SetStrategyArgs {
    /// Address of the vault the strategy is for
    #[arg(short, long)]
    pub vault: String,

    /// Path to the JSON strategy plan file
    #[arg(short, long)]
    pub strategy_path: String,

    /// Address of the registry contract.
    ///
    /// Defaults to the registry recorded in the deployments file.
    #[arg(long)]
    pub registry: Option<String>,
}

/// Move the full token balance out of a Safe or a Safe-owned holder
#[derive(Args)]
pub struct SweepSafeArgs {
    /// Address of the Safe authorizing the sweep
    #[arg(short, long)]
    pub safe: String,

    /// Address of the token to sweep
    #[arg(short, long)]
    pub token: String,

    /// Address receiving the swept balance
    #[arg(short, long)]
    pub receiver: String,

    /// Address of the Safe-owned holder contract to sweep from.
    ///
    /// When omitted, the Safe's own balance is transferred.
    #[arg(long)]
    pub holder: Option<String>,
}
