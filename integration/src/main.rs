//! Integration tests for the vault suite operations scripts. These assume
//! that a devnet is already running locally with the suite deployed.

use clap::Parser;
use cli::{Cli, Tests};
use eyre::Result;
use tests::{
    reconcile::{test_facet_sync, test_feed_sync},
    sweep::test_safe_sweep,
    upgrade::test_upgrade_storage,
};
use tracing::info;
use utils::setup_client;

mod abis;
mod cli;
mod constants;
mod tests;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        deployments_file,
        priv_key,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url).await?;

    match test {
        Tests::UpgradeStorage => test_upgrade_storage(&client, &deployments_file).await?,
        Tests::FeedSync => test_feed_sync(&client, &deployments_file).await?,
        Tests::FacetSync => test_facet_sync(&client, &deployments_file).await?,
        Tests::SafeSweep => test_safe_sweep(&client, &deployments_file, &priv_key).await?,
    }

    info!("test passed");
    Ok(())
}
