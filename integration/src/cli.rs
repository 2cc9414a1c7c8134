//! Definition of the CLI arguments for integration tests

use clap::{Parser, ValueEnum};

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for running integration tests against a running devnet node.
///
/// Assumes that the contracts invoked in the tests have already been deployed
/// to the devnet.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Test to run
    #[arg(short, long)]
    pub(crate) test: Tests,

    /// Path to file containing contract deployment info
    #[arg(short, long, default_value = "deployments.devnet.json")]
    pub(crate) deployments_file: String,

    /// Devnet private key, defaults to the first default Anvil account key
    #[arg(short, long, default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL
    #[arg(short, long, default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}

/// The available integration tests
#[derive(ValueEnum, Clone, Copy)]
pub(crate) enum Tests {
    /// Vault storage reads back unchanged across an upgrade
    UpgradeStorage,
    /// Feed reconciliation converges & is idempotent
    FeedSync,
    /// Facet reconciliation converges & is idempotent
    FacetSync,
    /// A Safe sweep empties the holder & credits the receiver
    SafeSweep,
}
