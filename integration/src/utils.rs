//! Utilities for running integration tests

use alloy::{
    contract::{CallBuilder, CallDecoder},
    network::Ethereum,
    providers::{DynProvider, Provider},
    rpc::types::TransactionReceipt,
};
use eyre::{ensure, Result};

/// Set up the provider the tests submit transactions with
pub(crate) async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider> {
    Ok(scripts::utils::setup_client(priv_key, rpc_url).await?)
}

/// Send a contract call, wait for its receipt, and assert it succeeded
pub(crate) async fn wait_for_tx_success<P: Provider, C: CallDecoder>(
    tx: CallBuilder<P, C, Ethereum>,
) -> Result<TransactionReceipt> {
    let receipt = tx.send().await?.get_receipt().await?;
    ensure!(
        receipt.status(),
        "transaction {} reverted",
        receipt.transaction_hash,
    );

    Ok(receipt)
}
