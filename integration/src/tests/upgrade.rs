//! Upgrade tests for the vault proxy

use alloy::providers::DynProvider;
use alloy_primitives::Bytes;
use contracts_common::constants::PROXY_IMPLEMENTATION_STORAGE_SLOT;
use eyre::{ensure, Result};
use scripts::{
    constants::{VAULT_PROXY_ADMIN_CONTRACT_KEY, VAULT_PROXY_CONTRACT_KEY},
    utils::{parse_addr_from_deployments_file, read_storage_address},
};
use tracing::info;

use crate::{
    abis::{IProxyAdmin, IVault},
    constants::VAULT_UPGRADE_TARGET_CONTRACT_KEY,
    utils::wait_for_tx_success,
};

/// Upgrade the vault proxy to the dummy target implementation and assert its
/// observable storage reads back exactly as snapshotted before the upgrade
pub(crate) async fn test_upgrade_storage(
    client: &DynProvider,
    deployments_file: &str,
) -> Result<()> {
    let proxy = parse_addr_from_deployments_file(deployments_file, VAULT_PROXY_CONTRACT_KEY)?;
    let proxy_admin =
        parse_addr_from_deployments_file(deployments_file, VAULT_PROXY_ADMIN_CONTRACT_KEY)?;
    let target =
        parse_addr_from_deployments_file(deployments_file, VAULT_UPGRADE_TARGET_CONTRACT_KEY)?;

    let vault = IVault::new(proxy, client.clone());

    // Snapshot the observable storage before the upgrade
    let name = vault.name().call().await?;
    let symbol = vault.symbol().call().await?;
    let total_supply = vault.totalSupply().call().await?;
    let underlying = vault.underlyingToken().call().await?;
    let price_per_share = vault.pricePerFullShare().call().await?;

    // Run the upgrade
    let admin = IProxyAdmin::new(proxy_admin, client.clone());
    wait_for_tx_success(admin.upgradeAndCall(proxy, target, Bytes::new())).await?;

    let implementation =
        read_storage_address(client, proxy, PROXY_IMPLEMENTATION_STORAGE_SLOT).await?;
    ensure!(implementation == target, "implementation slot was not updated");
    info!("vault proxy upgraded to {target:#x}");

    // Every snapshotted field must read back unchanged through the new
    // implementation
    ensure!(
        vault.name().call().await? == name,
        "name changed across upgrade",
    );
    ensure!(
        vault.symbol().call().await? == symbol,
        "symbol changed across upgrade",
    );
    ensure!(
        vault.totalSupply().call().await? == total_supply,
        "total supply changed across upgrade",
    );
    ensure!(
        vault.underlyingToken().call().await? == underlying,
        "underlying token changed across upgrade",
    );
    ensure!(
        vault.pricePerFullShare().call().await? == price_per_share,
        "price per share changed across upgrade",
    );

    Ok(())
}
