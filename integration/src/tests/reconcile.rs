//! Idempotency tests for the reconciliation tasks: after one pass, a second
//! pass must plan nothing

use std::collections::HashMap;

use alloy::providers::DynProvider;
use alloy_primitives::{Address, Bytes, Selector};
use contracts_common::types::{CutAction, DesiredFacet, FeedRecord, PlannedCut};
use eyre::{ensure, Result};
use itertools::Itertools;
use scripts::{
    constants::{
        ADMIN_FACET_CONTRACT_KEY, ADMIN_FACET_SIGNATURES, PRICE_ORACLE_CONTRACT_KEY,
        QUOTE_FACET_CONTRACT_KEY, QUOTE_FACET_SIGNATURES, SWAP_DIAMOND_CONTRACT_KEY,
        SWAP_FACET_CONTRACT_KEY, SWAP_FACET_SIGNATURES,
    },
    diamond::plan_cuts,
    oracle::{load_feed_table, plan_feed_updates},
    utils::parse_addr_from_deployments_file,
};
use tracing::info;

use crate::{
    abis::{IDiamondCut, IDiamondLoupe, IPriceOracle},
    utils::wait_for_tx_success,
};

/// The price oracle instance type used by the tests
type Oracle = IPriceOracle::IPriceOracleInstance<DynProvider>;

/// Reconcile the oracle against the built-in feed table, then assert a
/// second pass plans nothing and every feed reads back as desired
pub(crate) async fn test_feed_sync(client: &DynProvider, deployments_file: &str) -> Result<()> {
    let oracle_address =
        parse_addr_from_deployments_file(deployments_file, PRICE_ORACLE_CONTRACT_KEY)?;
    let desired = load_feed_table(None)?;

    let oracle = IPriceOracle::new(oracle_address, client.clone());

    let current = read_feeds(&oracle, &desired).await?;
    let pending = plan_feed_updates(&desired, &current)?;
    if !pending.is_empty() {
        info!("registering {} pending feeds", pending.len());
        let tokens = pending.iter().map(|r| r.token).collect_vec();
        let feeds = pending.iter().map(|r| r.feed).collect_vec();
        wait_for_tx_success(oracle.setPriceFeeds(tokens, feeds)).await?;
    }

    let current = read_feeds(&oracle, &desired).await?;
    let pending = plan_feed_updates(&desired, &current)?;
    ensure!(
        pending.is_empty(),
        "second pass still has {} pending feeds",
        pending.len(),
    );
    for record in &desired {
        ensure!(
            current[&record.token] == record.feed,
            "feed for token {:#x} does not match the desired table",
            record.token,
        );
    }

    Ok(())
}

/// Reconcile the swap diamond against the desired facets, then assert a
/// second pass plans nothing
pub(crate) async fn test_facet_sync(client: &DynProvider, deployments_file: &str) -> Result<()> {
    let diamond_address =
        parse_addr_from_deployments_file(deployments_file, SWAP_DIAMOND_CONTRACT_KEY)?;
    let desired = desired_facets(deployments_file)?;

    let loupe = IDiamondLoupe::new(diamond_address, client.clone());
    let current = read_routing(&loupe).await?;

    let cuts = plan_cuts(&desired, &current)?;
    if !cuts.is_empty() {
        info!("submitting a {}-cut diamond cut", cuts.len());
        let sol_cuts = cuts.into_iter().map(planned_cut_to_sol).collect_vec();
        let diamond = IDiamondCut::new(diamond_address, client.clone());
        wait_for_tx_success(diamond.diamondCut(sol_cuts, Address::ZERO, Bytes::new())).await?;
    }

    let current = read_routing(&loupe).await?;
    let cuts = plan_cuts(&desired, &current)?;
    ensure!(
        cuts.is_empty(),
        "second pass still plans {} cuts",
        cuts.len(),
    );

    Ok(())
}

/// Read the currently registered feed for every desired token
async fn read_feeds(
    oracle: &Oracle,
    desired: &[FeedRecord],
) -> Result<HashMap<Address, Address>> {
    let mut current = HashMap::new();
    for record in desired {
        let feed = oracle.getPriceFeed(record.token).call().await?;
        current.insert(record.token, feed);
    }

    Ok(current)
}

/// Read the diamond's current selector routing from the loupe
async fn read_routing(
    loupe: &IDiamondLoupe::IDiamondLoupeInstance<DynProvider>,
) -> Result<Vec<(Address, Vec<Selector>)>> {
    let facets = loupe.facets().call().await?;
    Ok(facets
        .into_iter()
        .map(|facet| (facet.facetAddress, facet.functionSelectors))
        .collect())
}

/// The desired facet registry, addresses from the deployments file
fn desired_facets(deployments_file: &str) -> Result<Vec<DesiredFacet>> {
    /// Collect a signature table into owned strings
    fn signatures(table: &[&str]) -> Vec<String> {
        table.iter().map(|s| s.to_string()).collect()
    }

    Ok(vec![
        DesiredFacet {
            name: "swap",
            address: parse_addr_from_deployments_file(deployments_file, SWAP_FACET_CONTRACT_KEY)?,
            signatures: signatures(&SWAP_FACET_SIGNATURES),
        },
        DesiredFacet {
            name: "quote",
            address: parse_addr_from_deployments_file(
                deployments_file,
                QUOTE_FACET_CONTRACT_KEY,
            )?,
            signatures: signatures(&QUOTE_FACET_SIGNATURES),
        },
        DesiredFacet {
            name: "admin",
            address: parse_addr_from_deployments_file(
                deployments_file,
                ADMIN_FACET_CONTRACT_KEY,
            )?,
            signatures: signatures(&ADMIN_FACET_SIGNATURES),
        },
    ])
}

/// Convert a planned cut into the diamond's ABI struct
fn planned_cut_to_sol(cut: PlannedCut) -> IDiamondCut::FacetCut {
    let action = match cut.action {
        CutAction::Add => IDiamondCut::FacetCutAction::Add,
        CutAction::Replace => IDiamondCut::FacetCutAction::Replace,
        CutAction::Remove => IDiamondCut::FacetCutAction::Remove,
    };

    IDiamondCut::FacetCut {
        facetAddress: cut.facet,
        action,
        functionSelectors: cut.selectors,
    }
}
