//! Implementations of the deploy & administration tasks

use std::{collections::HashMap, str::FromStr};

use alloy::{providers::DynProvider, signers::local::PrivateKeySigner};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use contracts_common::{
    constants::{PROXY_ADMIN_STORAGE_SLOT, PROXY_IMPLEMENTATION_STORAGE_SLOT},
    types::{CutAction, DesiredFacet, PlannedCut},
};
use itertools::Itertools;
use tracing::info;

use crate::{
    cli::{
        DeployContractArgs, DeployProxyArgs, SetStrategyArgs, SweepSafeArgs, SyncFacetsArgs,
        SyncFeedsArgs, UpgradeArgs,
    },
    constants::{
        ADMIN_FACET_CONTRACT_KEY, ADMIN_FACET_SIGNATURES, PRICE_ORACLE_CONTRACT_KEY,
        PROXY_BYTECODE, QUOTE_FACET_CONTRACT_KEY, QUOTE_FACET_SIGNATURES, REGISTRY_CONTRACT_KEY,
        SWAP_DIAMOND_CONTRACT_KEY, SWAP_FACET_CONTRACT_KEY, SWAP_FACET_SIGNATURES,
        VAULT_CONTRACT_KEY, VAULT_PROXY_ADMIN_CONTRACT_KEY, VAULT_PROXY_CONTRACT_KEY,
    },
    diamond::plan_cuts,
    errors::ScriptError,
    oracle::{load_feed_table, plan_feed_updates},
    safe::{
        erc20_transfer_calldata, holder_sweep_calldata, prevalidated_signature,
        SAFE_OPERATION_CALL,
    },
    solidity::{
        initializeCall, IDiamondCut, IDiamondLoupe, IGnosisSafe, IPriceOracle, IProxyAdmin,
        IRegistry, IERC20,
    },
    strategy::{read_strategy_file, steps_to_sol, strategy_hash},
    types::SuiteContract,
    utils::{
        deploy_creation_code, get_contract_bytecode, get_contract_key, parse_addr,
        parse_addr_from_deployments_file, read_storage_address, send_and_confirm,
        write_deployed_address,
    },
};

/// Deploy the vault's TransparentUpgradeableProxy over the recorded (or
/// given) implementation, initializing it in the constructor
pub async fn deploy_proxy(
    args: DeployProxyArgs,
    client: DynProvider,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let owner = parse_addr(&args.owner)?;
    let vault_impl = match args.vault {
        Some(addr) => parse_addr(&addr)?,
        None => parse_addr_from_deployments_file(deployments_path, VAULT_CONTRACT_KEY)?,
    };
    let underlying = parse_addr(&args.underlying)?;
    let registry = parse_addr_from_deployments_file(deployments_path, REGISTRY_CONTRACT_KEY)?;

    let init_calldata = initializeCall {
        underlying,
        registry,
        name: args.name,
        symbol: args.symbol,
    }
    .abi_encode();

    // The proxy constructor takes the implementation, the initial owner of
    // the proxy admin it deploys, and the initializer calldata
    let constructor_args = (vault_impl, owner, Bytes::from(init_calldata)).abi_encode_params();

    let proxy_address = deploy_creation_code(&client, PROXY_BYTECODE, constructor_args).await?;

    // The proxy deploys its admin internally; read it back out of the
    // EIP1967 admin slot.
    // This is the recommended way to get the proxy admin address:
    // https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
    let proxy_admin_address =
        read_storage_address(&client, proxy_address, PROXY_ADMIN_STORAGE_SLOT).await?;

    info!("vault proxy deployed at {proxy_address:#x}");
    info!("vault proxy admin deployed at {proxy_admin_address:#x}");

    write_deployed_address(deployments_path, VAULT_PROXY_CONTRACT_KEY, proxy_address)?;
    write_deployed_address(
        deployments_path,
        VAULT_PROXY_ADMIN_CONTRACT_KEY,
        proxy_admin_address,
    )?;

    Ok(())
}

/// Deploy a suite contract from its compiled artifact with the hard-wired
/// constructor arguments for that contract, recording its address
pub async fn deploy_contract(
    args: DeployContractArgs,
    client: DynProvider,
    priv_key: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let deployer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .address();
    let owner = match args.owner {
        Some(addr) => parse_addr(&addr)?,
        None => deployer,
    };

    let constructor_args = match args.contract {
        // Initializer-pattern & constructorless contracts
        SuiteContract::Vault
        | SuiteContract::Registry
        | SuiteContract::SwapFacet
        | SuiteContract::QuoteFacet
        | SuiteContract::AdminFacet => Vec::new(),
        SuiteContract::PriceOracle | SuiteContract::TokenAdapter => {
            let registry =
                parse_addr_from_deployments_file(deployments_path, REGISTRY_CONTRACT_KEY)?;
            (registry,).abi_encode_params()
        }
        SuiteContract::SwapDiamond => (owner,).abi_encode_params(),
        SuiteContract::LimitOrderbook => {
            let diamond =
                parse_addr_from_deployments_file(deployments_path, SWAP_DIAMOND_CONTRACT_KEY)?;
            let oracle =
                parse_addr_from_deployments_file(deployments_path, PRICE_ORACLE_CONTRACT_KEY)?;
            (diamond, oracle, owner).abi_encode_params()
        }
    };

    let address =
        deploy_creation_code(&client, get_contract_bytecode(args.contract), constructor_args)
            .await?;

    info!("{} deployed at {address:#x}", args.contract);

    write_deployed_address(deployments_path, get_contract_key(args.contract), address)
}

/// Upgrade the vault proxy to a new implementation through the proxy admin,
/// skipping the transaction when the implementation slot already holds the
/// target
pub async fn upgrade(
    args: UpgradeArgs,
    client: DynProvider,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let proxy_admin_address = match args.proxy_admin {
        Some(addr) => parse_addr(&addr)?,
        None => {
            parse_addr_from_deployments_file(deployments_path, VAULT_PROXY_ADMIN_CONTRACT_KEY)?
        }
    };
    let proxy_address = match args.proxy {
        Some(addr) => parse_addr(&addr)?,
        None => parse_addr_from_deployments_file(deployments_path, VAULT_PROXY_CONTRACT_KEY)?,
    };
    let implementation_address = parse_addr(&args.implementation)?;

    let current =
        read_storage_address(&client, proxy_address, PROXY_IMPLEMENTATION_STORAGE_SLOT).await?;
    if current == implementation_address {
        info!(
            "proxy {proxy_address:#x} already points at {implementation_address:#x}, nothing to do"
        );
        return Ok(());
    }

    let data = if let Some(calldata) = args.calldata {
        Bytes::from(
            hex::decode(calldata.trim_start_matches("0x"))
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?,
        )
    } else {
        Bytes::new()
    };

    let proxy_admin = IProxyAdmin::new(proxy_admin_address, client.clone());
    send_and_confirm(proxy_admin.upgradeAndCall(proxy_address, implementation_address, data))
        .await?;

    info!("proxy {proxy_address:#x} upgraded to {implementation_address:#x}");

    Ok(())
}

/// Reconcile the price oracle's registered feeds against the desired table,
/// registering only the pending records in one batch
pub async fn sync_feeds(
    args: SyncFeedsArgs,
    client: DynProvider,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let oracle_address = match args.oracle {
        Some(addr) => parse_addr(&addr)?,
        None => parse_addr_from_deployments_file(deployments_path, PRICE_ORACLE_CONTRACT_KEY)?,
    };
    let desired = load_feed_table(args.feeds_path.as_deref())?;

    let oracle = IPriceOracle::new(oracle_address, client.clone());

    // Read the currently registered feed for every desired token
    let mut current = HashMap::new();
    for record in &desired {
        let feed = oracle
            .getPriceFeed(record.token)
            .call()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
        current.insert(record.token, feed);
    }

    let pending = plan_feed_updates(&desired, &current)?;
    if pending.is_empty() {
        info!(
            "all {} feeds match the desired table, nothing to do",
            desired.len()
        );
        return Ok(());
    }

    info!("registering {} of {} feeds", pending.len(), desired.len());
    for record in &pending {
        info!("feed for token {:#x} set to {:#x}", record.token, record.feed);
    }

    let tokens = pending.iter().map(|r| r.token).collect_vec();
    let feeds = pending.iter().map(|r| r.feed).collect_vec();
    send_and_confirm(oracle.setPriceFeeds(tokens, feeds)).await?;

    Ok(())
}

/// Reconcile the swap diamond's selector routing against the desired facet
/// registry, submitting a single cut when anything is pending
pub async fn sync_facets(
    args: SyncFacetsArgs,
    client: DynProvider,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let diamond_address = match args.diamond {
        Some(addr) => parse_addr(&addr)?,
        None => parse_addr_from_deployments_file(deployments_path, SWAP_DIAMOND_CONTRACT_KEY)?,
    };
    let desired = desired_facets(deployments_path)?;
    for facet in &desired {
        info!("desired facet {} at {:#x}", facet.name, facet.address);
    }

    let loupe = IDiamondLoupe::new(diamond_address, client.clone());
    let facets = loupe
        .facets()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    let current = facets
        .into_iter()
        .map(|facet| (facet.facetAddress, facet.functionSelectors))
        .collect_vec();

    let cuts = plan_cuts(&desired, &current)?;
    if cuts.is_empty() {
        info!("diamond {diamond_address:#x} routing matches the desired facets, nothing to do");
        return Ok(());
    }

    for cut in &cuts {
        info!(
            "cut: {:?} {} selector(s) for facet {:#x}",
            cut.action,
            cut.selectors.len(),
            cut.facet,
        );
    }

    let sol_cuts = cuts.into_iter().map(planned_cut_to_sol).collect_vec();
    let diamond = IDiamondCut::new(diamond_address, client.clone());
    send_and_confirm(diamond.diamondCut(sol_cuts, Address::ZERO, Bytes::new())).await?;

    Ok(())
}

/// Push a strategy plan onto the registry for a vault, skipping when the
/// registry already reports the plan's hash
pub async fn set_strategy(
    args: SetStrategyArgs,
    client: DynProvider,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let vault = parse_addr(&args.vault)?;
    let registry_address = match args.registry {
        Some(addr) => parse_addr(&addr)?,
        None => parse_addr_from_deployments_file(deployments_path, REGISTRY_CONTRACT_KEY)?,
    };

    let steps = read_strategy_file(&args.strategy_path)?;
    let desired_hash = strategy_hash(&steps);

    let registry = IRegistry::new(registry_address, client.clone());
    let current_hash = registry
        .vaultStrategyHash(vault)
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    if current_hash == desired_hash {
        info!("vault {vault:#x} already runs strategy {desired_hash}, nothing to do");
        return Ok(());
    }

    info!(
        "setting {}-step strategy {desired_hash} for vault {vault:#x}",
        steps.len()
    );
    send_and_confirm(registry.setVaultStrategy(vault, steps_to_sol(&steps))).await?;

    Ok(())
}

/// Move the full token balance of a Safe (or a Safe-owned holder contract)
/// to a receiver, routed through the Safe's `execTransaction`
pub async fn sweep_safe(
    args: SweepSafeArgs,
    client: DynProvider,
    priv_key: &str,
) -> Result<(), ScriptError> {
    let safe_address = parse_addr(&args.safe)?;
    let token_address = parse_addr(&args.token)?;
    let receiver = parse_addr(&args.receiver)?;

    let sender = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .address();

    // A pre-validated signature only holds for a sender that is an owner
    let safe = IGnosisSafe::new(safe_address, client.clone());
    let owners = safe
        .getOwners()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    if !owners.contains(&sender) {
        return Err(ScriptError::ConfigValidation(format!(
            "sender {sender:#x} is not an owner of safe {safe_address:#x}"
        )));
    }

    // The balance lives on the holder when one is given, else on the Safe
    let holder = args.holder.as_deref().map(parse_addr).transpose()?;
    let balance_owner = holder.unwrap_or(safe_address);

    let token = IERC20::new(token_address, client.clone());
    let balance = token
        .balanceOf(balance_owner)
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    if balance.is_zero() {
        info!("{balance_owner:#x} holds no {token_address:#x}, nothing to sweep");
        return Ok(());
    }

    let (target, data) = match holder {
        Some(holder) => (holder, holder_sweep_calldata(token_address, receiver)),
        None => (token_address, erc20_transfer_calldata(receiver, balance)),
    };

    info!("sweeping {balance} of token {token_address:#x} to {receiver:#x}");

    let signatures = prevalidated_signature(sender);
    send_and_confirm(safe.execTransaction(
        target,
        U256::ZERO,
        data,
        SAFE_OPERATION_CALL,
        U256::ZERO,
        U256::ZERO,
        U256::ZERO,
        Address::ZERO,
        Address::ZERO,
        signatures,
    ))
    .await?;

    Ok(())
}

/// The desired facet registry for the swap diamond: the facet addresses come
/// from the deployments file, the signatures are fixed per facet
fn desired_facets(deployments_path: &str) -> Result<Vec<DesiredFacet>, ScriptError> {
    /// Collect a signature table into owned strings
    fn signatures(table: &[&str]) -> Vec<String> {
        table.iter().map(|s| s.to_string()).collect()
    }

    Ok(vec![
        DesiredFacet {
            name: "swap",
            address: parse_addr_from_deployments_file(deployments_path, SWAP_FACET_CONTRACT_KEY)?,
            signatures: signatures(&SWAP_FACET_SIGNATURES),
        },
        DesiredFacet {
            name: "quote",
            address: parse_addr_from_deployments_file(
                deployments_path,
                QUOTE_FACET_CONTRACT_KEY,
            )?,
            signatures: signatures(&QUOTE_FACET_SIGNATURES),
        },
        DesiredFacet {
            name: "admin",
            address: parse_addr_from_deployments_file(
                deployments_path,
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
