//! Utilities for the deploy & administration scripts

use std::{fs, path::PathBuf, str::FromStr};

use alloy::{
    contract::{CallBuilder, CallDecoder},
    network::{Ethereum, TransactionBuilder},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, B256};
use contracts_common::constants::{NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT};
use json::JsonValue;

use crate::{
    constants::{
        ADMIN_FACET_BYTECODE, ADMIN_FACET_CONTRACT_KEY, DEPLOYMENTS_KEY, LIMIT_ORDERBOOK_BYTECODE,
        LIMIT_ORDERBOOK_CONTRACT_KEY, NUM_TX_CONFIRMATIONS, PRICE_ORACLE_BYTECODE,
        PRICE_ORACLE_CONTRACT_KEY, QUOTE_FACET_BYTECODE, QUOTE_FACET_CONTRACT_KEY,
        REGISTRY_BYTECODE, REGISTRY_CONTRACT_KEY, SWAP_DIAMOND_BYTECODE,
        SWAP_DIAMOND_CONTRACT_KEY, SWAP_FACET_BYTECODE, SWAP_FACET_CONTRACT_KEY,
        TOKEN_ADAPTER_BYTECODE, TOKEN_ADAPTER_CONTRACT_KEY, VAULT_BYTECODE, VAULT_CONTRACT_KEY,
    },
    errors::ScriptError,
    types::SuiteContract,
};

/// Sets up the provider with which the scripts submit transactions,
/// signing with the given private key against the given RPC endpoint.
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url =
        Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    Ok(DynProvider::new(provider))
}

/// Parse an address from a hex string
pub fn parse_addr(addr: &str) -> Result<Address, ScriptError> {
    Address::from_str(addr).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Read & parse the JSON file at the given path
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Parse a deployed contract's address from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadFile(format!(
                    "could not parse address for `{contract_key}` from deployments file"
                ))
            })?,
    )
    .map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Write a deployed contract's address under its key in the deployments file
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteFile(e.to_string()))?;

    Ok(())
}

/// The deployments file key under which the given contract's address is
/// recorded
pub fn get_contract_key(contract: SuiteContract) -> &'static str {
    match contract {
        SuiteContract::Vault => VAULT_CONTRACT_KEY,
        SuiteContract::Registry => REGISTRY_CONTRACT_KEY,
        SuiteContract::PriceOracle => PRICE_ORACLE_CONTRACT_KEY,
        SuiteContract::SwapDiamond => SWAP_DIAMOND_CONTRACT_KEY,
        SuiteContract::LimitOrderbook => LIMIT_ORDERBOOK_CONTRACT_KEY,
        SuiteContract::TokenAdapter => TOKEN_ADAPTER_CONTRACT_KEY,
        SuiteContract::SwapFacet => SWAP_FACET_CONTRACT_KEY,
        SuiteContract::QuoteFacet => QUOTE_FACET_CONTRACT_KEY,
        SuiteContract::AdminFacet => ADMIN_FACET_CONTRACT_KEY,
    }
}

/// The compiled creation bytecode of the given contract
pub fn get_contract_bytecode(contract: SuiteContract) -> &'static str {
    match contract {
        SuiteContract::Vault => VAULT_BYTECODE,
        SuiteContract::Registry => REGISTRY_BYTECODE,
        SuiteContract::PriceOracle => PRICE_ORACLE_BYTECODE,
        SuiteContract::SwapDiamond => SWAP_DIAMOND_BYTECODE,
        SuiteContract::LimitOrderbook => LIMIT_ORDERBOOK_BYTECODE,
        SuiteContract::TokenAdapter => TOKEN_ADAPTER_BYTECODE,
        SuiteContract::SwapFacet => SWAP_FACET_BYTECODE,
        SuiteContract::QuoteFacet => QUOTE_FACET_BYTECODE,
        SuiteContract::AdminFacet => ADMIN_FACET_BYTECODE,
    }
}

/// Read the address stored in the given storage slot of a contract.
///
/// The address occupies the low 20 bytes of the storage word.
pub async fn read_storage_address(
    client: &DynProvider,
    contract: Address,
    slot: B256,
) -> Result<Address, ScriptError> {
    let word = client
        .get_storage_at(contract, slot.into())
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    let word_bytes = B256::from(word);
    Ok(Address::from_slice(
        &word_bytes[NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..NUM_BYTES_STORAGE_SLOT],
    ))
}

/// Deploy a contract from its creation bytecode, appending the ABI-encoded
/// constructor arguments, and return the deployed address
pub async fn deploy_creation_code(
    client: &DynProvider,
    bytecode_hex: &str,
    constructor_args: Vec<u8>,
) -> Result<Address, ScriptError> {
    let mut code = hex::decode(bytecode_hex.trim().trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    code.extend(constructor_args);

    let tx = TransactionRequest::default().with_deploy_code(code);
    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .with_required_confirmations(NUM_TX_CONFIRMATIONS)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(
            "deployment receipt carries no contract address".to_string(),
        )
    })
}

/// Send a contract call and wait for its receipt, erroring if it reverted
pub async fn send_and_confirm<P: Provider, C: CallDecoder>(
    tx: CallBuilder<P, C, Ethereum>,
) -> Result<TransactionReceipt, ScriptError> {
    let receipt = tx
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .with_required_confirmations(NUM_TX_CONFIRMATIONS)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "transaction {} reverted",
            receipt.transaction_hash,
        )));
    }

    Ok(receipt)
}
