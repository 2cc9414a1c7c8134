//! Vault strategy plan handling: parsing plan files, ABI encoding, and the
//! hash the registry keys strategies by

use alloy_primitives::{keccak256, Address, B256};
use alloy_sol_types::SolValue;
use contracts_common::types::StrategyStep;

use crate::{errors::ScriptError, solidity::IRegistry};

/// The hash under which the registry stores a vault's strategy: the
/// keccak256 of the ABI encoding of the `(pool, outputToken, isBorrow)`
/// step tuples
pub fn strategy_hash(steps: &[StrategyStep]) -> B256 {
    let tuples: Vec<(Address, Address, bool)> = steps
        .iter()
        .map(|step| (step.pool, step.output_token, step.is_borrow))
        .collect();

    keccak256(tuples.abi_encode())
}

/// Parse a JSON strategy plan file into steps.
///
/// An empty plan is rejected: clearing a strategy is not something the
/// scripts do.
pub fn read_strategy_file(path: &str) -> Result<Vec<StrategyStep>, ScriptError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
    let steps: Vec<StrategyStep> =
        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    if steps.is_empty() {
        return Err(ScriptError::ConfigValidation(
            "strategy plan has no steps".to_string(),
        ));
    }

    Ok(steps)
}

/// Convert plan steps into the registry's ABI struct
pub(crate) fn steps_to_sol(steps: &[StrategyStep]) -> Vec<IRegistry::Step> {
    steps
        .iter()
        .map(|step| IRegistry::Step {
            pool: step.pool,
            outputToken: step.output_token,
            isBorrow: step.is_borrow,
        })
        .collect()
}
