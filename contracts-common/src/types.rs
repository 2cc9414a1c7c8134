//! Type definitions shared between the operations scripts and the
//! integration tests

use alloy_primitives::{Address, Selector};
use serde::{Deserialize, Serialize};

/// A desired price feed registration on the suite's oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRecord {
    /// The token whose price the feed reports
    pub token: Address,
    /// The aggregator contract answering for the token
    pub feed: Address,
}

/// A single hop of a vault strategy.
///
/// The field names follow the camelCase convention of the JSON plan files
/// produced by the strategy tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyStep {
    /// The liquidity pool the step deposits into or borrows from
    pub pool: Address,
    /// The token the step leaves the vault holding
    pub output_token: Address,
    /// Whether the step borrows from the pool rather than depositing
    pub is_borrow: bool,
}

/// A facet the swap diamond should route selectors to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredFacet {
    /// A human-readable name for logging
    pub name: &'static str,
    /// The deployed facet contract address
    pub address: Address,
    /// The canonical signatures of the functions the facet exposes
    pub signatures: Vec<String>,
}

/// The kind of routing change a planned cut applies, mirroring the EIP-2535
/// `FacetCutAction` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutAction {
    /// Route selectors that are currently unrouted
    Add,
    /// Re-route selectors currently pointing at another facet
    Replace,
    /// Drop routing for selectors no desired facet owns
    Remove,
}

impl CutAction {
    /// The uint8 value the diamond's ABI expects for this action
    pub fn as_u8(self) -> u8 {
        match self {
            CutAction::Add => 0,
            CutAction::Replace => 1,
            CutAction::Remove => 2,
        }
    }
}

/// One entry of a computed diamond cut: a facet, an action, and the
/// selectors it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCut {
    /// The facet the selectors are routed to. The zero address for removals.
    pub facet: Address,
    /// The routing change to apply
    pub action: CutAction,
    /// The selectors the change applies to, never empty
    pub selectors: Vec<Selector>,
}

/// Serialization tests for the shared types
#[cfg(test)]
mod tests {
    use alloy_primitives::Address;

    use super::{CutAction, StrategyStep};

    /// Plan files use camelCase keys; make sure a step round-trips through
    /// the wire names
    #[test]
    fn test_strategy_step_field_names() {
        let raw = r#"{
            "pool": "0x0000000000000000000000000000000000000001",
            "outputToken": "0x0000000000000000000000000000000000000002",
            "isBorrow": true
        }"#;

        let step: StrategyStep = serde_json::from_str(raw).unwrap();
        assert_eq!(step.pool, Address::with_last_byte(1));
        assert_eq!(step.output_token, Address::with_last_byte(2));
        assert!(step.is_borrow);

        let serialized = serde_json::to_string(&step).unwrap();
        assert!(serialized.contains("outputToken"));
        assert!(serialized.contains("isBorrow"));
    }

    /// The ABI encodes cut actions as uint8 0/1/2
    #[test]
    fn test_cut_action_abi_values() {
        assert_eq!(CutAction::Add.as_u8(), 0);
        assert_eq!(CutAction::Replace.as_u8(), 1);
        assert_eq!(CutAction::Remove.as_u8(), 2);
    }
}
