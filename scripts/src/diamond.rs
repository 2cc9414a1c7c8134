//! Facet selector bookkeeping for the swap diamond.
//!
//! Planning is pure: the command layer reads the loupe and feeds the current
//! routing in, so cut computation is testable without a chain.

use std::collections::HashMap;

use alloy_primitives::{keccak256, Address, Selector};
use contracts_common::{
    constants::NUM_BYTES_SELECTOR,
    types::{CutAction, DesiredFacet, PlannedCut},
};
use itertools::Itertools;

use crate::errors::ScriptError;

/// The four-byte selector of the given canonical function signature
pub fn function_selector(signature: &str) -> Selector {
    let digest = keccak256(signature.as_bytes());
    Selector::from_slice(&digest[..NUM_BYTES_SELECTOR])
}

/// The selectors of a desired facet, in signature order with duplicates
/// removed
pub fn facet_selectors(signatures: &[String]) -> Vec<Selector> {
    signatures
        .iter()
        .map(|sig| function_selector(sig))
        .unique()
        .collect()
}

/// Compute the minimal cut list taking the diamond's current routing to the
/// desired routing.
///
/// A selector routed nowhere is added under its desired facet, one routed to
/// a different facet is replaced, and one owned by no desired facet is
/// removed. Selectors already routed correctly produce no cut, so running
/// the planner on the routing it just produced yields an empty plan.
pub fn plan_cuts(
    desired: &[DesiredFacet],
    current: &[(Address, Vec<Selector>)],
) -> Result<Vec<PlannedCut>, ScriptError> {
    // Map each selector to the facet that should own it. A selector claimed
    // by two different facets is a configuration error, not a dedup.
    let mut desired_owner: HashMap<Selector, Address> = HashMap::new();
    for facet in desired {
        for selector in facet_selectors(&facet.signatures) {
            if let Some(prev) = desired_owner.insert(selector, facet.address) {
                if prev != facet.address {
                    return Err(ScriptError::ConfigValidation(format!(
                        "selector {selector} claimed by facet {} and facet {prev}",
                        facet.address,
                    )));
                }
            }
        }
    }

    let mut current_owner: HashMap<Selector, Address> = HashMap::new();
    for (facet, selectors) in current {
        for selector in selectors {
            current_owner.insert(*selector, *facet);
        }
    }

    let mut cuts = Vec::new();
    for facet in desired {
        let mut add = Vec::new();
        let mut replace = Vec::new();
        for selector in facet_selectors(&facet.signatures) {
            match current_owner.get(&selector) {
                None => add.push(selector),
                Some(owner) if *owner != facet.address => replace.push(selector),
                // Already routed to the right facet
                Some(_) => {}
            }
        }

        if !add.is_empty() {
            cuts.push(PlannedCut {
                facet: facet.address,
                action: CutAction::Add,
                selectors: add,
            });
        }
        if !replace.is_empty() {
            cuts.push(PlannedCut {
                facet: facet.address,
                action: CutAction::Replace,
                selectors: replace,
            });
        }
    }

    // Selectors routed on chain that no desired facet owns, in loupe order
    let removals = current
        .iter()
        .flat_map(|(_, selectors)| selectors.iter().copied())
        .filter(|selector| !desired_owner.contains_key(selector))
        .unique()
        .collect_vec();
    if !removals.is_empty() {
        cuts.push(PlannedCut {
            facet: Address::ZERO,
            action: CutAction::Remove,
            selectors: removals,
        });
    }

    Ok(cuts)
}
