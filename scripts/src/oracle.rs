//! Price feed reconciliation for the suite's oracle.
//!
//! The oracle reports the zero address for tokens without a registered feed,
//! so an unset token is always pending.

use std::collections::{HashMap, HashSet};

use alloy_primitives::Address;
use contracts_common::types::FeedRecord;

use crate::{constants::DEFAULT_FEED_RECORDS, errors::ScriptError};

/// Load the desired feed table, from the given JSON file when a path is
/// given, else the built-in default table
pub fn load_feed_table(feeds_path: Option<&str>) -> Result<Vec<FeedRecord>, ScriptError> {
    match feeds_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| ScriptError::ReadFile(e.to_string()))?;
            serde_json::from_str(&contents).map_err(|e| ScriptError::ReadFile(e.to_string()))
        }
        None => Ok(DEFAULT_FEED_RECORDS.to_vec()),
    }
}

/// Keep the desired records whose token is unregistered on chain or
/// registered to a different feed, in desired-table order
pub fn plan_feed_updates(
    desired: &[FeedRecord],
    current: &HashMap<Address, Address>,
) -> Result<Vec<FeedRecord>, ScriptError> {
    // A token appearing twice in the desired table is ambiguous
    let mut seen = HashSet::new();
    for record in desired {
        if !seen.insert(record.token) {
            return Err(ScriptError::ConfigValidation(format!(
                "token {} appears twice in the feed table",
                record.token,
            )));
        }
    }

    Ok(desired
        .iter()
        .filter(|record| {
            current.get(&record.token).copied().unwrap_or(Address::ZERO) != record.feed
        })
        .copied()
        .collect())
}

/// Unit tests for feed reconciliation planning
#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use alloy_primitives::Address;
    use contracts_common::types::FeedRecord;

    use crate::constants::DEFAULT_FEED_RECORDS;

    use super::plan_feed_updates;

    /// A feed record between the given token & feed address bytes
    fn record(token_byte: u8, feed_byte: u8) -> FeedRecord {
        FeedRecord {
            token: Address::with_last_byte(token_byte),
            feed: Address::with_last_byte(feed_byte),
        }
    }

    /// Tests that unset & stale feeds are pending and matching ones are not
    #[test]
    fn test_plan_keeps_unset_and_differing_feeds() {
        let desired = vec![record(1, 10), record(2, 20), record(3, 30)];

        // Token 1 is unset, token 2 points at a stale feed, token 3 matches
        let mut current = HashMap::new();
        current.insert(Address::with_last_byte(2), Address::with_last_byte(99));
        current.insert(Address::with_last_byte(3), Address::with_last_byte(30));

        let pending = plan_feed_updates(&desired, &current).unwrap();
        assert_eq!(pending, vec![record(1, 10), record(2, 20)]);
    }

    /// Tests that a zero-address feed is treated as unregistered
    #[test]
    fn test_plan_zero_feed_counts_as_unset() {
        let desired = vec![record(1, 10)];

        let mut current = HashMap::new();
        current.insert(Address::with_last_byte(1), Address::ZERO);

        let pending = plan_feed_updates(&desired, &current).unwrap();
        assert_eq!(pending, vec![record(1, 10)]);
    }

    /// Tests that a fully registered table plans nothing
    #[test]
    fn test_plan_matching_table_is_empty() {
        let desired = vec![record(1, 10), record(2, 20)];

        let current = desired.iter().map(|r| (r.token, r.feed)).collect();

        let pending = plan_feed_updates(&desired, &current).unwrap();
        assert!(pending.is_empty());
    }

    /// Tests that a duplicated token in the table is rejected
    #[test]
    fn test_plan_duplicate_token_is_rejected() {
        let desired = vec![record(1, 10), record(1, 20)];
        assert!(plan_feed_updates(&desired, &HashMap::new()).is_err());
    }

    /// Tests that the built-in table has no duplicate tokens
    #[test]
    fn test_default_table_has_unique_tokens() {
        let tokens: HashSet<_> = DEFAULT_FEED_RECORDS.iter().map(|r| r.token).collect();
        assert_eq!(tokens.len(), DEFAULT_FEED_RECORDS.len());
    }
}
