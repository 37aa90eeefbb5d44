//! Coverage check between the two indexes.
//!
//! Reports every old-tree permalink with no counterpart in the new tree.
//! Purely diagnostic: the planner re-checks membership itself, so this list
//! never gates redirect generation — it is the operator's coverage-gap
//! report for the migration.

use crate::types::PermalinkIndex;

/// Permalinks present in `source` but absent from `dest`, in index order.
pub fn unmatched_permalinks(source: &PermalinkIndex, dest: &PermalinkIndex) -> Vec<String> {
    source
        .permalinks()
        .filter(|permalink| !dest.contains(permalink))
        .map(String::from)
        .collect()
}

/// Count of `source` permalinks that do exist in `dest`.
pub fn matched_count(source: &PermalinkIndex, dest: &PermalinkIndex) -> usize {
    source
        .permalinks()
        .filter(|permalink| dest.contains(permalink))
        .count()
}
