//! Top-N selection.

use super::{GroupAggregate, GroupTable};

/// Number of champions/agents reported as "top".
pub const TOP_GROUPS: usize = 5;

/// Sort descending by `key` and keep at most `limit` items.
///
/// The sort is stable: items with equal keys keep their input order.
/// `None` keeps every item.
pub fn top_n_by_key<T, K, F>(mut items: Vec<T>, limit: Option<usize>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

/// The [`TOP_GROUPS`] most-played groups, ties in first-seen order.
pub fn top_groups(groups: GroupTable) -> Vec<GroupAggregate> {
    top_n_by_key(groups.into_vec(), Some(TOP_GROUPS), |g| g.games)
}
