//! Top-N projection of organic results.

use serprank_dataforseo::SerpItem;

use crate::types::OrganicResult;

/// Number of organic entries kept per observation.
pub const TOP_N: usize = 10;

/// Project the first `limit` items to `{position, domain, url, title}`.
///
/// Position falls back to the 1-based index when the item has no usable rank
/// field; missing text fields become empty strings.
#[must_use]
pub fn summarize_top(items: &[&SerpItem], limit: usize) -> Vec<OrganicResult> {
    items
        .iter()
        .take(limit)
        .zip(1u32..)
        .map(|(item, index)| OrganicResult {
            position: item.rank().unwrap_or(index),
            domain: item.domain.clone().unwrap_or_default(),
            url: item.url.clone().unwrap_or_default(),
            title: item.title.clone().unwrap_or_default(),
        })
        .collect()
}
