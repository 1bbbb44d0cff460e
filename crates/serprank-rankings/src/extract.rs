//! Organic result extraction from a raw SERP envelope.

use serprank_dataforseo::{SerpItem, SerpResponse};

/// Collect every organic item across `tasks -> result -> items`, in API order.
///
/// Paid, featured-snippet, and other non-organic item types are dropped.
/// Missing or `null` collections at any level contribute nothing, so the
/// worst case is an empty `Vec`.
#[must_use]
pub fn extract_organic(response: &SerpResponse) -> Vec<&SerpItem> {
    response
        .tasks
        .iter()
        .flatten()
        .flat_map(|task| task.result.iter().flatten())
        .flat_map(|result| result.items.iter().flatten())
        .filter(|item| item.is_organic())
        .collect()
}
