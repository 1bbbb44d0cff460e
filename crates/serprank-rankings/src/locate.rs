//! Tracked-domain rank lookup.

use serprank_dataforseo::SerpItem;

/// Where the tracked domain ranked, or the "not found" sentinel
/// (`position == 0`, empty `url`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRank {
    pub position: u32,
    pub url: String,
}

impl SiteRank {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Find the first item whose URL contains `domain` (case-sensitive substring).
///
/// Later matches are ignored. The position is the item's `rank_group`,
/// falling back to `rank_absolute`, then `0`. Items with no URL never match.
#[must_use]
pub fn locate_domain(items: &[&SerpItem], domain: &str) -> SiteRank {
    items
        .iter()
        .find_map(|item| {
            let url = item.url.as_deref().filter(|u| !u.is_empty())?;
            url.contains(domain).then(|| SiteRank {
                position: item.rank().unwrap_or(0),
                url: url.to_string(),
            })
        })
        .unwrap_or_default()
}
