//! Rank-history accumulation for one tracked domain.
//!
//! Turns one SERP response per keyword into an [`Observation`] and appends it
//! to the long-lived [`RankHistory`] persisted as a single JSON file. Keyword
//! failures are logged and skipped; prior history is never rewritten.

pub mod error;
pub mod extract;
pub mod history;
pub mod locate;
pub mod pipeline;
pub mod source;
pub mod summarize;
pub mod throttle;
pub mod types;

pub use error::HistoryError;
pub use extract::extract_organic;
pub use locate::{locate_domain, SiteRank};
pub use pipeline::{build_observation, run_collection, run_collection_on, RunSummary};
pub use source::SerpSource;
pub use summarize::{summarize_top, TOP_N};
pub use throttle::{FixedInterval, NoThrottle, Throttle};
pub use types::{KeywordQuery, Observation, OrganicResult, RankHistory};
