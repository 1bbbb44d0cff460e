//! Collection run orchestration.
//!
//! 1. Load the prior history (or start fresh).
//! 2. For each configured keyword, in order: query, extract organic results,
//!    locate the tracked domain, summarize the top 10, record an observation.
//!    A failed query is logged and the keyword is skipped.
//! 3. Pause after every keyword, whatever its outcome.
//! 4. Overwrite the keyword list, stamp `lastUpdated`, persist once.
//!
//! Nothing is written until the last keyword has been processed.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use serprank_core::TrackingConfig;
use serprank_dataforseo::SerpResponse;

use crate::error::HistoryError;
use crate::extract::extract_organic;
use crate::locate::locate_domain;
use crate::source::SerpSource;
use crate::summarize::{summarize_top, TOP_N};
use crate::throttle::Throttle;
use crate::types::{KeywordQuery, Observation, RankHistory};

/// What a collection run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub recorded: usize,
    /// Recorded observations where the tracked domain ranked.
    pub found: usize,
    /// Keywords whose query failed this run, in query order.
    pub skipped: Vec<String>,
    /// Total observations in the persisted history.
    pub total_observations: usize,
    pub data_file: PathBuf,
}

/// Turn one successful SERP response into an observation for `keyword`.
#[must_use]
pub fn build_observation(
    date: NaiveDate,
    keyword: &str,
    response: &SerpResponse,
    domain: &str,
) -> Observation {
    let organics = extract_organic(response);
    let site = locate_domain(&organics, domain);
    let top10 = summarize_top(&organics, TOP_N);

    Observation {
        date,
        keyword: keyword.to_string(),
        site_position: site.position,
        site_url: site.url,
        total_organic_results: organics.len(),
        top10,
    }
}

/// Run one collection pass dated today (UTC).
///
/// # Errors
///
/// Returns [`HistoryError`] only if the final persist fails. Per-keyword
/// query failures are logged and skipped.
pub async fn run_collection<S, T>(
    source: &S,
    throttle: &T,
    tracking: &TrackingConfig,
    data_file: &Path,
) -> Result<RunSummary, HistoryError>
where
    S: SerpSource + ?Sized,
    T: Throttle + ?Sized,
{
    let today = Utc::now().date_naive();
    run_collection_on(source, throttle, tracking, data_file, today).await
}

/// Run one collection pass, stamping every observation with `date`.
///
/// # Errors
///
/// Returns [`HistoryError`] only if the final persist fails.
pub async fn run_collection_on<S, T>(
    source: &S,
    throttle: &T,
    tracking: &TrackingConfig,
    data_file: &Path,
    date: NaiveDate,
) -> Result<RunSummary, HistoryError>
where
    S: SerpSource + ?Sized,
    T: Throttle + ?Sized,
{
    let mut history = RankHistory::load(data_file, &tracking.keywords);
    let prior = history.collections.len();

    let mut recorded = 0usize;
    let mut found = 0usize;
    let mut skipped = Vec::new();

    for keyword in &tracking.keywords {
        let query = KeywordQuery::new(tracking, keyword);
        tracing::info!(keyword = %keyword, "querying SERP");

        match source.fetch(&query).await {
            Ok(response) => {
                let observation = build_observation(date, keyword, &response, &tracking.domain);
                if observation.is_found() {
                    found += 1;
                    tracing::info!(
                        keyword = %keyword,
                        position = observation.site_position,
                        url = %observation.site_url,
                        organic_results = observation.total_organic_results,
                        "tracked domain ranked"
                    );
                } else {
                    tracing::info!(
                        keyword = %keyword,
                        organic_results = observation.total_organic_results,
                        "tracked domain not found"
                    );
                }
                history.record_observation(observation);
                recorded += 1;
            }
            Err(e) => {
                tracing::warn!(
                    keyword = %keyword,
                    error = %e,
                    "SERP query failed, skipping keyword for this run"
                );
                skipped.push(keyword.clone());
            }
        }

        throttle.pause().await;
    }

    history.set_tracked_keywords(&tracking.keywords);
    history.finalize(Utc::now());
    history.persist(data_file)?;

    tracing::info!(
        path = %data_file.display(),
        prior,
        recorded,
        skipped = skipped.len(),
        "rank history saved"
    );

    Ok(RunSummary {
        attempted: tracking.keywords.len(),
        recorded,
        found,
        skipped,
        total_observations: history.collections.len(),
        data_file: data_file.to_path_buf(),
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
