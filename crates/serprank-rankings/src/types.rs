//! Persisted rank-history model and the per-keyword query unit.
//!
//! Field names serialize in camelCase to match the `rankings.json` layout
//! consumed downstream.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serprank_core::{Device, TrackingConfig};
use serprank_dataforseo::TaskRequest;

/// One keyword to query, with the market settings it is queried under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    pub keyword: String,
    pub location_code: u32,
    pub language_code: String,
    pub device: Device,
    pub os: String,
    pub depth: u32,
}

impl KeywordQuery {
    #[must_use]
    pub fn new(tracking: &TrackingConfig, keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            location_code: tracking.location_code,
            language_code: tracking.language_code.clone(),
            device: tracking.device,
            os: tracking.os.clone(),
            depth: tracking.depth,
        }
    }

    #[must_use]
    pub fn to_task_request(&self) -> TaskRequest {
        TaskRequest {
            keyword: self.keyword.clone(),
            location_code: self.location_code,
            language_code: self.language_code.clone(),
            device: self.device.to_string(),
            os: self.os.clone(),
            depth: self.depth,
        }
    }
}

/// One entry of an observation's top-N list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicResult {
    pub position: u32,
    pub domain: String,
    pub url: String,
    pub title: String,
}

/// One keyword's outcome for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// UTC calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub keyword: String,
    /// `0` when the tracked domain was not found, or when it matched an
    /// item that carried no rank.
    pub site_position: u32,
    /// Empty when the tracked domain was not found.
    pub site_url: String,
    pub total_organic_results: usize,
    pub top10: Vec<OrganicResult>,
}

impl Observation {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.site_url.is_empty()
    }
}

/// The full durable record: metadata plus every observation ever recorded,
/// in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankHistory {
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub collections: Vec<Observation>,
}
