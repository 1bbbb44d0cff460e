//! `DataForSEO` SERP request and response types.
//!
//! Every response is wrapped in an envelope carrying `status_code` and
//! `status_message`; the payload is nested as `tasks -> result -> items`.
//! Any level of that nesting may be `null`, missing, or of an unexpected
//! shape. Payload fields decode leniently: a value of the wrong type becomes
//! `None`, and a list element that does not decode is dropped. Callers treat
//! `None` as empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Envelope and task status code signalling success.
pub const STATUS_OK: i64 = 20_000;

/// One task in a live SERP request. The API accepts an array of these; the
/// client always sends exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRequest {
    pub keyword: String,
    pub location_code: u32,
    pub language_code: String,
    pub device: String,
    pub os: String,
    pub depth: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpResponse {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub status_code: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub status_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub tasks: Option<Vec<SerpTask>>,
}

impl SerpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpTask {
    #[serde(default, deserialize_with = "lenient")]
    pub status_code: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub status_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub result: Option<Vec<SerpResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpResult {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub items: Option<Vec<SerpItem>>,
}

/// A single SERP entry. Only the fields used for rank tracking are modelled;
/// the rest of the provider's item payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SerpItem {
    /// `"organic"`, `"paid"`, `"featured_snippet"`, `"people_also_ask"`, ...
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rank_group: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub rank_absolute: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// A non-array value becomes `None`; elements that fail to decode are dropped.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(Some(
            values
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

impl SerpItem {
    #[must_use]
    pub fn is_organic(&self) -> bool {
        self.item_type.as_deref() == Some("organic")
    }

    /// Provider rank, preferring `rank_group` over `rank_absolute`.
    /// A zero rank is treated as absent.
    #[must_use]
    pub fn rank(&self) -> Option<u32> {
        self.rank_group
            .filter(|&r| r > 0)
            .or(self.rank_absolute.filter(|&r| r > 0))
    }
}
