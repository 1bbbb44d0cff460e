//! Load, merge, and persist the rank history file.
//!
//! The history is append-only: observations are only ever pushed onto
//! `collections`. Same-day reruns append again rather than replacing earlier
//! samples for the same keyword.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::HistoryError;
use crate::types::{Observation, RankHistory};

impl RankHistory {
    /// Fresh history for the given keyword set, never updated.
    #[must_use]
    pub fn empty(keywords: &[String]) -> Self {
        Self {
            last_updated: None,
            keywords: keywords.to_vec(),
            collections: Vec::new(),
        }
    }

    /// Load the prior history from `path`.
    ///
    /// A missing, unreadable, or malformed file yields
    /// [`RankHistory::empty`]. A missing file is normal on the first run;
    /// any other failure is logged at `warn` before falling back.
    #[must_use]
    pub fn load(path: &Path, keywords: &[String]) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no prior rank history, starting fresh");
                return Self::empty(keywords);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "rank history unreadable, starting fresh"
                );
                return Self::empty(keywords);
            }
        };

        match serde_json::from_str::<RankHistory>(&content) {
            Ok(history) => {
                tracing::debug!(
                    path = %path.display(),
                    observations = history.collections.len(),
                    "loaded rank history"
                );
                history
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "rank history is not valid JSON for this format, starting fresh"
                );
                Self::empty(keywords)
            }
        }
    }

    /// Replace the tracked keyword list. Observations for keywords no longer
    /// tracked stay in `collections`.
    pub fn set_tracked_keywords(&mut self, keywords: &[String]) {
        self.keywords = keywords.to_vec();
    }

    pub fn record_observation(&mut self, observation: Observation) {
        self.collections.push(observation);
    }

    pub fn finalize(&mut self, now: DateTime<Utc>) {
        self.last_updated = Some(now);
    }

    /// Write the whole history to `path` as pretty JSON, replacing any
    /// existing file.
    ///
    /// The parent directory is created if needed. Data is written to a
    /// sibling `.tmp` file first and renamed over `path`, so readers see
    /// either the old or the new file.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`] if the directory, temp file, or rename
    /// fails, or [`HistoryError::Serialize`] if serialization fails.
    pub fn persist(&self, path: &Path) -> Result<(), HistoryError> {
        let io_err = |p: &Path| {
            let p = p.display().to_string();
            move |source: std::io::Error| HistoryError::Io { path: p, source }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let json = serde_json::to_string_pretty(self)?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);

        std::fs::write(tmp_path, json).map_err(io_err(tmp_path))?;
        if let Err(e) = std::fs::rename(tmp_path, path) {
            let _ = std::fs::remove_file(tmp_path);
            return Err(io_err(path)(e));
        }

        Ok(())
    }
}
