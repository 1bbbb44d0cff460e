//! Tracking configuration: which domain to look for, under which keywords,
//! in which market.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
    Tablet,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Desktop => write!(f, "desktop"),
            Device::Mobile => write!(f, "mobile"),
            Device::Tablet => write!(f, "tablet"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Matched as a case-sensitive substring of each result URL.
    pub domain: String,
    /// Queried in this order on every run.
    pub keywords: Vec<String>,
    #[serde(default = "default_location_code")]
    pub location_code: u32,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default)]
    pub device: Device,
    #[serde(default = "default_os")]
    pub os: String,
    /// Number of SERP entries requested per keyword.
    #[serde(default = "default_depth")]
    pub depth: u32,
}

fn default_location_code() -> u32 {
    2076
}

fn default_language_code() -> String {
    "pt".to_string()
}

fn default_os() -> String {
    "windows".to_string()
}

fn default_depth() -> u32 {
    100
}

/// Load and validate the tracking configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_tracking_config(path: &Path) -> Result<TrackingConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TrackingFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_tracking_config(&content)
}

/// Parse and validate tracking configuration from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_tracking_config(content: &str) -> Result<TrackingConfig, ConfigError> {
    let mut config: TrackingConfig = serde_yaml::from_str(content)?;
    config.domain = config.domain.trim().to_string();
    validate_tracking(&config)?;
    Ok(config)
}

fn validate_tracking(config: &TrackingConfig) -> Result<(), ConfigError> {
    // An empty domain would match every URL.
    if config.domain.is_empty() {
        return Err(ConfigError::Validation(
            "domain must be non-empty".to_string(),
        ));
    }

    if config.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    if config.language_code.trim().is_empty() {
        return Err(ConfigError::Validation(
            "language_code must be non-empty".to_string(),
        ));
    }

    if config.depth == 0 {
        return Err(ConfigError::Validation(
            "depth must be at least 1".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for keyword in &config.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords must be non-empty".to_string(),
            ));
        }
        if !seen.insert(keyword.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword: '{keyword}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tests;
