use crate::app_config::{AppConfig, Credentials};
use crate::ConfigError;

const DEFAULT_API_URL: &str = "https://api.dataforseo.com/v3/serp/google/organic/live/advanced";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if the credentials are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if the credentials are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup and no `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    // An empty credential is as useless as a missing one.
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let login = require("DATAFORSEO_LOGIN")?;
    let password = require("DATAFORSEO_PASSWORD")?;

    let tracking_path = PathBuf::from(or_default(
        "SERPRANK_CONFIG_PATH",
        "./config/tracking.yaml",
    ));
    let data_file = PathBuf::from(or_default(
        "SERPRANK_DATA_FILE",
        "./docs/data/rankings.json",
    ));
    let api_url = or_default("SERPRANK_API_URL", DEFAULT_API_URL);

    let request_timeout_secs = parse_u64("SERPRANK_REQUEST_TIMEOUT_SECS", "120")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SERPRANK_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("SERPRANK_USER_AGENT", "serprank/0.1 (rank-tracking)");
    let inter_request_delay_ms = parse_u64("SERPRANK_INTER_REQUEST_DELAY_MS", "2000")?;
    let max_retries = parse_u32("SERPRANK_MAX_RETRIES", "0")?;
    let retry_backoff_base_ms = parse_u64("SERPRANK_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        credentials: Credentials { login, password },
        tracking_path,
        data_file,
        api_url,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
