//! `collect` and `validate-config` command handlers.
//!
//! Keyword failures are logged and skipped inside the pipeline; only missing
//! credentials, a bad tracking config, or a failed final write abort the run.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serprank_core::{load_tracking_config, AppConfig, TrackingConfig};
use serprank_dataforseo::DataForSeoClient;
use serprank_rankings::{run_collection, FixedInterval, RunSummary};

/// Apply command-line path overrides on top of the environment config.
pub(crate) fn apply_overrides(
    mut config: AppConfig,
    tracking_path: Option<PathBuf>,
    data_file: Option<PathBuf>,
) -> AppConfig {
    if let Some(path) = tracking_path {
        config.tracking_path = path;
    }
    if let Some(path) = data_file {
        config.data_file = path;
    }
    config
}

pub(crate) fn build_client(config: &AppConfig) -> anyhow::Result<DataForSeoClient> {
    let client = DataForSeoClient::with_endpoint(
        &config.credentials.login,
        &config.credentials.password,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build DataForSEO client: {e}"))?;
    Ok(client.with_retry_policy(config.max_retries, config.retry_backoff_base_ms))
}

pub(crate) fn format_dry_run(tracking: &TrackingConfig, data_file: &Path) -> String {
    let mut out = format!(
        "dry-run: would query {} keywords for {} (location {}, language {}, device {}) and append to {}",
        tracking.keywords.len(),
        tracking.domain,
        tracking.location_code,
        tracking.language_code,
        tracking.device,
        data_file.display()
    );
    for keyword in &tracking.keywords {
        out.push_str("\n  - ");
        out.push_str(keyword);
    }
    out
}

pub(crate) fn format_summary(summary: &RunSummary) -> String {
    let mut out = format!(
        "recorded {}/{} keywords ({} ranked), {} observations total",
        summary.recorded, summary.attempted, summary.found, summary.total_observations
    );
    if !summary.skipped.is_empty() {
        out.push_str(&format!("\nskipped: {}", summary.skipped.join(", ")));
    }
    out.push_str(&format!("\nsaved to {}", summary.data_file.display()));
    out
}

/// Run one collection pass and persist the updated history.
///
/// # Errors
///
/// Returns an error if credentials are missing, the tracking config is
/// invalid, the client cannot be built, or the history cannot be written.
pub(crate) async fn run_collect(
    tracking_path: Option<PathBuf>,
    data_file: Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let config = serprank_core::load_app_config().context("configuration error")?;
    let config = apply_overrides(config, tracking_path, data_file);
    tracing::debug!(?config, "loaded configuration");

    let tracking = load_tracking_config(&config.tracking_path)?;

    if dry_run {
        println!("{}", format_dry_run(&tracking, &config.data_file));
        return Ok(());
    }

    let client = build_client(&config)?;
    let throttle = FixedInterval::from_millis(config.inter_request_delay_ms);

    tracing::info!(
        domain = %tracking.domain,
        keywords = tracking.keywords.len(),
        "starting rank collection"
    );

    let summary = run_collection(&client, &throttle, &tracking, &config.data_file)
        .await
        .with_context(|| format!("failed to save {}", config.data_file.display()))?;

    println!("{}", format_summary(&summary));
    Ok(())
}

/// Load and validate the tracking config without touching the API.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub(crate) fn run_validate_config(path: &Path) -> anyhow::Result<()> {
    let tracking = load_tracking_config(path)?;
    println!(
        "{}: ok ({} keywords for {})",
        path.display(),
        tracking.keywords.len(),
        tracking.domain
    );
    Ok(())
}
