use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with both credentials populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("DATAFORSEO_LOGIN", "ops@example.com");
    m.insert("DATAFORSEO_PASSWORD", "s3cret");
    m
}

#[test]
fn build_app_config_fails_without_login() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("DATAFORSEO_PASSWORD", "s3cret");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "DATAFORSEO_LOGIN"),
        "expected MissingEnvVar(DATAFORSEO_LOGIN), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_password() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("DATAFORSEO_LOGIN", "ops@example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "DATAFORSEO_PASSWORD"),
        "expected MissingEnvVar(DATAFORSEO_PASSWORD), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_credential_as_missing() {
    let mut map = full_env();
    map.insert("DATAFORSEO_PASSWORD", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "DATAFORSEO_PASSWORD"),
        "expected MissingEnvVar(DATAFORSEO_PASSWORD), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.credentials.login, "ops@example.com");
    assert_eq!(cfg.credentials.password, "s3cret");
    assert_eq!(
        cfg.tracking_path,
        std::path::PathBuf::from("./config/tracking.yaml")
    );
    assert_eq!(
        cfg.data_file,
        std::path::PathBuf::from("./docs/data/rankings.json")
    );
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.request_timeout_secs, 120);
    assert_eq!(cfg.inter_request_delay_ms, 2000);
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.retry_backoff_base_ms, 1000);
}

#[test]
fn build_app_config_honours_overrides() {
    let mut map = full_env();
    map.insert("SERPRANK_DATA_FILE", "/tmp/out/rankings.json");
    map.insert("SERPRANK_API_URL", "http://localhost:9999/serp");
    map.insert("SERPRANK_INTER_REQUEST_DELAY_MS", "0");
    map.insert("SERPRANK_MAX_RETRIES", "2");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(
        cfg.data_file,
        std::path::PathBuf::from("/tmp/out/rankings.json")
    );
    assert_eq!(cfg.api_url, "http://localhost:9999/serp");
    assert_eq!(cfg.inter_request_delay_ms, 0);
    assert_eq!(cfg.max_retries, 2);
}

#[test]
fn build_app_config_rejects_non_numeric_delay() {
    let mut map = full_env();
    map.insert("SERPRANK_INTER_REQUEST_DELAY_MS", "two seconds");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SERPRANK_INTER_REQUEST_DELAY_MS"),
        "expected InvalidEnvVar(SERPRANK_INTER_REQUEST_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = full_env();
    map.insert("SERPRANK_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SERPRANK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SERPRANK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_password() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("s3cret"), "password leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
