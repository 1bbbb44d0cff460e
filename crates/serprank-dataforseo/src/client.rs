//! HTTP client for the `DataForSEO` live SERP endpoint.
//!
//! Wraps `reqwest` with basic-auth credentials, one-task request bodies, and
//! envelope checking. A response whose `status_code` is not `20000` is
//! surfaced as [`DataForSeoError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::DataForSeoError;
use crate::retry::retry_with_backoff;
use crate::types::{SerpResponse, TaskRequest, STATUS_OK};

pub const DEFAULT_ENDPOINT: &str =
    "https://api.dataforseo.com/v3/serp/google/organic/live/advanced";

/// Client for the `DataForSEO` SERP API.
///
/// Use [`DataForSeoClient::new`] for production or
/// [`DataForSeoClient::with_endpoint`] to point at a mock server in tests.
pub struct DataForSeoClient {
    client: Client,
    endpoint: Url,
    login: String,
    password: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl std::fmt::Debug for DataForSeoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataForSeoClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("login", &self.login)
            .field("password", &"[redacted]")
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl DataForSeoClient {
    /// Creates a client pointed at the production live-advanced endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DataForSeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        login: &str,
        password: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, DataForSeoError> {
        Self::with_endpoint(login, password, timeout_secs, user_agent, DEFAULT_ENDPOINT)
    }

    /// Creates a client with a custom endpoint URL.
    ///
    /// Retries are disabled until [`DataForSeoClient::with_retry_policy`] is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`DataForSeoError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`DataForSeoError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute http(s) URL.
    pub fn with_endpoint(
        login: &str,
        password: &str,
        timeout_secs: u64,
        user_agent: &str,
        endpoint: &str,
    ) -> Result<Self, DataForSeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = parse_endpoint(endpoint)?;

        Ok(Self {
            client,
            endpoint,
            login: login.to_owned(),
            password: password.to_owned(),
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Enables retrying transient transport failures.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Runs one live SERP task and returns the decoded envelope.
    ///
    /// The body is decoded even on a non-2xx HTTP status, because the API
    /// reports authentication and quota failures inside the envelope.
    ///
    /// # Errors
    ///
    /// - [`DataForSeoError::ApiError`] if `status_code` is not `20000`.
    /// - [`DataForSeoError::Http`] on network failure.
    /// - [`DataForSeoError::UnexpectedStatus`] on a non-2xx status without
    ///   a decodable envelope.
    /// - [`DataForSeoError::Deserialize`] if a 2xx body is not an envelope.
    pub async fn live_organic(&self, task: &TaskRequest) -> Result<SerpResponse, DataForSeoError> {
        let response = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.post_task(task)
        })
        .await?;

        Self::check_api_error(&response)?;

        for task_status in response.tasks.iter().flatten() {
            if let Some(code) = task_status.status_code.filter(|&c| c != STATUS_OK) {
                tracing::warn!(
                    keyword = %task.keyword,
                    code,
                    message = task_status.status_message.as_deref().unwrap_or(""),
                    "DataForSEO task reported a non-success status"
                );
            }
        }

        Ok(response)
    }

    async fn post_task(&self, task: &TaskRequest) -> Result<SerpResponse, DataForSeoError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.login, Some(&self.password))
            .json(&[task])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<SerpResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(DataForSeoError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            }),
            Err(e) => Err(DataForSeoError::Deserialize {
                context: format!("live_organic(keyword={})", task.keyword),
                source: e,
            }),
        }
    }

    fn check_api_error(response: &SerpResponse) -> Result<(), DataForSeoError> {
        if response.is_success() {
            return Ok(());
        }
        Err(DataForSeoError::ApiError {
            code: response.status_code,
            message: response
                .status_message
                .clone()
                .unwrap_or_else(|| "unknown error".to_string()),
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, DataForSeoError> {
    let url = Url::parse(endpoint).map_err(|e| DataForSeoError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(DataForSeoError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
