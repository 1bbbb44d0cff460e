//! Bounded retry with exponential back-off and jitter around a single SERP
//! query.
//!
//! Only transport-level failures are retried. An API-level error status is
//! final for the current run.

use std::future::Future;
use std::time::Duration;

use crate::error::DataForSeoError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** network timeouts and connection failures, and HTTP 429/5xx
/// responses that did not carry an API envelope.
///
/// **Not retriable:** [`DataForSeoError::ApiError`],
/// [`DataForSeoError::Deserialize`], [`DataForSeoError::InvalidEndpoint`],
/// and any other 4xx.
pub(crate) fn is_retriable(err: &DataForSeoError) -> bool {
    match err {
        DataForSeoError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        DataForSeoError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        DataForSeoError::ApiError { .. }
        | DataForSeoError::Deserialize { .. }
        | DataForSeoError::InvalidEndpoint { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient
/// errors.
///
/// The n-th retry waits `backoff_base_ms * 2^(n-1)` ms ± 25 % jitter, capped
/// at 60 s. `max_retries = 0` runs the operation exactly once.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, DataForSeoError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DataForSeoError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "DataForSEO transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
