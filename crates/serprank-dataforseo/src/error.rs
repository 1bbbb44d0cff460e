use thiserror::Error;

/// Errors returned by the `DataForSEO` client.
#[derive(Debug, Error)]
pub enum DataForSeoError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP status whose body was not a `DataForSEO` envelope.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope carried a `status_code` other than `20000`.
    #[error("DataForSEO API error {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("invalid endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
