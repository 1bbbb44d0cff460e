use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize rank history: {0}")]
    Serialize(#[from] serde_json::Error),
}
