pub mod app_config;
pub mod config;
pub mod tracking;

pub use app_config::{AppConfig, Credentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use tracking::{load_tracking_config, Device, TrackingConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read tracking config {path}: {source}")]
    TrackingFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tracking config: {0}")]
    TrackingFileParse(#[from] serde_yaml::Error),

    #[error("invalid tracking config: {0}")]
    Validation(String),
}
