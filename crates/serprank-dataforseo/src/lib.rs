//! Client for the `DataForSEO` SERP API (Google organic, live advanced mode).

pub mod client;
pub mod error;
pub mod types;

mod retry;

pub use client::DataForSeoClient;
pub use error::DataForSeoError;
pub use types::{SerpItem, SerpResponse, SerpResult, SerpTask, TaskRequest, STATUS_OK};
