//! The seam between the pipeline and the SERP provider.

use async_trait::async_trait;
use serprank_dataforseo::{DataForSeoClient, DataForSeoError, SerpResponse};

use crate::types::KeywordQuery;

/// Anything that can answer one keyword query with a SERP envelope.
///
/// Implementations return `Err` for transport failures and non-success API
/// statuses; the pipeline skips the keyword in either case.
#[async_trait]
pub trait SerpSource: Send + Sync {
    async fn fetch(&self, query: &KeywordQuery) -> Result<SerpResponse, DataForSeoError>;
}

#[async_trait]
impl SerpSource for DataForSeoClient {
    async fn fetch(&self, query: &KeywordQuery) -> Result<SerpResponse, DataForSeoError> {
        self.live_organic(&query.to_task_request()).await
    }
}
