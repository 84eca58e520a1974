//! Interest source trait

use super::models::{NormalizedInterest, SearchQuery};
use crate::error::ProxyError;
use async_trait::async_trait;

/// Something that can answer an interest search
#[async_trait]
pub trait InterestSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Run one search and return the normalized interests in upstream order
    async fn search(&self, query: &SearchQuery) -> Result<Vec<NormalizedInterest>, ProxyError>;
}
