//! Web Search Engine Port
//!
//! Abstract interface for web search operations.

use async_trait::async_trait;

use crate::domain::{SearchError, SearchItem, SearchRequest};

/// Service interface for web search engines
#[async_trait]
pub trait WebSearchEngine: Send + Sync {
    /// Short engine identifier, used in logs
    fn name(&self) -> &str;

    /// Run one search and return normalized results in provider order
    async fn perform_search(&self, request: &SearchRequest) -> Result<Vec<SearchItem>, SearchError>;
}
