//! Service implementations

pub mod firecrawl_client;
pub mod firecrawl_search;

pub use firecrawl_client::{FirecrawlClient, ProviderItem, ProviderRecord, SearchData, SearchParams};
pub use firecrawl_search::FirecrawlSearchEngine;
