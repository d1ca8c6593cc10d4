//! Firesearch Library
//!
//! Normalized web search on top of the Firecrawl hosted search API.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Search entities and errors
//!   - `entities/`: `SearchRequest`, `SearchItem`
//!   - `value_objects/`: `Category`, `DateFilter`
//!   - `errors/`: `SearchError`
//!
//! - **Ports** (`ports/`): The abstract `WebSearchEngine` capability
//!
//! - **Services** (`services/`): Firecrawl client and search adapter
//!
//! # Usage
//!
//! ```rust,ignore
//! use firesearch::{FirecrawlConfig, FirecrawlSearchEngine, SearchRequest, WebSearchEngine};
//!
//! let engine = FirecrawlSearchEngine::new(FirecrawlConfig::from_env());
//! let request = SearchRequest::new("OpenAI GPT-4").with_year_filter(2023);
//! for item in engine.perform_search(&request).await? {
//!     println!("{} - {}", item.title, item.url);
//! }
//! ```

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use config::{load_dotenv, FirecrawlConfig};
pub use domain::{Category, DateFilter, SearchError, SearchItem, SearchRequest};
pub use ports::WebSearchEngine;
pub use services::{FirecrawlClient, FirecrawlSearchEngine};
