//! SearchRequest - Normalized query parameters

use serde::{Deserialize, Serialize};

/// Result count used when the caller does not ask for one.
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Parameters for a single search call.
///
/// The query is passed through to the provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Requested maximum number of results. The provider may return fewer.
    #[serde(default = "default_result_count")]
    pub result_count: u32,
    /// Restrict results to a single calendar year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_filter: Option<i32>,
}

fn default_result_count() -> u32 {
    DEFAULT_RESULT_COUNT
}

impl SearchRequest {
    /// Create a request with the default result count and no year filter
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            result_count: DEFAULT_RESULT_COUNT,
            year_filter: None,
        }
    }

    /// Set the requested result count
    pub fn with_result_count(mut self, result_count: u32) -> Self {
        self.result_count = result_count;
        self
    }

    /// Restrict results to the given year
    pub fn with_year_filter(mut self, year: i32) -> Self {
        self.year_filter = Some(year);
        self
    }
}
