//! Search Errors
//!
//! Error types for search operations.

use thiserror::Error;

/// Errors surfaced by a search call
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Configuration missing: {key} is not set")]
    ConfigurationMissing { key: String },

    #[error("Invalid year filter: {0}")]
    InvalidYearFilter(i32),

    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned an error ({status}): {message}")]
    Provider { status: u16, message: String },
}

impl SearchError {
    pub fn configuration_missing<T: AsRef<str>>(key: T) -> Self {
        Self::ConfigurationMissing {
            key: key.as_ref().to_string(),
        }
    }

    /// Network, authentication or provider-side failure of the remote call
    pub fn is_provider_request_failed(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Provider { .. })
    }
}
