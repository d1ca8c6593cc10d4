//! Configuration for the Firecrawl provider
//!
//! Values come from the process environment, optionally seeded from a `.env` file.

use std::path::PathBuf;

pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";
pub const API_URL_VAR: &str = "FIRECRAWL_API_URL";

const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

/// Firecrawl connection settings
#[derive(Clone)]
pub struct FirecrawlConfig {
    api_key: Option<String>,
    api_url: String,
}

impl std::fmt::Debug for FirecrawlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirecrawlConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl FirecrawlConfig {
    /// Read `FIRECRAWL_API_KEY` and `FIRECRAWL_API_URL` from the process environment.
    ///
    /// A missing key is not an error here; it surfaces when a search is made.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            config.api_key = Some(key);
        }
        if let Some(url) = lookup(API_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config = config.with_api_url(url);
        }

        config
    }

    /// Set API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base URL (self-hosted instances, tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Load a `.env` file from the current directory or its parents.
///
/// Logs the file and the variable names it defines. Variables already set in the
/// process environment keep their values. Returns the loaded path, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            let names: Vec<String> = dotenvy::from_path_iter(&path)
                .map(|iter| {
                    iter.filter_map(|item| item.ok().map(|(name, _)| name))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();

            tracing::info!("📄 Loaded {} ({} variables)", path.display(), names.len());
            for name in &names {
                tracing::info!("   {}", name);
            }
            Some(path)
        }
        Err(e) if e.not_found() => {
            tracing::debug!("No .env file found");
            None
        }
        Err(e) => {
            tracing::warn!("⚠️  Failed to load .env file: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = FirecrawlConfig::from_lookup(lookup(&[]));
        assert_eq!(config.api_key(), None);
        assert_eq!(config.api_url(), "https://api.firecrawl.dev");
    }

    #[test]
    fn test_reads_key_and_url() {
        let config = FirecrawlConfig::from_lookup(lookup(&[
            ("FIRECRAWL_API_KEY", "fc-123"),
            ("FIRECRAWL_API_URL", "http://localhost:3002/"),
        ]));
        assert_eq!(config.api_key(), Some("fc-123"));
        assert_eq!(config.api_url(), "http://localhost:3002");
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = FirecrawlConfig::from_lookup(lookup(&[("FIRECRAWL_API_KEY", "  ")]));
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = FirecrawlConfig::default().with_api_key("fc-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("fc-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
