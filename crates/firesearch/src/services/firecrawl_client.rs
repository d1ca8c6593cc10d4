//! Firecrawl search API client
//!
//! Thin wrapper over `POST /v2/search`. Knows the wire format, nothing about
//! normalized results.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::{FirecrawlConfig, API_KEY_VAR};
use crate::domain::errors::SearchError;

const SEARCH_PATH: &str = "/v2/search";

/// Client for a single Firecrawl API session.
pub struct FirecrawlClient {
    http: Client,
    api_key: String,
    api_url: String,
}

impl FirecrawlClient {
    /// Creates a client with its own HTTP connection pool.
    pub fn new(config: &FirecrawlConfig) -> Result<Self, SearchError> {
        Self::with_http_client(config, Client::new())
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    ///
    /// Fails with `ConfigurationMissing` when no API key is configured.
    pub fn with_http_client(config: &FirecrawlConfig, http: Client) -> Result<Self, SearchError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| SearchError::configuration_missing(API_KEY_VAR))?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            api_url: config.api_url().to_string(),
        })
    }

    /// Run one search request
    pub async fn search(&self, params: &SearchParams) -> Result<SearchData, SearchError> {
        let url = format!("{}{}", self.api_url, SEARCH_PATH);

        tracing::debug!(
            "Firecrawl search: query={:?} limit={} tbs={:?}",
            params.query,
            params.limit,
            params.tbs
        );

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::warn!("⚠️  Firecrawl search failed with HTTP {}", status);
            return Err(map_http_error(status, body));
        }

        let status = response.status();
        let envelope: SearchEnvelope = response.json().await?;

        if let Some(warning) = &envelope.warning {
            tracing::warn!("⚠️  Firecrawl warning: {}", warning);
        }

        if !envelope.success {
            return Err(SearchError::Provider {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| "Firecrawl reported an unsuccessful search".to_string()),
            });
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

// ============================================
// Request/Response Types
// ============================================

/// Body of a search request.
///
/// `tbs` is left out of the JSON entirely when unset; the provider rejects `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub query: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbs: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    data: Option<SearchData>,
    #[serde(default)]
    warning: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Search results partitioned by source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub web: Option<Vec<ProviderItem>>,
    #[serde(default)]
    pub news: Option<Vec<ProviderItem>>,
    #[serde(default)]
    pub images: Option<Vec<ProviderItem>>,
}

/// Result fields documented by the provider for web, news and image results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProviderRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub snippet: Option<String>,
    pub position: Option<u32>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
}

/// One result item as returned by the provider.
///
/// Items matching the documented shape become `Record`. Anything else is kept
/// as a raw key/value `Mapping`; non-object values become an empty mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderItem {
    Record(ProviderRecord),
    Mapping(Map<String, Value>),
}

impl<'de> Deserialize<'de> for ProviderItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let Value::Object(map) = value else {
            return Ok(ProviderItem::Mapping(Map::new()));
        };

        match ProviderRecord::deserialize(Value::Object(map.clone())) {
            Ok(record) => Ok(ProviderItem::Record(record)),
            Err(_) => Ok(ProviderItem::Mapping(map)),
        }
    }
}

// ============================================
// Helper Functions
// ============================================

fn map_http_error(status: StatusCode, body: String) -> SearchError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    SearchError::Provider {
        status: status.as_u16(),
        message,
    }
}
