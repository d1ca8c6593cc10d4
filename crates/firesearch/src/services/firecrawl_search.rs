//! Firecrawl search engine
//!
//! Turns a `SearchRequest` into one Firecrawl search call and flattens the
//! category-partitioned response into `SearchItem`s.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::FirecrawlConfig;
use crate::domain::{Category, DateFilter, SearchError, SearchItem, SearchRequest};
use crate::ports::WebSearchEngine;
use crate::services::firecrawl_client::{
    FirecrawlClient, ProviderItem, ProviderRecord, SearchData, SearchParams,
};

/// Web search engine backed by Firecrawl.
///
/// Holds configuration only; a `FirecrawlClient` is built for every search, so
/// a missing API key shows up as an error on the call rather than here.
#[derive(Debug, Clone)]
pub struct FirecrawlSearchEngine {
    config: FirecrawlConfig,
    http: Client,
}

impl FirecrawlSearchEngine {
    pub fn new(config: FirecrawlConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Engine configured from `FIRECRAWL_API_KEY` / `FIRECRAWL_API_URL`
    pub fn from_env() -> Self {
        Self::new(FirecrawlConfig::from_env())
    }

    pub fn config(&self) -> &FirecrawlConfig {
        &self.config
    }
}

impl Default for FirecrawlSearchEngine {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl WebSearchEngine for FirecrawlSearchEngine {
    fn name(&self) -> &str {
        "firecrawl"
    }

    async fn perform_search(&self, request: &SearchRequest) -> Result<Vec<SearchItem>, SearchError> {
        let params = build_params(request)?;
        let client = FirecrawlClient::with_http_client(&self.config, self.http.clone())?;

        let data = client.search(&params).await?;
        let items = flatten(data);

        tracing::info!("🔍 Firecrawl: {} -> {} results", request.query, items.len());

        Ok(items)
    }
}

// ============================================
// Helper Functions
// ============================================

fn build_params(request: &SearchRequest) -> Result<SearchParams, SearchError> {
    let tbs = request
        .year_filter
        .map(DateFilter::for_year)
        .transpose()?
        .map(|filter| filter.to_tbs());

    Ok(SearchParams {
        query: request.query.clone(),
        limit: request.result_count,
        tbs,
    })
}

fn flatten(data: SearchData) -> Vec<SearchItem> {
    let SearchData { web, news, images } = data;
    let mut items = Vec::new();

    for (category, results) in Category::ALL.into_iter().zip([web, news, images]) {
        let Some(results) = results.filter(|r| !r.is_empty()) else {
            continue;
        };

        tracing::debug!("Firecrawl {}: {} items", category, results.len());
        items.extend(results.iter().map(to_search_item));
    }

    items
}

fn to_search_item(item: &ProviderItem) -> SearchItem {
    SearchItem {
        title: extract_title(item),
        url: extract_url(item),
        description: extract_description(item),
    }
}

fn extract_title(item: &ProviderItem) -> String {
    first_present([
        record(item).and_then(|r| r.title.as_deref()),
        mapping(item).and_then(|m| lookup(m, "title")),
    ])
}

fn extract_url(item: &ProviderItem) -> String {
    first_present([
        record(item).and_then(|r| r.url.as_deref()),
        mapping(item).and_then(|m| lookup(m, "url")),
    ])
}

fn extract_description(item: &ProviderItem) -> String {
    first_present([
        record(item).and_then(|r| r.description.as_deref()),
        record(item).and_then(|r| r.snippet.as_deref()),
        mapping(item).and_then(|m| lookup(m, "description")),
        mapping(item).and_then(|m| lookup(m, "snippet")),
    ])
}

fn record(item: &ProviderItem) -> Option<&ProviderRecord> {
    match item {
        ProviderItem::Record(record) => Some(record),
        ProviderItem::Mapping(_) => None,
    }
}

fn mapping(item: &ProviderItem) -> Option<&Map<String, Value>> {
    match item {
        ProviderItem::Record(_) => None,
        ProviderItem::Mapping(map) => Some(map),
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// First non-empty candidate, or an empty string
fn first_present<const N: usize>(candidates: [Option<&str>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> SearchData {
        serde_json::from_value(value).unwrap()
    }

    fn urls(items: &[SearchItem]) -> Vec<&str> {
        items.iter().map(|i| i.url.as_str()).collect()
    }

    #[test]
    fn test_params_without_year() {
        let params = build_params(&SearchRequest::new("OpenAI GPT-4")).unwrap();
        assert_eq!(params.query, "OpenAI GPT-4");
        assert_eq!(params.limit, 10);
        assert_eq!(params.tbs, None);
    }

    #[test]
    fn test_params_with_year() {
        let request = SearchRequest::new("OpenAI GPT-4")
            .with_result_count(5)
            .with_year_filter(2023);
        let params = build_params(&request).unwrap();
        assert_eq!(params.limit, 5);
        assert_eq!(
            params.tbs.as_deref(),
            Some("cdr:1,cd_min:01/01/2023,cd_max:12/31/2023")
        );
    }

    #[test]
    fn test_params_invalid_year() {
        let request = SearchRequest::new("q").with_year_filter(i32::MIN);
        assert!(matches!(
            build_params(&request),
            Err(SearchError::InvalidYearFilter(_))
        ));
    }

    #[test]
    fn test_web_only_preserves_order() {
        let items = flatten(data(json!({
            "web": [
                { "title": "A", "url": "https://a.example", "description": "first" },
                { "title": "B", "url": "https://b.example", "description": "second" },
                { "title": "C", "url": "https://c.example", "description": "third" }
            ]
        })));

        assert_eq!(items.len(), 3);
        assert_eq!(
            urls(&items),
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_categories_flatten_web_news_images() {
        let items = flatten(data(json!({
            "images": [
                { "title": "img", "url": "https://img.example", "imageUrl": "https://img.example/1.png" }
            ],
            "news": [
                { "title": "n1", "url": "https://n1.example", "snippet": "news one" },
                { "title": "n2", "url": "https://n2.example", "snippet": "news two" }
            ],
            "web": [
                { "title": "w1", "url": "https://w1.example" }
            ]
        })));

        assert_eq!(
            urls(&items),
            vec![
                "https://w1.example",
                "https://n1.example",
                "https://n2.example",
                "https://img.example"
            ]
        );
    }

    #[test]
    fn test_missing_title_is_empty_string() {
        let items = flatten(data(json!({
            "web": [{ "url": "https://a.example", "description": "no title" }]
        })));
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].description, "no title");
    }

    #[test]
    fn test_snippet_used_when_description_missing() {
        let items = flatten(data(json!({
            "news": [{ "title": "n", "url": "https://n.example", "snippet": "from snippet" }]
        })));
        assert_eq!(items[0].description, "from snippet");
    }

    #[test]
    fn test_empty_description_falls_through_to_snippet() {
        let items = flatten(data(json!({
            "web": [{ "title": "w", "url": "https://w.example", "description": "", "snippet": "s" }]
        })));
        assert_eq!(items[0].description, "s");
    }

    #[test]
    fn test_mapping_matches_record() {
        let record = ProviderItem::Record(ProviderRecord {
            title: Some("Same".to_string()),
            url: Some("https://same.example".to_string()),
            snippet: Some("same text".to_string()),
            ..Default::default()
        });

        let mut map = Map::new();
        map.insert("title".to_string(), json!("Same"));
        map.insert("url".to_string(), json!("https://same.example"));
        map.insert("snippet".to_string(), json!("same text"));
        map.insert("metadata".to_string(), json!({ "statusCode": 200 }));
        let mapping = ProviderItem::Mapping(map);

        assert_eq!(to_search_item(&record), to_search_item(&mapping));
        assert_eq!(
            to_search_item(&mapping),
            SearchItem::new("Same", "https://same.example", "same text")
        );
    }

    #[test]
    fn test_non_string_mapping_values_become_empty() {
        let items = flatten(data(json!({
            "web": [{ "title": 7, "url": null, "description": ["x"] }]
        })));
        assert_eq!(items, vec![SearchItem::default()]);
    }

    #[test]
    fn test_absent_or_empty_categories() {
        assert!(flatten(data(json!({}))).is_empty());
        assert!(flatten(data(json!({ "web": [], "news": null }))).is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_surfaces_at_call_time() {
        let engine = FirecrawlSearchEngine::new(FirecrawlConfig::default());

        let result = engine.perform_search(&SearchRequest::new("rust")).await;
        assert!(matches!(
            result,
            Err(SearchError::ConfigurationMissing { .. })
        ));
    }
}
