use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::TavilyConfig;
use crate::domain::{DomainError, SearchEngine, SearchScope, SourceAllowList};
use crate::infrastructure::http_client::HttpClientTrait;

const ENGINE_NAME: &str = "tavily";

/// Tavily web search (key-gated, POST)
#[derive(Debug)]
pub struct TavilySearch<C: HttpClientTrait> {
    client: C,
    config: TavilyConfig,
    sources: SourceAllowList,
}

impl<C: HttpClientTrait> TavilySearch<C> {
    pub fn new(client: C, config: TavilyConfig, sources: SourceAllowList) -> Self {
        Self {
            client,
            config,
            sources,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    fn build_request(&self, api_key: &str, query: &str, scope: SearchScope) -> serde_json::Value {
        serde_json::json!({
            "api_key": api_key,
            "query": self.sources.decorate(query, scope, &self.config.open_keywords),
            "search_depth": self.config.search_depth,
            "max_results": self.config.max_results,
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Option<String>, DomainError> {
        let response: TavilyResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(ENGINE_NAME, format!("Failed to parse response: {}", e))
        })?;

        let content = response
            .results
            .into_iter()
            .take(self.config.max_fragments)
            .filter_map(|result| result.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Some(content).filter(|c| !c.is_empty()))
    }
}

#[async_trait]
impl<C: HttpClientTrait> SearchEngine for TavilySearch<C> {
    fn engine_name(&self) -> &'static str {
        ENGINE_NAME
    }

    async fn search(
        &self,
        query: &str,
        scope: SearchScope,
    ) -> Result<Option<String>, DomainError> {
        let Some(api_key) = self.config.api_key() else {
            debug!(scope = %scope, "Tavily API key not configured, skipping");
            return Ok(None);
        };

        let body = self.build_request(api_key, query, scope);
        let response = self
            .client
            .post_json(
                &self.search_url(),
                vec![("Content-Type", "application/json")],
                &body,
                self.config.timeout(),
            )
            .await
            .map_err(|e| e.for_provider(ENGINE_NAME))?;

        self.parse_response(response)
    }
}

// Tavily API types

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    content: Option<String>,
}
