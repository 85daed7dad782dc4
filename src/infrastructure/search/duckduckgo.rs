use async_trait::async_trait;
use serde::Deserialize;

use crate::config::DuckDuckGoConfig;
use crate::domain::{DomainError, SearchEngine, SearchScope, SourceAllowList};
use crate::infrastructure::http_client::HttpClientTrait;

const ENGINE_NAME: &str = "duckduckgo";

/// DuckDuckGo Instant Answer API (keyless, GET)
#[derive(Debug)]
pub struct DuckDuckGoSearch<C: HttpClientTrait> {
    client: C,
    config: DuckDuckGoConfig,
    sources: SourceAllowList,
}

impl<C: HttpClientTrait> DuckDuckGoSearch<C> {
    pub fn new(client: C, config: DuckDuckGoConfig, sources: SourceAllowList) -> Self {
        Self {
            client,
            config,
            sources,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Option<String>, DomainError> {
        let response: InstantAnswer = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(ENGINE_NAME, format!("Failed to parse response: {}", e))
        })?;

        let mut fragments = Vec::new();

        if let Some(text) = response.abstract_text.filter(|t| !t.trim().is_empty()) {
            fragments.push(text.trim().to_string());
        }

        // Grouped topics carry no `Text` of their own and are skipped
        fragments.extend(
            response
                .related_topics
                .iter()
                .take(self.config.max_related_topics)
                .filter_map(|topic| topic.get("Text").and_then(|t| t.as_str()))
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );

        if fragments.is_empty() {
            Ok(None)
        } else {
            Ok(Some(fragments.join(" ")))
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> SearchEngine for DuckDuckGoSearch<C> {
    fn engine_name(&self) -> &'static str {
        ENGINE_NAME
    }

    async fn search(
        &self,
        query: &str,
        scope: SearchScope,
    ) -> Result<Option<String>, DomainError> {
        let decorated = self.sources.decorate(query, scope, &self.config.open_keywords);
        let params = [
            ("q", decorated.as_str()),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ];

        let response = self
            .client
            .get_json(&self.search_url(), &params, self.config.timeout())
            .await
            .map_err(|e| e.for_provider(ENGINE_NAME))?;

        self.parse_response(response)
    }
}

// DuckDuckGo API types

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "AbstractText", default)]
    abstract_text: Option<String>,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<serde_json::Value>,
}
