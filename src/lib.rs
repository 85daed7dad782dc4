//! Sui Chat API
//!
//! Answers questions about the Sui blockchain, the Move language and the
//! Walrus storage network. Each query runs through a retrieval pipeline
//! (domain gate, live market and network lookups, curated knowledge, scoped
//! web search) and the resulting context grounds an LLM answer.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use domain::{AnswerGenerator, KnowledgeCatalog, Network};
use infrastructure::{
    llm::OpenAiProvider,
    realtime::{CoinGeckoPriceProvider, HttpNetworkStatsProvider},
    retrieval::{RetrievalPipeline, RetrievalProviders},
    search::{DuckDuckGoSearch, TavilySearch},
    HttpClient,
};

/// Wire the retrieval pipeline from configuration
pub fn create_pipeline(
    config: &AppConfig,
    client: &HttpClient,
) -> anyhow::Result<RetrievalPipeline> {
    let catalog = Arc::new(KnowledgeCatalog::builtin()?);
    let sources = config.search.sources.clone();

    if config.search.tavily.api_key().is_none() {
        warn!("No Tavily API key configured, only DuckDuckGo search is available");
    }

    for (network, stats) in [
        (Network::Walrus, &config.realtime.walrus_stats),
        (Network::Sui, &config.realtime.sui_stats),
    ] {
        if stats.url.is_none() {
            warn!(%network, "No stats endpoint configured, serving the static fallback summary");
        }
    }

    let providers = RetrievalProviders {
        price: Arc::new(CoinGeckoPriceProvider::new(
            client.clone(),
            config.realtime.coingecko.clone(),
        )),
        walrus_stats: Arc::new(HttpNetworkStatsProvider::new(
            client.clone(),
            Network::Walrus,
            config.realtime.walrus_stats.clone(),
        )),
        sui_stats: Arc::new(HttpNetworkStatsProvider::new(
            client.clone(),
            Network::Sui,
            config.realtime.sui_stats.clone(),
        )),
        primary_engine: Arc::new(TavilySearch::new(
            client.clone(),
            config.search.tavily.clone(),
            sources.clone(),
        )),
        fallback_engine: Arc::new(DuckDuckGoSearch::new(
            client.clone(),
            config.search.duckduckgo.clone(),
            sources,
        )),
    };

    info!(topics = catalog.len(), "Knowledge catalog loaded");

    Ok(RetrievalPipeline::new(catalog, providers))
}

/// Build the shared state for the HTTP server
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = HttpClient::new();
    let pipeline = create_pipeline(config, &client)?;

    let api_key = config.llm.api_key().unwrap_or_else(|| {
        warn!("No LLM API key configured, answer generation will fail");
        ""
    });

    let llm = OpenAiProvider::with_base_url(client, api_key, config.llm.base_url.clone())
        .with_timeout(config.llm.timeout());
    let answers = AnswerGenerator::new(Arc::new(llm), config.llm.generation_settings());

    info!(model = %answers.settings().model, "Answer generator configured");

    Ok(AppState::new(
        Arc::new(pipeline),
        Arc::new(answers),
        config.chat.max_query_length,
    ))
}
