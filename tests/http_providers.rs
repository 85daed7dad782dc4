//! Provider adapters against a local mock server, using the real reqwest client

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use sui_chat_api::config::{
    AppConfig, CoinGeckoConfig, DuckDuckGoConfig, NetworkStatsConfig, TavilyConfig,
};
use sui_chat_api::domain::{
    AnswerGenerator, GenerationSettings, Network, NetworkStatsProvider, PriceProvider,
    RetrievalOutcome, RetrievalStage, SearchEngine, SearchScope, SourceAllowList,
};
use sui_chat_api::infrastructure::llm::OpenAiProvider;
use sui_chat_api::infrastructure::realtime::{CoinGeckoPriceProvider, HttpNetworkStatsProvider};
use sui_chat_api::infrastructure::search::{DuckDuckGoSearch, TavilySearch};
use sui_chat_api::infrastructure::HttpClient;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tavily(server: &MockServer, api_key: Option<&str>) -> TavilySearch<HttpClient> {
    let config = TavilyConfig {
        api_key: api_key.map(str::to_string),
        base_url: server.uri(),
        timeout_secs: 1,
        ..Default::default()
    };
    TavilySearch::new(HttpClient::new(), config, SourceAllowList::default())
}

fn duckduckgo(server: &MockServer) -> DuckDuckGoSearch<HttpClient> {
    let config = DuckDuckGoConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    DuckDuckGoSearch::new(HttpClient::new(), config, SourceAllowList::default())
}

#[tokio::test]
async fn tavily_posts_key_and_scoped_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({ "api_key": "tvly-test" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "title": "Objects", "content": "Sui objects have owners." },
                { "title": "Gas", "content": "Gas is paid in SUI." }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = tavily(&server, Some("tvly-test"))
        .search("How do objects work?", SearchScope::Restricted)
        .await
        .unwrap();

    assert_eq!(
        result.as_deref(),
        Some("Sui objects have owners. Gas is paid in SUI.")
    );

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let query = body["query"].as_str().unwrap();
    assert!(query.starts_with("How do objects work? site:docs.sui.io"));
}

#[tokio::test]
async fn tavily_without_key_never_calls_out() {
    let server = MockServer::start().await;

    let result = tavily(&server, None)
        .search("What is Sui?", SearchScope::Open)
        .await
        .unwrap();

    assert_eq!(result, None);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn tavily_server_error_is_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = tavily(&server, Some("tvly-test"))
        .search("What is Sui?", SearchScope::Restricted)
        .await
        .unwrap_err();

    assert_eq!(err.provider_name(), Some("tavily"));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn tavily_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "results": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = tavily(&server, Some("tvly-test"))
        .search("What is Sui?", SearchScope::Restricted)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn duckduckgo_combines_abstract_and_topics() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("format", "json"))
        .and(query_param("no_html", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AbstractText": "Move is a resource-oriented language.",
            "RelatedTopics": [
                { "Text": "Move modules publish packages." },
                { "Name": "Group", "Topics": [] },
                { "Text": "Ignored past the limit." }
            ]
        })))
        .mount(&server)
        .await;

    let result = duckduckgo(&server)
        .search("What is Move?", SearchScope::Authoritative)
        .await
        .unwrap();

    assert_eq!(
        result.as_deref(),
        Some("Move is a resource-oriented language. Move modules publish packages.")
    );
}

#[tokio::test]
async fn duckduckgo_empty_answer_is_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AbstractText": "",
            "RelatedTopics": []
        })))
        .mount(&server)
        .await;

    let result = duckduckgo(&server)
        .search("What is Move?", SearchScope::Open)
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn coingecko_resolves_coin_then_quotes_price() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/search"))
        .and(query_param("query", "walrus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "coins": [
                { "id": "walrus-meme", "name": "Walrus Meme", "symbol": "WMEME" },
                { "id": "walrus", "name": "Walrus", "symbol": "WAL" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "walrus"))
        .and(query_param("vs_currencies", "usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "walrus": { "usd": 0.42 }
        })))
        .mount(&server)
        .await;

    let provider = CoinGeckoPriceProvider::new(
        HttpClient::new(),
        CoinGeckoConfig {
            base_url: server.uri(),
            ..Default::default()
        },
    );

    let text = provider.fetch_price().await.unwrap().unwrap();

    assert!(text.contains("$0.42 USD"));
    assert!(text.contains("CoinGecko"));
}

#[tokio::test]
async fn stats_endpoint_is_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/walrus/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "validators": { "total": 103 },
            "network": { "total_stake": 1234567.0, "active_nodes": 103 }
        })))
        .mount(&server)
        .await;

    let provider = HttpNetworkStatsProvider::new(
        HttpClient::new(),
        Network::Walrus,
        NetworkStatsConfig {
            url: Some(format!("{}/walrus/stats", server.uri())),
            ..Default::default()
        },
    );

    let stats = provider.fetch_stats().await.unwrap();
    let summary = stats.summary(Network::Walrus).unwrap();

    assert!(summary.contains("Active Validators: 103"));
    assert!(summary.contains("1,234,567 WAL"));
    assert!(!summary.contains("TPS"));
}

#[tokio::test]
async fn openai_answer_is_generated_from_context() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-4o-mini", "max_tokens": 500 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": "Walrus stores blobs." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 50, "completion_tokens": 5 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(HttpClient::new(), "sk-test", server.uri());
    let answers = AnswerGenerator::new(Arc::new(provider), GenerationSettings::default());

    let answer = answers
        .generate("What is Walrus?", Some("Walrus is a storage network."))
        .await
        .unwrap();

    assert_eq!(answer, "Walrus stores blobs.");
}

#[tokio::test]
async fn pipeline_from_config_reaches_authoritative_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AbstractText": "Gas fees pay for computation and storage.",
            "RelatedTopics": []
        })))
        .mount(&server)
        .await;

    let mut config = AppConfig::default();
    config.search.duckduckgo.base_url = server.uri();
    config.search.tavily.base_url = server.uri();
    config.search.tavily.api_key = None;

    let pipeline = sui_chat_api::create_pipeline(&config, &HttpClient::new()).unwrap();
    let result = pipeline.retrieve_context("Explain gas fees in Move").await;

    assert_eq!(result.stage, RetrievalStage::AuthoritativeSearch);
    assert_eq!(
        result.outcome,
        RetrievalOutcome::Context("Gas fees pay for computation and storage.".to_string())
    );
}
