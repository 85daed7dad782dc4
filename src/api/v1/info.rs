//! Service description endpoints

use axum::extract::State;
use serde::Serialize;

use crate::api::health::APP_NAME;
use crate::api::state::AppState;
use crate::api::types::Json;

const SUPPORTED_TOPICS: [&str; 6] = [
    "Sui blockchain",
    "Move smart contracts",
    "Walrus decentralized storage",
    "Sui and Walrus tokenomics",
    "Live WAL price",
    "Network and validator statistics",
];

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub usage: UsageInfo,
    pub example_request: ExampleRequest,
}

#[derive(Debug, Serialize)]
pub struct UsageInfo {
    pub endpoint: &'static str,
    pub method: &'static str,
    pub max_query_length: usize,
    pub supported_topics: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ExampleRequest {
    pub query: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: &'static str,
    pub docs: &'static str,
}

/// GET /api/v1/info
pub async fn get_info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        description: "Answers questions about Sui, Move and Walrus, grounded on curated \
                      knowledge, live market data and trusted documentation sites",
        usage: UsageInfo {
            endpoint: "/api/v1/chat",
            method: "POST",
            max_query_length: state.max_query_length,
            supported_topics: SUPPORTED_TOPICS.to_vec(),
        },
        example_request: ExampleRequest {
            query: "How do I create a Move module on Sui?",
        },
    })
}

/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to the {}", APP_NAME),
        version: env!("CARGO_PKG_VERSION"),
        docs: "/api/v1/info",
    })
}
