//! Versioned chat API

pub mod chat;
pub mod info;

use axum::{
    routing::{get, post},
    Router,
};

use super::health;
use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/info", get(info::get_info))
        .route("/health", get(health::health_check))
}
