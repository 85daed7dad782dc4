use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::types::ApiError;
use super::v1;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(v1::info::welcome))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/api/v1", v1::create_v1_router())
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
