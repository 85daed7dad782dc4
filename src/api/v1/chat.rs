//! Chat endpoint handler

use std::time::Instant;

use axum::extract::State;
use tracing::{error, info, warn};

use crate::api::middleware::truncate_for_log;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ChatRequest, ChatResponse, Json};
use crate::domain::{validate_query, DomainError, RetrievalOutcome};

const LOG_PREVIEW_CHARS: usize = 80;

/// POST /api/v1/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let start = Instant::now();

    let query = validate_query(&request.query, state.max_query_length).map_err(|e| {
        warn!(error = %e, "Rejected invalid chat query");
        ApiError::from(DomainError::from(e)).with_param("query")
    })?;

    info!(query = %truncate_for_log(&query, LOG_PREVIEW_CHARS), "Processing chat request");

    let retrieval = state.pipeline.retrieve_context(&query).await;

    let (context, context_found) = match retrieval.outcome {
        RetrievalOutcome::DomainRejected { message } => {
            info!(stage = %retrieval.stage, "Answered with domain rejection");
            let response =
                ChatResponse::rejected(query, message).with_processing_time(start.elapsed());
            return Ok(Json(response));
        }
        RetrievalOutcome::Context(context) => (Some(context), true),
        RetrievalOutcome::Exhausted => (None, false),
    };

    let answer = state
        .answers
        .generate(&query, context.as_deref())
        .await
        .map_err(|e| {
            error!(error = %e, stage = %retrieval.stage, "Answer generation failed");
            ApiError::unavailable("Failed to generate response").with_code("llm_unavailable")
        })?;

    info!(
        stage = %retrieval.stage,
        context_found,
        duration_ms = %start.elapsed().as_millis(),
        "Chat request completed"
    );

    Ok(Json(
        ChatResponse::answered(query, answer, context_found).with_processing_time(start.elapsed()),
    ))
}
