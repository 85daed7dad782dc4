//! Chat endpoint request and response bodies

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub context_found: bool,
    /// Seconds, rounded to two decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}

impl ChatResponse {
    pub fn answered(query: String, response: String, context_found: bool) -> Self {
        Self {
            success: true,
            response,
            query: Some(query),
            context_found,
            processing_time: None,
        }
    }

    pub fn rejected(query: String, message: String) -> Self {
        Self {
            success: false,
            response: message,
            query: Some(query),
            context_found: false,
            processing_time: None,
        }
    }

    pub fn with_processing_time(mut self, elapsed: std::time::Duration) -> Self {
        self.processing_time = Some((elapsed.as_secs_f64() * 100.0).round() / 100.0);
        self
    }
}
