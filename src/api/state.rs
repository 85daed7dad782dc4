//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::AnswerGenerator;
use crate::infrastructure::retrieval::RetrievalPipeline;

#[derive(Debug, Clone)]
pub struct AppState {
    pub pipeline: Arc<RetrievalPipeline>,
    pub answers: Arc<AnswerGenerator>,
    pub max_query_length: usize,
}

impl AppState {
    pub fn new(
        pipeline: Arc<RetrievalPipeline>,
        answers: Arc<AnswerGenerator>,
        max_query_length: usize,
    ) -> Self {
        Self {
            pipeline,
            answers,
            max_query_length,
        }
    }
}
