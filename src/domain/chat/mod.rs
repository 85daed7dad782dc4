//! Chat domain - query validation and answer generation

mod answer;
mod validation;

pub use answer::{AnswerGenerator, GenerationSettings};
pub use validation::{validate_query, QueryValidationError, DEFAULT_MAX_QUERY_LENGTH};
