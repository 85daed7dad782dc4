//! Chat query validation

use std::fmt;

use crate::domain::DomainError;

/// Default upper bound on query length, in characters
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 1000;

/// Query validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValidationError {
    /// Query is empty or whitespace only
    Empty,
    /// Query exceeds the configured maximum
    TooLong { length: usize, max: usize },
}

impl fmt::Display for QueryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Query cannot be empty"),
            Self::TooLong { length, max } => write!(
                f,
                "Query too long. Maximum {} characters allowed. Current: {}",
                max, length
            ),
        }
    }
}

impl std::error::Error for QueryValidationError {}

impl From<QueryValidationError> for DomainError {
    fn from(error: QueryValidationError) -> Self {
        DomainError::validation(error.to_string())
    }
}

/// Trim a raw query and enforce the length bound
///
/// Length is counted in characters after trimming, so a query of exactly
/// `max_length` characters passes.
pub fn validate_query(raw: &str, max_length: usize) -> Result<String, QueryValidationError> {
    let query = raw.trim();

    if query.is_empty() {
        return Err(QueryValidationError::Empty);
    }

    let length = query.chars().count();
    if length > max_length {
        return Err(QueryValidationError::TooLong {
            length,
            max: max_length,
        });
    }

    Ok(query.to_string())
}
