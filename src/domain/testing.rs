//! Shared helpers for hand-written provider mocks

use std::sync::{Arc, Mutex};

use crate::domain::DomainError;

/// Ordered record of provider invocations shared between mocks
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first call equal to `call`
    pub fn position(&self, call: &str) -> Option<usize> {
        self.calls.lock().unwrap().iter().position(|c| c == call)
    }
}

/// Canned result of a mocked text provider
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Text(String),
    Empty,
    Fail(String),
}

impl MockOutcome {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn to_result(&self, provider: &str) -> Result<Option<String>, DomainError> {
        match self {
            Self::Text(text) => Ok(Some(text.clone())),
            Self::Empty => Ok(None),
            Self::Fail(message) => Err(DomainError::provider(provider, message)),
        }
    }
}
