//! Web search engine trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::scope::SearchScope;
use crate::domain::DomainError;

/// One outbound web search per call
///
/// Returns `Ok(Some(text))` with the concatenated result fragments,
/// `Ok(None)` when the engine answered but had nothing usable, and `Err` on
/// timeouts, non-2xx responses or malformed payloads.
#[async_trait]
pub trait SearchEngine: Send + Sync + Debug {
    fn engine_name(&self) -> &'static str;

    async fn search(&self, query: &str, scope: SearchScope)
    -> Result<Option<String>, DomainError>;
}
