//! Domain layer - Core business logic and entities

pub mod catalog;
pub mod chat;
pub mod classifier;
pub mod error;
pub mod llm;
pub mod realtime;
pub mod retrieval;
pub mod search;

#[cfg(test)]
pub mod testing;

pub use catalog::{CatalogMatch, KnowledgeCatalog, KnowledgeEntry, Namespace};
pub use chat::{
    validate_query, AnswerGenerator, GenerationSettings, QueryValidationError,
    DEFAULT_MAX_QUERY_LENGTH,
};
pub use classifier::{Classification, DomainClassifier};
pub use error::DomainError;
pub use llm::{FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, Usage};
pub use realtime::{Network, NetworkStats, NetworkStatsProvider, PriceProvider};
pub use retrieval::{RetrievalOutcome, RetrievalResult, RetrievalStage, DOMAIN_REJECTION_MESSAGE};
pub use search::{SearchEngine, SearchScope, SourceAllowList};
