//! Retrieval outcome types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed reply for queries outside the knowledge domain
pub const DOMAIN_REJECTION_MESSAGE: &str =
    "I only help with Sui blockchain, Move smart contracts, Walrus, and related blockchain topics.";

/// Pipeline stage that produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStage {
    DomainGate,
    PriceLookup,
    StatsLookup,
    LocalKnowledge,
    SecondarySearch,
    AuthoritativeSearch,
    RestrictedSearch,
    OpenSearch,
    StatsFallback,
    Exhausted,
}

impl RetrievalStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DomainGate => "domain_gate",
            Self::PriceLookup => "price_lookup",
            Self::StatsLookup => "stats_lookup",
            Self::LocalKnowledge => "local_knowledge",
            Self::SecondarySearch => "secondary_search",
            Self::AuthoritativeSearch => "authoritative_search",
            Self::RestrictedSearch => "restricted_search",
            Self::OpenSearch => "open_search",
            Self::StatsFallback => "stats_fallback",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for RetrievalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the pipeline hands back to the answer generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalOutcome {
    /// Context passage to ground the answer on
    Context(String),
    /// Query is out of scope; `message` is the final reply
    DomainRejected { message: String },
    /// Nothing found; the answer must come from general knowledge
    Exhausted,
}

impl RetrievalOutcome {
    pub fn rejected() -> Self {
        Self::DomainRejected {
            message: DOMAIN_REJECTION_MESSAGE.to_string(),
        }
    }

    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Context(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::DomainRejected { .. })
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Outcome plus the stage that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalResult {
    pub outcome: RetrievalOutcome,
    pub stage: RetrievalStage,
}

impl RetrievalResult {
    pub fn new(outcome: RetrievalOutcome, stage: RetrievalStage) -> Self {
        Self { outcome, stage }
    }

    pub fn context(text: impl Into<String>, stage: RetrievalStage) -> Self {
        Self::new(RetrievalOutcome::Context(text.into()), stage)
    }

    pub fn rejected() -> Self {
        Self::new(RetrievalOutcome::rejected(), RetrievalStage::DomainGate)
    }

    pub fn exhausted() -> Self {
        Self::new(RetrievalOutcome::Exhausted, RetrievalStage::Exhausted)
    }
}
