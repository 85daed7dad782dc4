//! Knowledge catalog entities

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Catalog namespace. Lookup walks [`Namespace::LOOKUP_ORDER`] in sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// Walrus ecosystem
    Secondary,
    /// Sui, Move and general blockchain
    Primary,
}

impl Namespace {
    /// Secondary topics are a subset easily mistaken for primary ones, so they go first
    pub const LOOKUP_ORDER: [Namespace; 2] = [Namespace::Secondary, Namespace::Primary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secondary => "secondary",
            Self::Primary => "primary",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog topic with its trigger patterns and canned text
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    topic_key: String,
    namespace: Namespace,
    patterns: Vec<Regex>,
    body: String,
}

impl KnowledgeEntry {
    /// Build an entry, compiling each pattern case-insensitively
    pub fn new<P, S>(
        topic_key: impl Into<String>,
        namespace: Namespace,
        patterns: P,
        body: impl Into<String>,
    ) -> Result<Self, DomainError>
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let topic_key = topic_key.into();

        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                RegexBuilder::new(pattern.as_ref())
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        DomainError::configuration(format!(
                            "Invalid pattern '{}' for topic '{}': {}",
                            pattern.as_ref(),
                            topic_key,
                            e
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if patterns.is_empty() {
            return Err(DomainError::configuration(format!(
                "Topic '{}' has no trigger patterns",
                topic_key
            )));
        }

        Ok(Self {
            topic_key,
            namespace,
            patterns,
            body: body.into(),
        })
    }

    pub fn topic_key(&self) -> &str {
        &self.topic_key
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the first pattern (in declaration order) that matches the query
    pub fn matching_pattern(&self, normalized_query: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|pattern| pattern.is_match(normalized_query))
            .map(|pattern| pattern.as_str())
    }
}
