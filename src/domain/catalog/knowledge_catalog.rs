//! Read-only knowledge catalog with ordered, first-match-wins lookup

use std::collections::HashSet;

use super::entry::{KnowledgeEntry, Namespace};
use super::topics::{self, TopicDefinition};
use crate::domain::DomainError;

/// A successful catalog lookup
#[derive(Debug, Clone, Copy)]
pub struct CatalogMatch<'a> {
    pub entry: &'a KnowledgeEntry,
    pub pattern: &'a str,
}

/// Immutable topic catalog, partitioned by namespace
#[derive(Debug, Clone)]
pub struct KnowledgeCatalog {
    secondary: Vec<KnowledgeEntry>,
    primary: Vec<KnowledgeEntry>,
}

impl KnowledgeCatalog {
    /// Build the catalog from the built-in Sui and Walrus topic tables
    pub fn builtin() -> Result<Self, DomainError> {
        let secondary = compile(topics::secondary_topics(), Namespace::Secondary)?;
        let primary = compile(topics::primary_topics(), Namespace::Primary)?;

        Self::from_entries(secondary.into_iter().chain(primary))
    }

    /// Build a catalog from entries. Declaration order within each namespace is kept.
    pub fn from_entries(
        entries: impl IntoIterator<Item = KnowledgeEntry>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        let mut secondary = Vec::new();
        let mut primary = Vec::new();

        for entry in entries {
            if !seen.insert(entry.topic_key().to_string()) {
                return Err(DomainError::configuration(format!(
                    "Duplicate catalog topic key '{}'",
                    entry.topic_key()
                )));
            }

            match entry.namespace() {
                Namespace::Secondary => secondary.push(entry),
                Namespace::Primary => primary.push(entry),
            }
        }

        Ok(Self { secondary, primary })
    }

    /// Entries of one namespace, in lookup order
    pub fn entries(&self, namespace: Namespace) -> &[KnowledgeEntry] {
        match namespace {
            Namespace::Secondary => &self.secondary,
            Namespace::Primary => &self.primary,
        }
    }

    pub fn get(&self, topic_key: &str) -> Option<&KnowledgeEntry> {
        self.secondary
            .iter()
            .chain(self.primary.iter())
            .find(|entry| entry.topic_key() == topic_key)
    }

    pub fn len(&self) -> usize {
        self.secondary.len() + self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the first matching entry: secondary namespace first, then primary,
    /// each scanned in declaration order.
    pub fn lookup(&self, query: &str) -> Option<CatalogMatch<'_>> {
        let normalized = query.to_lowercase();

        Namespace::LOOKUP_ORDER.iter().find_map(|namespace| {
            self.entries(*namespace).iter().find_map(|entry| {
                entry
                    .matching_pattern(&normalized)
                    .map(|pattern| CatalogMatch { entry, pattern })
            })
        })
    }

    /// Canned text of the first matching entry, verbatim
    pub fn lookup_local(&self, query: &str) -> Option<&str> {
        self.lookup(query).map(|found| found.entry.body())
    }
}

fn compile(
    definitions: &[TopicDefinition],
    namespace: Namespace,
) -> Result<Vec<KnowledgeEntry>, DomainError> {
    definitions
        .iter()
        .map(|def| {
            KnowledgeEntry::new(def.key, namespace, def.patterns.iter().copied(), def.body)
        })
        .collect()
}
