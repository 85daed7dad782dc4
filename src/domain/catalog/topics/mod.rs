//! Built-in catalog content
//!
//! Each namespace is an ordered table. Order matters: lookup returns the first
//! entry whose pattern matches, so broad patterns shadow later entries.

mod sui;
mod walrus;

/// Static definition of a catalog topic
#[derive(Debug, Clone, Copy)]
pub struct TopicDefinition {
    pub key: &'static str,
    pub patterns: &'static [&'static str],
    pub body: &'static str,
}

/// Walrus ecosystem topics, searched first
pub fn secondary_topics() -> &'static [TopicDefinition] {
    walrus::TOPICS
}

/// Sui, Move and general blockchain topics
pub fn primary_topics() -> &'static [TopicDefinition] {
    sui::TOPICS
}
