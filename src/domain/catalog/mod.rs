//! Knowledge catalog domain - static topic entries and local lookup

mod entry;
mod knowledge_catalog;
mod topics;

pub use entry::{KnowledgeEntry, Namespace};
pub use knowledge_catalog::{CatalogMatch, KnowledgeCatalog};
pub use topics::TopicDefinition;
