//! Retrieval pipeline implementation

mod pipeline;

pub use pipeline::{RetrievalPipeline, RetrievalProviders};
