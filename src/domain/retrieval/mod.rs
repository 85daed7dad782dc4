//! Retrieval domain
//!
//! Outcome types shared by the retrieval pipeline, the chat endpoint and the
//! CLI. The pipeline itself lives in the infrastructure layer.

mod outcome;

pub use outcome::{
    RetrievalOutcome, RetrievalResult, RetrievalStage, DOMAIN_REJECTION_MESSAGE,
};
