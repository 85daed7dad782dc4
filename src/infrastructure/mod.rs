//! Infrastructure layer - outbound HTTP adapters and process plumbing

pub mod http_client;
pub mod llm;
pub mod logging;
pub mod realtime;
pub mod retrieval;
pub mod search;

pub use http_client::{HttpClient, HttpClientTrait};
