//! Web search engine implementations

mod duckduckgo;
mod tavily;

pub use duckduckgo::DuckDuckGoSearch;
pub use tavily::TavilySearch;
