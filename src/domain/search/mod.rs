//! External search domain - engines, scopes and trusted sources

mod engine;
mod scope;

pub use engine::SearchEngine;
pub use scope::{SearchScope, SourceAllowList};

#[cfg(test)]
pub use engine::mock::MockSearchEngine;
