//! Search scopes and trusted-source allow-lists

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a search engine decorates the query before sending it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Secondary-domain (Walrus) trusted sources only
    Secondary,
    /// Union of secondary and primary trusted sources
    Authoritative,
    /// Primary-domain (Sui / Move) trusted sources only
    Restricted,
    /// No source restriction; topic keywords appended instead
    Open,
}

impl SearchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secondary => "secondary",
            Self::Authoritative => "authoritative",
            Self::Restricted => "restricted",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trusted source domains per namespace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAllowList {
    #[serde(default = "default_secondary_sites")]
    pub secondary_sites: Vec<String>,
    #[serde(default = "default_primary_sites")]
    pub primary_sites: Vec<String>,
}

fn default_secondary_sites() -> Vec<String> {
    vec![
        "docs.wal.app".to_string(),
        "walrus.xyz".to_string(),
        "github.com/MystenLabs/walrus".to_string(),
    ]
}

fn default_primary_sites() -> Vec<String> {
    vec![
        "docs.sui.io".to_string(),
        "move-language.github.io".to_string(),
        "move-book.com".to_string(),
    ]
}

impl Default for SourceAllowList {
    fn default() -> Self {
        Self {
            secondary_sites: default_secondary_sites(),
            primary_sites: default_primary_sites(),
        }
    }
}

impl SourceAllowList {
    /// Sites a scope is restricted to. Empty for [`SearchScope::Open`].
    pub fn sites(&self, scope: SearchScope) -> Vec<&str> {
        let secondary = self.secondary_sites.iter().map(String::as_str);
        let primary = self.primary_sites.iter().map(String::as_str);

        match scope {
            SearchScope::Secondary => secondary.collect(),
            SearchScope::Authoritative => secondary.chain(primary).collect(),
            SearchScope::Restricted => primary.collect(),
            SearchScope::Open => Vec::new(),
        }
    }

    /// Query text to send for `scope`: the original query followed by either a
    /// `site:` filter or, for open search, the engine's topic keywords.
    pub fn decorate(&self, query: &str, scope: SearchScope, open_keywords: &str) -> String {
        let query = query.trim();

        let suffix = match scope {
            SearchScope::Open => open_keywords.trim().to_string(),
            _ => self
                .sites(scope)
                .iter()
                .map(|site| format!("site:{}", site))
                .collect::<Vec<_>>()
                .join(" OR "),
        };

        if suffix.is_empty() {
            query.to_string()
        } else {
            format!("{} {}", query, suffix)
        }
    }
}
