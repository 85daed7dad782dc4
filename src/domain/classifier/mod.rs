//! Domain classifier - decides scope, sub-domain and realtime intents of a query
//!
//! Pure functions of the query text and the static pattern tables.

mod patterns;

use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::Serialize;

use crate::domain::realtime::Network;

static IN_DOMAIN: Lazy<RegexSet> = Lazy::new(|| compile(patterns::IN_DOMAIN));
static SECONDARY_DOMAIN: Lazy<RegexSet> = Lazy::new(|| compile(patterns::SECONDARY_DOMAIN));
static PRIMARY_NAME: Lazy<RegexSet> = Lazy::new(|| compile(patterns::PRIMARY_NAME));
static PRICE_INTENT: Lazy<RegexSet> = Lazy::new(|| compile(patterns::PRICE_INTENT));
static NETWORK_STATS_INTENT: Lazy<RegexSet> =
    Lazy::new(|| compile(patterns::NETWORK_STATS_INTENT));

fn compile(patterns: &[&str]) -> RegexSet {
    RegexSet::new(patterns).unwrap()
}

/// Per-query classification, derived on every call and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub in_domain: bool,
    pub is_secondary_domain: bool,
    pub mentions_primary_domain: bool,
    pub price_intent: bool,
    pub network_stats_intent: bool,
}

impl Classification {
    /// Network whose stats answer this query: Walrus for secondary queries that
    /// do not name Sui, Sui otherwise.
    pub fn stats_network(&self) -> Network {
        if self.is_secondary_domain && !self.mentions_primary_domain {
            Network::Walrus
        } else {
            Network::Sui
        }
    }
}

/// Keyword based scope gate and intent detector
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainClassifier;

impl DomainClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Hard gate: queries failing this never reach a provider
    pub fn is_in_domain(&self, query: &str) -> bool {
        let normalized = normalize(query);
        IN_DOMAIN.is_match(&normalized) || SECONDARY_DOMAIN.is_match(&normalized)
    }

    pub fn is_secondary_domain(&self, query: &str) -> bool {
        SECONDARY_DOMAIN.is_match(&normalize(query))
    }

    pub fn mentions_primary_domain(&self, query: &str) -> bool {
        PRIMARY_NAME.is_match(&normalize(query))
    }

    pub fn has_price_intent(&self, query: &str) -> bool {
        PRICE_INTENT.is_match(&normalize(query))
    }

    pub fn has_network_stats_intent(&self, query: &str) -> bool {
        NETWORK_STATS_INTENT.is_match(&normalize(query))
    }

    pub fn classify(&self, query: &str) -> Classification {
        let normalized = normalize(query);
        let is_secondary_domain = SECONDARY_DOMAIN.is_match(&normalized);

        Classification {
            in_domain: is_secondary_domain || IN_DOMAIN.is_match(&normalized),
            is_secondary_domain,
            mentions_primary_domain: PRIMARY_NAME.is_match(&normalized),
            price_intent: PRICE_INTENT.is_match(&normalized),
            network_stats_intent: NETWORK_STATS_INTENT.is_match(&normalized),
        }
    }
}

fn normalize(query: &str) -> String {
    query.to_lowercase()
}
