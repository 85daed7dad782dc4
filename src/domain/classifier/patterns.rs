//! Pattern tables for domain and intent classification
//!
//! All patterns run against the lower-cased query.

/// Everything the assistant is willing to talk about, misspellings included
pub(super) const IN_DOMAIN: &[&str] = &[
    r"\bsui\b",
    r"\bmove\b",
    r"\bwalrus\b",
    r"\bwal\b",
    r"blockchain",
    r"blokchain",
    r"blockchian",
    r"blockhain",
    r"\bcrypto",
    r"\bcrpto",
    r"\bcrypo",
    r"cryptocurrenc",
    r"\bweb ?3\b",
    r"\bnfts?\b",
    r"\bdefi\b",
    r"\bdapps?\b",
    r"smart ?contracts?",
    r"\btokens?\b",
    r"tokenomics",
    r"\bcoins?\b",
    r"\bvalidators?\b",
    r"\bstak(e|ed|ing)\b",
    r"consensus",
    r"\bledgers?\b",
    r"\bwallets?\b",
    r"\bblobs?\b",
    r"data availability",
    r"\bgas fees?\b",
    r"\bon-?chain\b",
    r"\boff-?chain\b",
    r"\bepochs?\b",
    r"narwhal",
    r"bullshark",
    r"mysten",
    r"\bbitcoin\b",
    r"\bethereum\b",
    r"\betherium\b",
    r"\bsolana\b",
    r"\baptos\b",
    r"proof of (work|stake)",
    r"\b(bitcoin|btc|crypto|block|ethereum) ?mining\b",
    r"\bmining (pools?|rigs?|rewards?|difficulty)\b",
    r"decentrali[sz]",
    r"\bdao\b",
    r"\b(main|test|dev)net\b",
    r"\btps\b",
    r"\bdlt\b",
];

/// Walrus ecosystem
pub(super) const SECONDARY_DOMAIN: &[&str] = &[
    r"\bwalrus\b",
    r"\bwallrus\b",
    r"\bwalrs\b",
    r"\bwal\b",
    r"\bblobs?\b",
    r"data availability",
    r"walrus ?scan",
];

/// Explicit mention of the primary network by name
pub(super) const PRIMARY_NAME: &[&str] = &[r"\bsui\b"];

pub(super) const PRICE_INTENT: &[&str] = &[
    r"\bprices?\b",
    r"\bworth\b",
    r"\bvalue\b",
    r"\bvaluation\b",
    r"market ?cap",
    r"how much (is|are) (a |one )?(wal|walrus|sui)( tokens?| coins?)?\W*$",
    r"\btrading\b",
];

pub(super) const NETWORK_STATS_INTENT: &[&str] = &[
    r"\bvalidators?\b",
    r"\bnetwork\b",
    r"\bstak(e|ed|ing)\b",
    r"throughput",
    r"\btps\b",
    r"\bnodes?\b",
];
