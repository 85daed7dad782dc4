//! Realtime provider traits

use std::fmt::Debug;

use async_trait::async_trait;

use super::stats::{Network, NetworkStats};
use crate::domain::DomainError;

/// Live price quote for the secondary-domain token
///
/// `Ok(None)` means the lookup worked but produced no quote; `Err` means the
/// lookup itself failed. Callers treat both as "no price".
#[async_trait]
pub trait PriceProvider: Send + Sync + Debug {
    fn provider_name(&self) -> &'static str;

    async fn fetch_price(&self) -> Result<Option<String>, DomainError>;
}

/// Structured network statistics for one network
///
/// Unlike [`PriceProvider`], callers never come away empty-handed: when
/// [`fetch_stats`](Self::fetch_stats) fails or yields nothing, the
/// [`fallback_summary`](Self::fallback_summary) sentence is used instead.
#[async_trait]
pub trait NetworkStatsProvider: Send + Sync + Debug {
    fn network(&self) -> Network;

    async fn fetch_stats(&self) -> Result<NetworkStats, DomainError>;

    /// Static description used when live stats are unavailable
    fn fallback_summary(&self) -> String;
}
