//! Realtime data domain - live price quotes and network statistics

mod provider;
mod stats;

pub use provider::{NetworkStatsProvider, PriceProvider};
pub use stats::{format_thousands, Network, NetworkStats};

#[cfg(test)]
pub use provider::mock::{MockNetworkStatsProvider, MockPriceProvider};
