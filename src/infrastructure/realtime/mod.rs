//! Realtime data provider implementations

mod coingecko;
mod network_stats;

pub use coingecko::CoinGeckoPriceProvider;
pub use network_stats::HttpNetworkStatsProvider;
