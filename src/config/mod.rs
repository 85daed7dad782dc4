//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ChatConfig, CoinGeckoConfig, DuckDuckGoConfig, LlmConfig, LogFormat,
    LoggingConfig, NetworkStatsConfig, RealtimeConfig, SearchConfig, ServerConfig, TavilyConfig,
};
