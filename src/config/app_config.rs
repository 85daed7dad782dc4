use std::time::Duration;

use serde::Deserialize;

use crate::domain::{GenerationSettings, SourceAllowList, DEFAULT_MAX_QUERY_LENGTH};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub realtime: RealtimeConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub max_query_length: usize,
}

/// External search engines and the trusted sources they are restricted to
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub sources: SourceAllowList,
    pub tavily: TavilyConfig,
    pub duckduckgo: DuckDuckGoConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TavilyConfig {
    /// Engine is skipped entirely when unset
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub search_depth: String,
    pub max_results: u32,
    /// How many result `content` fragments are kept
    pub max_fragments: usize,
    pub open_keywords: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DuckDuckGoConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// How many `RelatedTopics` entries are appended to the abstract
    pub max_related_topics: usize,
    pub open_keywords: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RealtimeConfig {
    pub coingecko: CoinGeckoConfig,
    pub walrus_stats: NetworkStatsConfig,
    pub sui_stats: NetworkStatsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Name sent to the search endpoint
    pub coin_query: String,
    /// Preferred id/name/symbol among the search candidates
    pub coin_id: String,
    pub vs_currency: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkStatsConfig {
    /// Structured stats endpoint; unset means only the fallback sentence is used
    pub url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
        }
    }
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.tavily.com".to_string(),
            timeout_secs: 10,
            search_depth: "basic".to_string(),
            max_results: 5,
            max_fragments: 3,
            open_keywords: "blockchain cryptocurrency crypto sui move walrus".to_string(),
        }
    }
}

impl TavilyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key, treating an empty string as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

impl Default for DuckDuckGoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.duckduckgo.com".to_string(),
            timeout_secs: 5,
            max_related_topics: 2,
            open_keywords: "blockchain sui move walrus cryptocurrency crypto".to_string(),
        }
    }
}

impl DuckDuckGoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com".to_string(),
            timeout_secs: 5,
            coin_query: "walrus".to_string(),
            coin_id: "walrus".to_string(),
            vs_currency: "usd".to_string(),
        }
    }
}

impl CoinGeckoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NetworkStatsConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 5,
        }
    }
}

impl NetworkStatsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        let generation = GenerationSettings::default();

        Self {
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 30,
            model: generation.model,
            max_tokens: generation.max_tokens,
            temperature: generation.temperature,
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
