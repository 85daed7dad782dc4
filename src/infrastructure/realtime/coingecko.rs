use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::CoinGeckoConfig;
use crate::domain::{DomainError, PriceProvider};
use crate::infrastructure::http_client::HttpClientTrait;

const PROVIDER_NAME: &str = "coingecko";

/// Two-step CoinGecko price lookup: name search, then simple price
#[derive(Debug)]
pub struct CoinGeckoPriceProvider<C: HttpClientTrait> {
    client: C,
    config: CoinGeckoConfig,
}

impl<C: HttpClientTrait> CoinGeckoPriceProvider<C> {
    pub fn new(client: C, config: CoinGeckoConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v3/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn resolve_coin(&self) -> Result<Option<CoinCandidate>, DomainError> {
        let json = self
            .client
            .get_json(
                &self.url("search"),
                &[("query", self.config.coin_query.as_str())],
                self.config.timeout(),
            )
            .await
            .map_err(|e| e.for_provider(PROVIDER_NAME))?;

        let response: SearchResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(PROVIDER_NAME, format!("Failed to parse search response: {}", e))
        })?;

        Ok(select_candidate(response.coins, &self.config.coin_id))
    }

    async fn quote(&self, coin_id: &str) -> Result<Option<f64>, DomainError> {
        let currency = self.config.vs_currency.as_str();
        let json = self
            .client
            .get_json(
                &self.url("simple/price"),
                &[("ids", coin_id), ("vs_currencies", currency)],
                self.config.timeout(),
            )
            .await
            .map_err(|e| e.for_provider(PROVIDER_NAME))?;

        if !json.is_object() {
            return Err(DomainError::provider(
                PROVIDER_NAME,
                "Failed to parse price response: expected an object",
            ));
        }

        Ok(json
            .get(coin_id)
            .and_then(|quotes| quotes.get(currency))
            .and_then(|value| value.as_f64()))
    }
}

/// Exact id/name/symbol match on `wanted`, else the first candidate
fn select_candidate(coins: Vec<CoinCandidate>, wanted: &str) -> Option<CoinCandidate> {
    let wanted = wanted.to_lowercase();
    let position = coins.iter().position(|coin| {
        coin.id.to_lowercase() == wanted
            || coin.name.as_deref().is_some_and(|n| n.to_lowercase() == wanted)
            || coin.symbol.as_deref().is_some_and(|s| s.to_lowercase() == wanted)
    });

    coins.into_iter().nth(position.unwrap_or(0))
}

#[async_trait]
impl<C: HttpClientTrait> PriceProvider for CoinGeckoPriceProvider<C> {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_price(&self) -> Result<Option<String>, DomainError> {
        let Some(coin) = self.resolve_coin().await? else {
            debug!(query = %self.config.coin_query, "No CoinGecko candidate");
            return Ok(None);
        };

        let Some(price) = self.quote(&coin.id).await? else {
            debug!(coin_id = %coin.id, "No CoinGecko quote");
            return Ok(None);
        };

        Ok(Some(format!(
            "{} current price: ${} {} (source: CoinGecko)",
            coin.label(),
            price,
            self.config.vs_currency.to_uppercase()
        )))
    }
}

// CoinGecko API types

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    coins: Vec<CoinCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct CoinCandidate {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
}

impl CoinCandidate {
    fn label(&self) -> String {
        let name = self.name.clone().unwrap_or_else(|| self.id.clone());
        match &self.symbol {
            Some(symbol) => format!("{} ({})", name, symbol.to_uppercase()),
            None => name,
        }
    }
}
