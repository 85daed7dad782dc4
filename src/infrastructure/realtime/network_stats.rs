use async_trait::async_trait;
use tracing::debug;

use crate::config::NetworkStatsConfig;
use crate::domain::{DomainError, Network, NetworkStats, NetworkStatsProvider};
use crate::infrastructure::http_client::HttpClientTrait;

const WALRUS_FALLBACK: &str = "Walrus is a decentralized storage and data availability network \
built on Sui. Storage nodes stake WAL and are organised into epoch-based committees that store \
erasure-coded blob slivers. Live network statistics are currently unavailable; see the Walrus \
explorer (walruscan.com) for current validator, stake and node figures.";

const SUI_FALLBACK: &str = "Sui is secured by a delegated proof-of-stake validator set that \
changes at epoch boundaries (roughly every 24 hours). Live network statistics are currently \
unavailable; see the Sui explorer (suiscan.xyz) for current validator, stake and throughput \
figures.";

/// Stats endpoint reader for one network
#[derive(Debug)]
pub struct HttpNetworkStatsProvider<C: HttpClientTrait> {
    client: C,
    network: Network,
    config: NetworkStatsConfig,
}

impl<C: HttpClientTrait> HttpNetworkStatsProvider<C> {
    pub fn new(client: C, network: Network, config: NetworkStatsConfig) -> Self {
        Self {
            client,
            network,
            config,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self.network {
            Network::Sui => "sui_stats",
            Network::Walrus => "walrus_stats",
        }
    }
}

/// Pull the known fields out of `{validators: {total}, network: {...}}`
fn parse_stats(json: &serde_json::Value) -> NetworkStats {
    let network = &json["network"];

    NetworkStats {
        active_validators: json["validators"]["total"].as_u64(),
        total_stake: network["total_stake"].as_f64(),
        active_nodes: network["active_nodes"].as_u64(),
        tps: network["tps"].as_f64(),
    }
}

#[async_trait]
impl<C: HttpClientTrait> NetworkStatsProvider for HttpNetworkStatsProvider<C> {
    fn network(&self) -> Network {
        self.network
    }

    async fn fetch_stats(&self) -> Result<NetworkStats, DomainError> {
        let Some(url) = self.config.url.as_deref() else {
            debug!(network = %self.network, "No stats endpoint configured");
            return Ok(NetworkStats::default());
        };

        let json = self
            .client
            .get_json(url, &[], self.config.timeout())
            .await
            .map_err(|e| e.for_provider(self.provider_name()))?;

        if !json.is_object() {
            return Err(DomainError::provider(
                self.provider_name(),
                "Failed to parse stats response: expected an object",
            ));
        }

        Ok(parse_stats(&json))
    }

    fn fallback_summary(&self) -> String {
        match self.network {
            Network::Walrus => WALRUS_FALLBACK.to_string(),
            Network::Sui => SUI_FALLBACK.to_string(),
        }
    }
}
