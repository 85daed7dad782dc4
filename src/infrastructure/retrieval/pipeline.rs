//! Retrieval pipeline
//!
//! Turns a raw query into a context passage by walking a fixed sequence of
//! stages, cheapest first. The first stage that yields text wins; provider
//! failures are logged and treated as "nothing found".

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::catalog::KnowledgeCatalog;
use crate::domain::classifier::{Classification, DomainClassifier};
use crate::domain::realtime::{Network, NetworkStatsProvider, PriceProvider};
use crate::domain::retrieval::{RetrievalResult, RetrievalStage};
use crate::domain::search::{SearchEngine, SearchScope};
use crate::domain::DomainError;

/// External collaborators of the pipeline
#[derive(Debug, Clone)]
pub struct RetrievalProviders {
    pub price: Arc<dyn PriceProvider>,
    pub walrus_stats: Arc<dyn NetworkStatsProvider>,
    pub sui_stats: Arc<dyn NetworkStatsProvider>,
    /// Key-gated engine, tried first wherever both engines are used
    pub primary_engine: Arc<dyn SearchEngine>,
    /// Keyless engine, also the only engine used for authoritative search
    pub fallback_engine: Arc<dyn SearchEngine>,
}

/// Ordered, short-circuiting context retrieval
#[derive(Debug, Clone)]
pub struct RetrievalPipeline {
    classifier: DomainClassifier,
    catalog: Arc<KnowledgeCatalog>,
    providers: RetrievalProviders,
}

impl RetrievalPipeline {
    pub fn new(catalog: Arc<KnowledgeCatalog>, providers: RetrievalProviders) -> Self {
        Self {
            classifier: DomainClassifier::new(),
            catalog,
            providers,
        }
    }

    pub fn catalog(&self) -> &KnowledgeCatalog {
        &self.catalog
    }

    /// Run every stage in order until one produces context
    pub async fn retrieve_context(&self, query: &str) -> RetrievalResult {
        let classification = self.classifier.classify(query);

        if !classification.in_domain {
            info!(stage = %RetrievalStage::DomainGate, "Query rejected as out of domain");
            return RetrievalResult::rejected();
        }

        debug!(?classification, "Query classified");

        if let Some(result) = self.realtime_lookups(&classification).await {
            return result;
        }

        if let Some(found) = self.catalog.lookup(query) {
            info!(
                stage = %RetrievalStage::LocalKnowledge,
                topic = found.entry.topic_key(),
                pattern = found.pattern,
                "Local knowledge hit"
            );
            return RetrievalResult::context(found.entry.body(), RetrievalStage::LocalKnowledge);
        }

        if let Some(result) = self.search_stages(query, &classification).await {
            return result;
        }

        if classification.is_secondary_domain {
            let text = self.stats_text(&self.providers.walrus_stats).await;
            return self.hit(RetrievalStage::StatsFallback, text);
        }

        info!(stage = %RetrievalStage::Exhausted, "No context found");
        RetrievalResult::exhausted()
    }

    async fn realtime_lookups(&self, classification: &Classification) -> Option<RetrievalResult> {
        if classification.price_intent && classification.is_secondary_domain {
            let price = absorb(
                RetrievalStage::PriceLookup,
                self.providers.price.provider_name(),
                self.providers.price.fetch_price().await,
            );

            if let Some(text) = price {
                return Some(self.hit(RetrievalStage::PriceLookup, text));
            }
        }

        if classification.network_stats_intent {
            let provider = self.stats_provider(classification.stats_network());
            let text = self.stats_text(provider).await;
            return Some(self.hit(RetrievalStage::StatsLookup, text));
        }

        None
    }

    async fn search_stages(
        &self,
        query: &str,
        classification: &Classification,
    ) -> Option<RetrievalResult> {
        let primary = &self.providers.primary_engine;
        let fallback = &self.providers.fallback_engine;

        if classification.is_secondary_domain {
            let text = match self.search(primary, query, SearchScope::Secondary).await {
                Some(text) => Some(text),
                None => self.search(fallback, query, SearchScope::Secondary).await,
            };

            if let Some(text) = text {
                return Some(self.hit(RetrievalStage::SecondarySearch, text));
            }
        }

        if let Some(text) = self.search(fallback, query, SearchScope::Authoritative).await {
            return Some(self.hit(RetrievalStage::AuthoritativeSearch, text));
        }

        for (stage, scope) in [
            (RetrievalStage::RestrictedSearch, SearchScope::Restricted),
            (RetrievalStage::OpenSearch, SearchScope::Open),
        ] {
            for engine in [primary, fallback] {
                if let Some(text) = self.search(engine, query, scope).await {
                    return Some(self.hit(stage, text));
                }
            }
        }

        None
    }

    async fn search(
        &self,
        engine: &Arc<dyn SearchEngine>,
        query: &str,
        scope: SearchScope,
    ) -> Option<String> {
        let result = engine.search(query, scope).await;
        let text = absorb(scope_stage(scope), engine.engine_name(), result);

        if text.is_none() {
            debug!(engine = engine.engine_name(), scope = %scope, "Search returned nothing");
        }

        text
    }

    fn stats_provider(&self, network: Network) -> &Arc<dyn NetworkStatsProvider> {
        match network {
            Network::Walrus => &self.providers.walrus_stats,
            Network::Sui => &self.providers.sui_stats,
        }
    }

    /// Live summary when available, otherwise the provider's fallback sentence
    async fn stats_text(&self, provider: &Arc<dyn NetworkStatsProvider>) -> String {
        let network = provider.network();

        match provider.fetch_stats().await {
            Ok(stats) => stats.summary(network).unwrap_or_else(|| {
                debug!(network = %network, "Stats endpoint returned no known fields");
                provider.fallback_summary()
            }),
            Err(error) => {
                warn!(network = %network, error = %error, "Network stats lookup failed");
                provider.fallback_summary()
            }
        }
    }

    fn hit(&self, stage: RetrievalStage, text: String) -> RetrievalResult {
        info!(stage = %stage, chars = text.len(), "Context found");
        RetrievalResult::context(text, stage)
    }
}

fn scope_stage(scope: SearchScope) -> RetrievalStage {
    match scope {
        SearchScope::Secondary => RetrievalStage::SecondarySearch,
        SearchScope::Authoritative => RetrievalStage::AuthoritativeSearch,
        SearchScope::Restricted => RetrievalStage::RestrictedSearch,
        SearchScope::Open => RetrievalStage::OpenSearch,
    }
}

/// Collapse a provider result to "text or nothing", logging failures
fn absorb(
    stage: RetrievalStage,
    provider: &str,
    result: Result<Option<String>, DomainError>,
) -> Option<String> {
    match result {
        Ok(text) => text.filter(|t| !t.trim().is_empty()),
        Err(error) => {
            warn!(stage = %stage, provider = provider, error = %error, "Provider failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::realtime::{MockNetworkStatsProvider, MockPriceProvider, NetworkStats};
    use crate::domain::retrieval::{RetrievalOutcome, DOMAIN_REJECTION_MESSAGE};
    use crate::domain::search::MockSearchEngine;
    use crate::domain::testing::{CallLog, MockOutcome};
    use crate::domain::DEFAULT_MAX_QUERY_LENGTH;

    struct Harness {
        log: CallLog,
        tavily: MockSearchEngine,
        ddg: MockSearchEngine,
        price: MockOutcome,
        walrus_stats: Option<NetworkStats>,
        sui_stats: Option<NetworkStats>,
    }

    impl Harness {
        /// Every provider reachable, every provider empty-handed
        fn new() -> Self {
            Self {
                log: CallLog::new(),
                tavily: MockSearchEngine::new("tavily"),
                ddg: MockSearchEngine::new("duckduckgo"),
                price: MockOutcome::Empty,
                walrus_stats: Some(NetworkStats::default()),
                sui_stats: Some(NetworkStats::default()),
            }
        }

        /// Every provider failing
        fn failing() -> Self {
            Self {
                tavily: MockSearchEngine::new("tavily")
                    .with_default(MockOutcome::Fail("HTTP 500".to_string())),
                ddg: MockSearchEngine::new("duckduckgo")
                    .with_default(MockOutcome::Fail("timeout".to_string())),
                price: MockOutcome::Fail("HTTP 429".to_string()),
                walrus_stats: None,
                sui_stats: None,
                ..Self::new()
            }
        }

        fn tavily(mut self, scope: SearchScope, outcome: MockOutcome) -> Self {
            self.tavily = self.tavily.with_outcome(scope, outcome);
            self
        }

        fn ddg(mut self, scope: SearchScope, outcome: MockOutcome) -> Self {
            self.ddg = self.ddg.with_outcome(scope, outcome);
            self
        }

        fn price(mut self, outcome: MockOutcome) -> Self {
            self.price = outcome;
            self
        }

        fn walrus_stats(mut self, stats: NetworkStats) -> Self {
            self.walrus_stats = Some(stats);
            self
        }

        fn sui_stats(mut self, stats: NetworkStats) -> Self {
            self.sui_stats = Some(stats);
            self
        }

        fn stats_provider(
            network: Network,
            stats: Option<NetworkStats>,
            log: &CallLog,
        ) -> Arc<dyn NetworkStatsProvider> {
            let provider = match stats {
                Some(stats) => MockNetworkStatsProvider::new(network, stats),
                None => MockNetworkStatsProvider::failing(network, "HTTP 503"),
            };
            Arc::new(provider.with_call_log(log.clone()))
        }

        fn build(self) -> (RetrievalPipeline, CallLog) {
            let log = self.log;
            let providers = RetrievalProviders {
                price: Arc::new(MockPriceProvider::new(self.price).with_call_log(log.clone())),
                walrus_stats: Self::stats_provider(Network::Walrus, self.walrus_stats, &log),
                sui_stats: Self::stats_provider(Network::Sui, self.sui_stats, &log),
                primary_engine: Arc::new(self.tavily.with_call_log(log.clone())),
                fallback_engine: Arc::new(self.ddg.with_call_log(log.clone())),
            };
            let catalog = Arc::new(KnowledgeCatalog::builtin().unwrap());

            (RetrievalPipeline::new(catalog, providers), log)
        }
    }

    fn walrus_numbers() -> NetworkStats {
        NetworkStats {
            active_validators: Some(25),
            total_stake: Some(1_000_000.0),
            active_nodes: Some(30),
            tps: None,
        }
    }

    #[tokio::test]
    async fn test_out_of_domain_queries_make_no_calls() {
        let (pipeline, log) = Harness::new().build();

        for query in [
            "asdjklasjdk",
            "What is the weather?",
            "How to cook pasta?",
            "data mining in python",
        ] {
            let result = pipeline.retrieve_context(query).await;

            assert_eq!(result.stage, RetrievalStage::DomainGate);
            assert_eq!(
                result.outcome,
                RetrievalOutcome::DomainRejected {
                    message: DOMAIN_REJECTION_MESSAGE.to_string()
                }
            );
        }

        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_hit_short_circuits_search() {
        let (pipeline, log) = Harness::new().build();

        let result = pipeline.retrieve_context("what is a blob").await;

        let expected = pipeline.catalog().get("walrus_blobs").unwrap().body();
        assert_eq!(result.stage, RetrievalStage::LocalKnowledge);
        assert_eq!(result.outcome.context(), Some(expected));
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_price_intent_bypasses_catalog() {
        let (pipeline, log) = Harness::new()
            .price(MockOutcome::text("Walrus (WAL) current price: $0.42 USD"))
            .build();

        let query = "What is the current price of the WAL token";
        assert!(pipeline.catalog().lookup_local(query).is_some());

        let result = pipeline.retrieve_context(query).await;

        assert_eq!(result.stage, RetrievalStage::PriceLookup);
        assert_eq!(
            result.outcome.context(),
            Some("Walrus (WAL) current price: $0.42 USD")
        );
        assert_eq!(log.calls(), vec!["price"]);
    }

    #[tokio::test]
    async fn test_failed_price_falls_through_to_catalog() {
        let (pipeline, log) = Harness::new()
            .price(MockOutcome::Fail("HTTP 429".to_string()))
            .build();

        let result = pipeline
            .retrieve_context("What is the current price of the WAL token")
            .await;

        assert_eq!(result.stage, RetrievalStage::LocalKnowledge);
        assert_eq!(log.calls(), vec!["price"]);
    }

    #[tokio::test]
    async fn test_price_intent_outside_secondary_domain_skips_price() {
        let (pipeline, log) = Harness::new().build();

        pipeline.retrieve_context("What is the price of SUI token").await;

        assert_eq!(log.position("price"), None);
    }

    #[tokio::test]
    async fn test_walrus_validator_stats() {
        let (pipeline, log) = Harness::new().walrus_stats(walrus_numbers()).build();

        let result = pipeline
            .retrieve_context("How many validators does Walrus have?")
            .await;

        assert_eq!(result.stage, RetrievalStage::StatsLookup);
        let text = result.outcome.context().unwrap();
        assert!(text.contains("Active Validators: 25"));
        assert!(text.contains("Total Stake: 1,000,000 WAL"));
        assert!(text.contains("Active Nodes: 30"));
        assert_eq!(log.calls(), vec!["stats:walrus"]);
    }

    #[tokio::test]
    async fn test_stats_intent_naming_sui_uses_sui_provider() {
        let (pipeline, log) = Harness::new()
            .sui_stats(NetworkStats {
                tps: Some(1000.0),
                ..Default::default()
            })
            .build();

        let result = pipeline.retrieve_context("current sui tps").await;

        assert_eq!(result.outcome.context(), Some("Sui network stats: Current TPS: 1000"));
        assert_eq!(log.calls(), vec!["stats:sui"]);
    }

    #[tokio::test]
    async fn test_stats_failure_uses_fallback_sentence() {
        let (pipeline, _log) = Harness::failing().build();

        let result = pipeline
            .retrieve_context("How many validators does Walrus have?")
            .await;

        assert_eq!(result.stage, RetrievalStage::StatsLookup);
        assert_eq!(result.outcome.context(), Some("Walrus fallback stats"));
    }

    #[tokio::test]
    async fn test_empty_stats_use_fallback_sentence() {
        let (pipeline, _log) = Harness::new().build();

        let result = pipeline.retrieve_context("how is sui staking going").await;

        assert_eq!(result.outcome.context(), Some("Sui fallback stats"));
    }

    #[tokio::test]
    async fn test_stats_intent_wins_over_matching_catalog_entry() {
        let (pipeline, log) = Harness::new().build();

        let walrus = pipeline.retrieve_context("Tell me about walrus validators").await;
        assert_eq!(walrus.stage, RetrievalStage::StatsLookup);
        assert_eq!(walrus.outcome.context(), Some("Walrus fallback stats"));

        let sui = pipeline.retrieve_context("Explain proof of stake on Sui").await;
        assert_eq!(sui.stage, RetrievalStage::StatsLookup);
        assert_eq!(sui.outcome.context(), Some("Sui fallback stats"));

        assert_eq!(log.calls(), vec!["stats:walrus", "stats:sui"]);
    }

    #[tokio::test]
    async fn test_operator_questions_reach_the_catalog() {
        let (pipeline, log) = Harness::new().build();

        let result = pipeline
            .retrieve_context("Who are the storage operators on Walrus?")
            .await;

        let expected = pipeline.catalog().get("walrus_validators").unwrap().body();
        assert_eq!(result.stage, RetrievalStage::LocalKnowledge);
        assert_eq!(result.outcome.context(), Some(expected));
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_storage_cost_question_is_not_a_price_query() {
        let (pipeline, log) = Harness::new().price(MockOutcome::text("PRICE")).build();

        let result = pipeline
            .retrieve_context("How much does it cost to store a blob on Walrus?")
            .await;

        let expected = pipeline.catalog().get("walrus_blobs").unwrap().body();
        assert_eq!(result.stage, RetrievalStage::LocalKnowledge);
        assert_eq!(result.outcome.context(), Some(expected));
        assert_eq!(log.position("price"), None);
    }

    #[tokio::test]
    async fn test_restricted_search_precedes_open_search() {
        let (pipeline, log) = Harness::new().build();

        let result = pipeline.retrieve_context("Explain gas fees in Move").await;

        assert_eq!(result, RetrievalResult::exhausted());
        assert_eq!(
            log.calls(),
            vec![
                "duckduckgo:authoritative",
                "tavily:restricted",
                "duckduckgo:restricted",
                "tavily:open",
                "duckduckgo:open",
            ]
        );
    }

    #[tokio::test]
    async fn test_first_engine_hit_stops_the_sequence() {
        let (pipeline, log) = Harness::new()
            .ddg(SearchScope::Restricted, MockOutcome::text("Gas is paid in SUI."))
            .build();

        let result = pipeline.retrieve_context("Explain gas fees in Move").await;

        assert_eq!(result.stage, RetrievalStage::RestrictedSearch);
        assert_eq!(result.outcome.context(), Some("Gas is paid in SUI."));
        assert_eq!(log.position("tavily:open"), None);
        assert_eq!(log.len(), 3);
    }

    #[tokio::test]
    async fn test_authoritative_search_uses_keyless_engine_only() {
        let (pipeline, log) = Harness::new()
            .ddg(SearchScope::Authoritative, MockOutcome::text("From docs.sui.io"))
            .build();

        let result = pipeline.retrieve_context("Explain gas fees in Move").await;

        assert_eq!(result.stage, RetrievalStage::AuthoritativeSearch);
        assert_eq!(log.calls(), vec!["duckduckgo:authoritative"]);
    }

    #[tokio::test]
    async fn test_secondary_search_runs_before_authoritative_search() {
        let (pipeline, log) = Harness::new()
            .ddg(SearchScope::Secondary, MockOutcome::text("Walrus SDK docs"))
            .build();

        let result = pipeline.retrieve_context("walrus sdk documentation").await;

        assert_eq!(result.stage, RetrievalStage::SecondarySearch);
        assert_eq!(result.outcome.context(), Some("Walrus SDK docs"));
        assert_eq!(log.calls(), vec!["tavily:secondary", "duckduckgo:secondary"]);
    }

    #[tokio::test]
    async fn test_secondary_search_skips_keyless_engine_on_hit() {
        let (pipeline, log) = Harness::new()
            .tavily(SearchScope::Secondary, MockOutcome::text("Walrus SDK docs"))
            .build();

        pipeline.retrieve_context("walrus sdk documentation").await;

        assert_eq!(log.calls(), vec!["tavily:secondary"]);
    }

    #[tokio::test]
    async fn test_secondary_query_ends_with_walrus_stats() {
        let (pipeline, log) = Harness::new().walrus_stats(walrus_numbers()).build();

        let result = pipeline.retrieve_context("walrus sdk documentation").await;

        assert_eq!(result.stage, RetrievalStage::StatsFallback);
        assert!(result.outcome.context().unwrap().starts_with("Walrus network stats"));
        assert_eq!(log.calls().last().map(String::as_str), Some("stats:walrus"));
        assert!(log.position("duckduckgo:open") < log.position("stats:walrus"));
    }

    #[tokio::test]
    async fn test_search_failures_are_absorbed() {
        let (pipeline, log) = Harness::failing().build();

        let result = pipeline.retrieve_context("Explain gas fees in Move").await;

        assert!(result.outcome.is_exhausted());
        assert_eq!(log.len(), 5);
    }

    #[tokio::test]
    async fn test_blank_search_text_counts_as_nothing() {
        let (pipeline, _log) = Harness::new()
            .ddg(SearchScope::Authoritative, MockOutcome::text("   "))
            .build();

        let result = pipeline.retrieve_context("Explain gas fees in Move").await;

        assert!(result.outcome.is_exhausted());
    }

    #[tokio::test]
    async fn test_repeated_queries_are_idempotent() {
        let (pipeline, log) = Harness::new()
            .tavily(SearchScope::Open, MockOutcome::text("Open web answer"))
            .build();

        let first = pipeline.retrieve_context("Explain gas fees in Move").await;
        let calls_after_first = log.len();
        let second = pipeline.retrieve_context("Explain gas fees in Move").await;

        assert_eq!(first, second);
        assert_eq!(log.len(), calls_after_first * 2);
    }

    #[tokio::test]
    async fn test_query_at_max_length_runs_full_pipeline() {
        let (pipeline, log) = Harness::new().build();
        let prefix = "Explain gas fees in Move ";
        let query = format!(
            "{}{}",
            prefix,
            "x".repeat(DEFAULT_MAX_QUERY_LENGTH - prefix.len())
        );
        assert_eq!(query.chars().count(), DEFAULT_MAX_QUERY_LENGTH);

        let result = pipeline.retrieve_context(&query).await;

        assert!(result.outcome.is_exhausted());
        assert_eq!(log.len(), 5);
    }

    #[tokio::test]
    async fn test_end_to_end_with_failing_providers() {
        let (pipeline, _log) = Harness::failing().build();

        let sui = pipeline.retrieve_context("What is Sui blockchain?").await;
        let expected = pipeline.catalog().get("what_is_sui").unwrap().body();
        assert_eq!(sui.outcome.context(), Some(expected));

        let gibberish = pipeline.retrieve_context("asdjklasjdk").await;
        assert!(gibberish.outcome.is_rejected());
    }

    #[tokio::test]
    async fn test_engines_receive_the_original_query() {
        let tavily = Arc::new(MockSearchEngine::new("tavily"));
        let providers = RetrievalProviders {
            price: Arc::new(MockPriceProvider::new(MockOutcome::Empty)),
            walrus_stats: Arc::new(MockNetworkStatsProvider::new(
                Network::Walrus,
                NetworkStats::default(),
            )),
            sui_stats: Arc::new(MockNetworkStatsProvider::new(
                Network::Sui,
                NetworkStats::default(),
            )),
            primary_engine: tavily.clone(),
            fallback_engine: Arc::new(MockSearchEngine::new("duckduckgo")),
        };
        let pipeline =
            RetrievalPipeline::new(Arc::new(KnowledgeCatalog::builtin().unwrap()), providers);

        pipeline.retrieve_context("Explain Gas Fees in Move").await;

        assert_eq!(
            tavily.queries(),
            vec!["Explain Gas Fees in Move", "Explain Gas Fees in Move"]
        );
    }
}
