pub mod analytics;
pub mod api;
pub mod config;
pub mod enrichment;
pub mod errors;
pub mod indexer;
pub mod metrics;
pub mod models;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::enrichment::EnrichmentConfig;
use crate::indexer::{IndexerClient, PriceClient};
use crate::services::SearchTracker;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub indexer: IndexerClient,
    pub prices: PriceClient,
    pub enrichment: EnrichmentConfig,
    pub searches: Arc<SearchTracker>,
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Build the shared HTTP client and the API clients on top of it. Runs
    /// once at startup.
    pub fn new(config: AppConfig, metrics_handle: PrometheusHandle) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        let indexer = IndexerClient::new(http.clone(), config.moralis_api_key.clone())
            .with_base_url(config.moralis_base_url.clone())
            .with_max_pages(config.moralis_max_pages);
        let prices = PriceClient::new(http).with_base_url(config.price_api_url.clone());
        let enrichment = EnrichmentConfig {
            usd_per_unit: config.reference_usd_price,
        };

        Ok(Self {
            config,
            indexer,
            prices,
            enrichment,
            searches: Arc::new(SearchTracker::new()),
            metrics_handle,
        })
    }
}
