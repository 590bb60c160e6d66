use rust_decimal::Decimal;
use std::env;

use crate::analytics::DEFAULT_TOP_LIMIT;
use crate::enrichment::pricing::DEFAULT_USD_PER_UNIT;
use crate::indexer::client::MORALIS_API_BASE;
use crate::indexer::price_client::COINGECKO_API_BASE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Indexer
    pub moralis_api_key: String,
    pub moralis_base_url: String,
    pub moralis_max_pages: u32,
    pub http_timeout_secs: u64,

    // Pricing
    /// USD per reference unit used to convert floor prices.
    pub reference_usd_price: Decimal,
    pub price_api_url: String,
    pub price_lookup_enabled: bool,

    // Views
    pub top_nft_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let reference_usd_price = env::var("REFERENCE_USD_PRICE")
            .ok()
            .and_then(|v| v.trim().parse::<Decimal>().ok())
            .filter(|p| *p > Decimal::ZERO)
            .unwrap_or(Decimal::from(DEFAULT_USD_PER_UNIT));

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            moralis_api_key: env::var("MORALIS_API_KEY")
                .map_err(|_| anyhow::anyhow!("MORALIS_API_KEY must be set"))?,
            moralis_base_url: env::var("MORALIS_BASE_URL")
                .unwrap_or_else(|_| MORALIS_API_BASE.into()),
            moralis_max_pages: env::var("MORALIS_MAX_PAGES")
                .unwrap_or_else(|_| "1".into())
                .parse()
                .unwrap_or(1),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .unwrap_or(30),

            reference_usd_price,
            price_api_url: env::var("PRICE_API_URL")
                .unwrap_or_else(|_| COINGECKO_API_BASE.into()),
            price_lookup_enabled: env::var("PRICE_LOOKUP_ENABLED")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .unwrap_or(true),

            top_nft_limit: env::var("TOP_NFT_LIMIT")
                .unwrap_or_else(|_| DEFAULT_TOP_LIMIT.to_string())
                .parse()
                .unwrap_or(DEFAULT_TOP_LIMIT),
        })
    }

    /// Config for tests and local runs against a mock indexer.
    pub fn for_indexer(base_url: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            moralis_api_key: "test-key".into(),
            moralis_base_url: base_url.into(),
            moralis_max_pages: 1,
            http_timeout_secs: 5,
            reference_usd_price: Decimal::from(DEFAULT_USD_PER_UNIT),
            price_api_url: COINGECKO_API_BASE.into(),
            price_lookup_enabled: false,
            top_nft_limit: DEFAULT_TOP_LIMIT,
        }
    }
}
