use std::time::Instant;

use metrics::{counter, histogram};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::{RawNft, WalletNftsPage};
use crate::models::{Chain, UnsupportedChain};

pub const MORALIS_API_BASE: &str = "https://deep-index.moralis.io/api/v2.2";

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error(transparent)]
    UnsupportedChain(#[from] UnsupportedChain),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("indexer returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Client for the hosted NFT indexer. Constructed once at startup and shared
/// through the application state.
#[derive(Debug, Clone)]
pub struct IndexerClient {
    http: Client,
    api_key: String,
    base_url: String,
    max_pages: u32,
}

impl IndexerClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: MORALIS_API_BASE.into(),
            max_pages: 1,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Maximum number of cursor pages followed per wallet and chain.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Fetch the raw NFT holdings of `address` on the chain named by
    /// `chain_tag` (e.g. "eth", "polygon").
    pub async fn get_wallet_nfts(
        &self,
        address: &str,
        chain_tag: &str,
    ) -> Result<Vec<RawNft>, IndexerError> {
        let chain: Chain = chain_tag.parse()?;
        self.get_wallet_nfts_on(address, chain).await
    }

    pub async fn get_wallet_nfts_on(
        &self,
        address: &str,
        chain: Chain,
    ) -> Result<Vec<RawNft>, IndexerError> {
        let start = Instant::now();
        counter!("indexer_requests_total", "chain" => chain.as_str()).increment(1);

        let result = self.fetch_pages(address, chain).await;

        histogram!("indexer_latency_seconds").record(start.elapsed().as_secs_f64());

        match &result {
            Ok(nfts) => tracing::debug!(
                chain = %chain,
                address = %address,
                count = nfts.len(),
                "Fetched wallet NFTs"
            ),
            Err(e) => {
                counter!("indexer_failures_total", "chain" => chain.as_str()).increment(1);
                tracing::warn!(
                    error = %e,
                    chain = %chain,
                    address = %address,
                    "Indexer request failed"
                );
            }
        }

        result
    }

    async fn fetch_pages(&self, address: &str, chain: Chain) -> Result<Vec<RawNft>, IndexerError> {
        let url = format!("{}/{}/nft", self.base_url, address);
        let mut nfts = Vec::new();
        let mut cursor: Option<String> = None;

        for _ in 0..self.max_pages {
            let resp = {
                let mut query = vec![
                    ("chain", chain.gateway_id()),
                    ("format", "decimal"),
                    ("normalizeMetadata", "true"),
                    ("media_items", "true"),
                    ("include_prices", "true"),
                ];
                if let Some(c) = cursor.as_deref() {
                    query.push(("cursor", c));
                }

                self.http
                    .get(&url)
                    .header("X-API-Key", &self.api_key)
                    .query(&query)
                    .send()
                    .await?
            };

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(IndexerError::Api {
                    status: status.as_u16(),
                    message: api_message(&body, status),
                });
            }

            let page: WalletNftsPage = resp.json().await?;
            nfts.extend(page.result);

            match page.cursor {
                Some(c) if !c.is_empty() => cursor = Some(c),
                _ => break,
            }
        }

        Ok(nfts)
    }
}

/// Pull the `message` field out of an API error body, falling back to the
/// status reason.
fn api_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}
