use reqwest::Client;
use rust_decimal::Decimal;

use super::types::SimplePrice;

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Best-effort ETH/USD quote. Used only to show fiat values next to floor
/// prices; a failed lookup is never an error for the caller.
#[derive(Debug, Clone)]
pub struct PriceClient {
    http: Client,
    base_url: String,
}

impl PriceClient {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            base_url: COINGECKO_API_BASE.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn eth_usd(&self) -> Option<Decimal> {
        match self.fetch_eth_usd().await {
            Ok(price) => price,
            Err(e) => {
                tracing::debug!(error = %e, "ETH/USD lookup failed");
                None
            }
        }
    }

    async fn fetch_eth_usd(&self) -> Result<Option<Decimal>, reqwest::Error> {
        let url = format!("{}/simple/price", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("ids", "ethereum"), ("vs_currencies", "usd")])
            .send()
            .await?
            .error_for_status()?;

        let price: SimplePrice = resp.json().await?;
        Ok(price
            .ethereum
            .and_then(|q| q.usd)
            .filter(|p| *p > Decimal::ZERO))
    }
}
