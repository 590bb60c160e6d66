use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Wallet NFTs (Moralis `/{address}/nft`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WalletNftsPage {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub result: Vec<RawNft>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawNft {
    pub token_address: String,
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub collection: Option<RawCollection>,
    #[serde(default)]
    pub normalized_metadata: Option<NormalizedMetadata>,
    /// USD floor. The API returns it as a string, older payloads as a number.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub floor_price_usd: Option<Decimal>,
    #[serde(default)]
    pub last_sale: Option<LastSale>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub rarity_rank: Option<u64>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rarity_percentage: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub possible_spam: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawCollection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NormalizedMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LastSale {
    /// Sale price already formatted in the chain's native unit, e.g. "1.25".
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_formatted: Option<Decimal>,
    #[serde(default)]
    pub block_timestamp: Option<String>,
}

// ---------------------------------------------------------------------------
// Simple price (CoinGecko `/simple/price`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimplePrice {
    #[serde(default)]
    pub ethereum: Option<UsdQuote>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsdQuote {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub usd: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Lenient field decoding: a malformed optional field becomes `None` instead
// of failing the whole page.
// ---------------------------------------------------------------------------

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn decimal_from_value(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::String(s) => parse_decimal(s.trim()),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Decimal::from(i)),
            None => parse_decimal(&n.to_string()),
        },
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}
