use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::freshness::{calculate_freshness, PriceConfidence};
use super::marketplace::generate_marketplace_links;
use super::media::resolve_image_url;
use super::pricing::{calculate_pnl, normalize_floor_price, DEFAULT_USD_PER_UNIT};
use super::rarity::RarityTier;
use super::utility::{detect_utility, parse_holder_perks};
use crate::indexer::RawNft;
use crate::models::{Chain, NftItem};

const UNKNOWN_COLLECTION: &str = "Unknown Collection";

#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// USD price of one reference unit; converts `floor_price_usd`.
    pub usd_per_unit: Decimal,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            usd_per_unit: Decimal::from(DEFAULT_USD_PER_UNIT),
        }
    }
}

/// Enrich a page of raw indexer records and drop spam.
///
/// Spam is a hard filter here: flagged items never reach the caller.
pub fn enrich_and_filter(raw: &[RawNft], chain: Chain, config: &EnrichmentConfig) -> Vec<NftItem> {
    enrich_and_filter_at(raw, chain, config, Utc::now())
}

/// Same as [`enrich_and_filter`] with an explicit clock.
pub fn enrich_and_filter_at(
    raw: &[RawNft],
    chain: Chain,
    config: &EnrichmentConfig,
    now: DateTime<Utc>,
) -> Vec<NftItem> {
    raw.iter()
        .map(|r| enrich_record(r, chain, config, now))
        .filter(|item| !item.is_spam)
        .collect()
}

/// Turn one raw record into an analytics record. Never fails: every derived
/// field is simply absent when its inputs are.
pub fn enrich_record(
    raw: &RawNft,
    chain: Chain,
    config: &EnrichmentConfig,
    now: DateTime<Utc>,
) -> NftItem {
    let floor_price = normalize_floor_price(raw.floor_price_usd, config.usd_per_unit);
    let last_sale_price = raw.last_sale.as_ref().and_then(|s| s.price_formatted);
    let last_sale_date = raw
        .last_sale
        .as_ref()
        .and_then(|s| non_empty(s.block_timestamp.as_deref()))
        .map(str::to_string);

    let freshness_days = calculate_freshness(last_sale_date.as_deref(), now);

    let metadata = raw.normalized_metadata.as_ref();
    let collection = raw.collection.as_ref();
    let description = collection.and_then(|c| non_empty(c.description.as_deref()));

    let name = non_empty(metadata.and_then(|m| m.name.as_deref()))
        .or_else(|| non_empty(raw.name.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", raw.token_id));

    let collection_name = non_empty(collection.and_then(|c| c.name.as_deref()))
        .unwrap_or(UNKNOWN_COLLECTION)
        .to_string();

    NftItem {
        chain,
        contract_address: raw.token_address.clone(),
        token_id: raw.token_id.clone(),
        name,
        image: resolve_image_url(metadata.and_then(|m| m.image.as_deref())),
        collection_name,
        floor_price,
        last_sale_price,
        last_sale_date,
        rarity_rank: raw.rarity_rank,
        rarity_percent: raw.rarity_percentage,
        rarity_tier: RarityTier::from_percentile(raw.rarity_percentage),
        utility_text: detect_utility(description),
        holder_perks: parse_holder_perks(description),
        is_spam: raw.possible_spam,
        pnl: calculate_pnl(floor_price, last_sale_price),
        freshness_days,
        price_confidence: PriceConfidence::from_freshness(freshness_days),
        marketplace_links: generate_marketplace_links(chain, &raw.token_address, &raw.token_id),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
