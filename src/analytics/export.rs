use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Chain, MarketplaceLinks, NftItem, Pnl};

/// Currency label for prices in the reference unit.
const REFERENCE_CURRENCY: &str = "ETH";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPrices {
    pub floor: Decimal,
    pub last_sale: Decimal,
    pub currency: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRarity {
    pub rank: Option<u64>,
    pub percentile: Option<Decimal>,
    pub tier: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportMetadata {
    pub image: String,
    pub utility: Option<String>,
    pub freshness_days: Option<u32>,
}

/// Downloadable stats sheet for a single NFT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub name: String,
    pub collection: String,
    pub chain: Chain,
    pub token_id: String,
    pub contract_address: String,
    pub prices: ExportPrices,
    pub profit_loss: Option<Pnl>,
    pub rarity: ExportRarity,
    pub metadata: ExportMetadata,
    #[serde(skip_serializing_if = "MarketplaceLinks::is_empty")]
    pub marketplaces: MarketplaceLinks,
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    pub fn from_item(nft: &NftItem, now: DateTime<Utc>) -> Self {
        Self {
            name: nft.name.clone(),
            collection: nft.collection_name.clone(),
            chain: nft.chain,
            token_id: nft.token_id.clone(),
            contract_address: nft.contract_address.clone(),
            prices: ExportPrices {
                floor: nft.floor_price.unwrap_or_default(),
                last_sale: nft.last_sale_price.unwrap_or_default(),
                currency: REFERENCE_CURRENCY,
            },
            profit_loss: nft.pnl,
            rarity: ExportRarity {
                rank: nft.rarity_rank,
                percentile: nft.rarity_percent,
                tier: nft.rarity_tier.label(),
            },
            metadata: ExportMetadata {
                image: nft.image.clone(),
                utility: nft.utility_text.clone(),
                freshness_days: nft.freshness_days,
            },
            marketplaces: nft.marketplace_links.clone(),
            exported_at: now,
        }
    }

    /// `Cool_Cat__9_stats.json` for "Cool Cat #9".
    pub fn file_name(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{stem}_stats.json")
    }
}
