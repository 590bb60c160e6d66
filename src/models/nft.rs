use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Chain;
use crate::enrichment::freshness::PriceConfidence;
use crate::enrichment::rarity::RarityTier;

/// Profit or loss of the current floor against the last sale, in the
/// reference unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pnl {
    /// floor - last_sale
    pub value: Decimal,
    /// value / last_sale * 100
    pub percent: Decimal,
    pub is_profit: bool,
}

/// Deep links into NFT marketplaces. OpenSea is populated for every chain,
/// Blur and LooksRare only on Ethereum mainnet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opensea: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub looksrare: Option<String>,
}

impl MarketplaceLinks {
    /// Populated links as `(marketplace, url)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("opensea", self.opensea.as_deref()),
            ("blur", self.blur.as_deref()),
            ("looksrare", self.looksrare.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.map(|u| (name, u)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A wallet-held NFT with derived analytics attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftItem {
    pub chain: Chain,
    pub contract_address: String,
    pub token_id: String,
    pub name: String,
    pub image: String,
    pub collection_name: String,

    // Prices in the reference unit (absent when the indexer has no data)
    pub floor_price: Option<Decimal>,
    pub last_sale_price: Option<Decimal>,
    pub last_sale_date: Option<String>,

    pub rarity_rank: Option<u64>,
    pub rarity_percent: Option<Decimal>,
    #[serde(default)]
    pub rarity_tier: RarityTier,

    pub utility_text: Option<String>,
    #[serde(default)]
    pub holder_perks: Vec<String>,

    #[serde(default)]
    pub is_spam: bool,

    pub pnl: Option<Pnl>,
    pub freshness_days: Option<u32>,
    #[serde(default)]
    pub price_confidence: PriceConfidence,

    #[serde(default)]
    pub marketplace_links: MarketplaceLinks,
}

impl NftItem {
    /// True when the item carries a usable, non-zero floor price.
    pub fn has_floor(&self) -> bool {
        self.floor_price.is_some_and(|p| p > Decimal::ZERO)
    }
}
