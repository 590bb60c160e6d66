use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rarity bucket derived from the indexer's rarity percentile (lower is
/// rarer: 1.0 means top 1% of the collection).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
    #[default]
    Unknown,
}

impl RarityTier {
    /// A missing or zero percentile means the collection is unranked.
    pub fn from_percentile(percentile: Option<Decimal>) -> Self {
        let p = match percentile {
            Some(p) if p > Decimal::ZERO => p,
            _ => return RarityTier::Unknown,
        };

        if p <= Decimal::ONE {
            RarityTier::Legendary
        } else if p <= Decimal::from(5) {
            RarityTier::Epic
        } else if p <= Decimal::from(15) {
            RarityTier::Rare
        } else if p <= Decimal::from(40) {
            RarityTier::Uncommon
        } else {
            RarityTier::Common
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RarityTier::Legendary => "Legendary",
            RarityTier::Epic => "Epic",
            RarityTier::Rare => "Rare",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Common => "Common",
            RarityTier::Unknown => "Unknown",
        }
    }
}
