use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// EVM chains the indexer can be queried on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Eth,
    Polygon,
    Base,
    Arbitrum,
    Optimism,
    Bsc,
    Avalanche,
}

impl Chain {
    /// Every supported chain, in the order searches fan out.
    pub const ALL: [Chain; 7] = [
        Chain::Eth,
        Chain::Polygon,
        Chain::Base,
        Chain::Arbitrum,
        Chain::Optimism,
        Chain::Bsc,
        Chain::Avalanche,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Eth => "eth",
            Chain::Polygon => "polygon",
            Chain::Base => "base",
            Chain::Arbitrum => "arbitrum",
            Chain::Optimism => "optimism",
            Chain::Bsc => "bsc",
            Chain::Avalanche => "avalanche",
        }
    }

    /// Hex chain id the indexer API expects in its `chain` query parameter.
    pub fn gateway_id(&self) -> &'static str {
        match self {
            Chain::Eth => "0x1",
            Chain::Polygon => "0x89",
            Chain::Base => "0x2105",
            Chain::Arbitrum => "0xa4b1",
            Chain::Optimism => "0xa",
            Chain::Bsc => "0x38",
            Chain::Avalanche => "0xa86a",
        }
    }

    /// Ethereum mainnet is the only chain with Blur and LooksRare listings.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Chain::Eth)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported chain: {0}")]
pub struct UnsupportedChain(pub String);

impl FromStr for Chain {
    type Err = UnsupportedChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnsupportedChain(s.to_string()))
    }
}
