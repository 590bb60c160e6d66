use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::chain::{Chain, UnsupportedChain};

/// Client-side grid filters. An empty set means "no restriction" on that
/// dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub collections: BTreeSet<String>,
    #[serde(default)]
    pub chains: BTreeSet<Chain>,
}

impl FilterState {
    /// Build filters from comma-separated query values, e.g.
    /// `collections=Azuki,Pudgy Penguins&chains=eth,base`.
    pub fn from_query(
        collections: Option<&str>,
        chains: Option<&str>,
    ) -> Result<Self, UnsupportedChain> {
        let collections = split_list(collections).map(str::to_string).collect();
        let chains = split_list(chains)
            .map(str::parse::<Chain>)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self { collections, chains })
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.chains.is_empty()
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
