use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{Chain, FilterState, NftItem};

/// Records matching every non-empty filter dimension. Within a dimension
/// any listed value matches.
pub fn apply_filters(records: &[NftItem], filter: &FilterState) -> Vec<NftItem> {
    records
        .iter()
        .filter(|nft| matches_filter(nft, filter))
        .cloned()
        .collect()
}

pub fn matches_filter(nft: &NftItem, filter: &FilterState) -> bool {
    if !filter.collections.is_empty() && !filter.collections.contains(&nft.collection_name) {
        return false;
    }

    if !filter.chains.is_empty() && !filter.chains.contains(&nft.chain) {
        return false;
    }

    true
}

/// Distinct filterable values present in a result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterFacets {
    pub collections: Vec<String>,
    pub chains: Vec<Chain>,
    /// Filters are only worth showing when there is something to choose
    /// between.
    pub should_show: bool,
}

impl FilterFacets {
    pub fn from_records(records: &[NftItem]) -> Self {
        let collections: BTreeSet<&str> =
            records.iter().map(|n| n.collection_name.as_str()).collect();
        let chains: BTreeSet<Chain> = records.iter().map(|n| n.chain).collect();

        Self {
            should_show: collections.len() > 1 || chains.len() > 1,
            collections: collections.into_iter().map(str::to_string).collect(),
            chains: chains.into_iter().collect(),
        }
    }
}
