use rust_decimal::Decimal;

use crate::models::NftItem;

/// Default size of the "top NFTs" carousel.
pub const DEFAULT_TOP_LIMIT: usize = 12;

/// The `limit` most valuable records by floor price, highest first.
///
/// Records without a positive floor and spam-flagged records are never
/// returned. The sort is stable: equal floors keep their input order.
pub fn top_by_floor_price(records: &[NftItem], limit: usize) -> Vec<NftItem> {
    let mut eligible: Vec<&NftItem> = records
        .iter()
        .filter(|nft| nft.has_floor() && !nft.is_spam)
        .collect();

    eligible.sort_by(|a, b| b.floor_price.cmp(&a.floor_price));

    eligible.into_iter().take(limit).cloned().collect()
}

/// Sum of floor prices, treating missing floors as zero.
pub fn total_floor_value(records: &[NftItem]) -> Decimal {
    saturating_sum(records.iter().filter_map(|nft| nft.floor_price))
}

/// Indexer prices are unbounded; a total pins at `Decimal::MAX`/`MIN`
/// instead of overflowing.
pub(crate) fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
