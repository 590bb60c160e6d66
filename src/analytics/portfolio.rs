use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::ranking::{saturating_sum, total_floor_value};
use crate::models::{Chain, NftItem};

/// Sales older than this no longer count towards liquidity.
const LIQUID_WITHIN_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthLabel {
    pub fn from_score(score: u32) -> Self {
        if score >= 75 {
            HealthLabel::Excellent
        } else if score >= 50 {
            HealthLabel::Good
        } else if score >= 25 {
            HealthLabel::Fair
        } else {
            HealthLabel::Poor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainShare {
    pub chain: Chain,
    pub count: usize,
    pub percentage: Decimal,
}

/// Aggregate statistics over one wallet's enriched holdings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_nfts: usize,
    /// Sum of floor prices in the reference unit.
    pub portfolio_value: Decimal,
    pub total_pnl: Decimal,
    /// total_pnl relative to the summed last-sale prices.
    pub pnl_percent: Decimal,
    pub is_profitable: bool,
    pub best_performer: Option<NftItem>,
    pub health_score: u32,
    pub health_label: HealthLabel,
    pub chain_allocation: Vec<ChainShare>,
}

impl PortfolioSummary {
    pub fn from_records(records: &[NftItem]) -> Self {
        let total_pnl = saturating_sum(records.iter().filter_map(|n| n.pnl.map(|p| p.value)));
        let total_cost = saturating_sum(records.iter().filter_map(|n| n.last_sale_price));
        let pnl_percent = if total_cost > Decimal::ZERO {
            total_pnl
                .checked_div(total_cost)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        let health_score = health_score(records);

        Self {
            total_nfts: records.len(),
            portfolio_value: total_floor_value(records),
            total_pnl,
            pnl_percent,
            is_profitable: total_pnl >= Decimal::ZERO,
            best_performer: best_performer(records).cloned(),
            health_score,
            health_label: HealthLabel::from_score(health_score),
            chain_allocation: chain_allocation(records),
        }
    }
}

/// Portfolio health from 0 to 100:
/// - 30 pts: share of items with a floor price
/// - 40 pts: share of P&L-bearing items that are in profit
/// - 20 pts: average P&L percent, mapped from [-50%, +50%]
/// - 10 pts: share of items sold within the last 30 days
pub fn health_score(records: &[NftItem]) -> u32 {
    if records.is_empty() {
        return 0;
    }

    let n = Decimal::from(records.len());

    let with_price = records.iter().filter(|r| r.has_floor()).count();
    let price_score = Decimal::from(with_price) / n * Decimal::from(30);

    let with_pnl = records.iter().filter(|r| r.pnl.is_some()).count();
    let profitable = records
        .iter()
        .filter(|r| r.pnl.is_some_and(|p| p.is_profit))
        .count();
    let profit_score = if with_pnl > 0 {
        Decimal::from(profitable) / Decimal::from(with_pnl) * Decimal::from(40)
    } else {
        Decimal::ZERO
    };

    let pnl_total = saturating_sum(
        records
            .iter()
            .map(|r| r.pnl.map(|p| p.percent).unwrap_or_default()),
    );
    let avg_pnl = pnl_total / n;
    let pnl_score = (avg_pnl.saturating_add(Decimal::from(50)) / Decimal::ONE_HUNDRED
        * Decimal::from(20))
    .clamp(Decimal::ZERO, Decimal::from(20));

    let recent = records
        .iter()
        .filter(|r| r.freshness_days.is_some_and(|d| d < LIQUID_WITHIN_DAYS))
        .count();
    let liquidity_score = Decimal::from(recent) / n * Decimal::from(10);

    let total = (price_score + profit_score + pnl_score + liquidity_score)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    total.to_u32().unwrap_or(0)
}

/// The profitable item with the largest P&L value; the first one wins ties.
pub fn best_performer(records: &[NftItem]) -> Option<&NftItem> {
    records
        .iter()
        .filter(|r| r.pnl.is_some_and(|p| p.is_profit))
        .fold(None, |best: Option<&NftItem>, r| match best {
            Some(b) if pnl_value(b) >= pnl_value(r) => Some(b),
            _ => Some(r),
        })
}

fn pnl_value(nft: &NftItem) -> Decimal {
    nft.pnl.map(|p| p.value).unwrap_or_default()
}

/// Item count per chain, largest share first.
pub fn chain_allocation(records: &[NftItem]) -> Vec<ChainShare> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut counts: BTreeMap<Chain, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.chain).or_default() += 1;
    }

    let total = Decimal::from(records.len());
    let mut shares: Vec<ChainShare> = counts
        .into_iter()
        .map(|(chain, count)| ChainShare {
            chain,
            count,
            percentage: Decimal::from(count) / total * Decimal::ONE_HUNDRED,
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{item, item_in};
    use crate::enrichment::calculate_pnl;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn priced(id: &str, floor: &str, last_sale: &str, freshness: Option<u32>) -> NftItem {
        let mut nft = item(id, Some(floor));
        nft.last_sale_price = Some(dec(last_sale));
        nft.pnl = calculate_pnl(nft.floor_price, nft.last_sale_price);
        nft.freshness_days = freshness;
        nft
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::from_records(&[]);
        assert_eq!(summary.total_nfts, 0);
        assert_eq!(summary.health_score, 0);
        assert_eq!(summary.health_label, HealthLabel::Poor);
        assert!(summary.best_performer.is_none());
        assert!(summary.chain_allocation.is_empty());
        assert!(summary.pnl_percent.is_zero());
    }

    #[test]
    fn test_totals() {
        let records = vec![
            priced("a", "2", "1", Some(3)),
            priced("b", "1", "2", Some(40)),
            item("c", Some("0.5")),
        ];

        let summary = PortfolioSummary::from_records(&records);
        assert_eq!(summary.total_nfts, 3);
        assert_eq!(summary.portfolio_value, dec("3.5"));
        assert_eq!(summary.total_pnl, Decimal::ZERO);
        assert_eq!(summary.pnl_percent, Decimal::ZERO);
        assert!(summary.is_profitable);
        assert_eq!(summary.best_performer.unwrap().token_id, "a");
    }

    #[test]
    fn test_perfect_health() {
        // All priced, all in profit by +50% or more, all sold this week
        let records = vec![
            priced("a", "3", "2", Some(1)),
            priced("b", "6", "4", Some(2)),
        ];

        assert_eq!(health_score(&records), 100);
        assert_eq!(HealthLabel::from_score(100), HealthLabel::Excellent);
    }

    #[test]
    fn test_health_without_pnl() {
        // Priced but never sold: 30 (price) + 0 (profit) + 10 (pnl avg 0) + 0
        let records = vec![item("a", Some("1")), item("b", Some("2"))];
        assert_eq!(health_score(&records), 40);
        assert_eq!(HealthLabel::from_score(40), HealthLabel::Fair);
    }

    #[test]
    fn test_health_deep_losses_clamp_pnl_score() {
        // 30 (price) + 0 (profit) + 0 (avg -90% clamps) + 0 (stale)
        let records = vec![priced("a", "0.1", "1", Some(90))];
        assert_eq!(health_score(&records), 30);
        assert_eq!(HealthLabel::from_score(30), HealthLabel::Fair);
    }

    #[test]
    fn test_health_labels() {
        assert_eq!(HealthLabel::from_score(75), HealthLabel::Excellent);
        assert_eq!(HealthLabel::from_score(74), HealthLabel::Good);
        assert_eq!(HealthLabel::from_score(50), HealthLabel::Good);
        assert_eq!(HealthLabel::from_score(49), HealthLabel::Fair);
        assert_eq!(HealthLabel::from_score(24), HealthLabel::Poor);
    }

    #[test]
    fn test_best_performer_ignores_losses() {
        let records = vec![priced("loss", "1", "3", None)];
        assert!(best_performer(&records).is_none());
    }

    #[test]
    fn test_best_performer_first_wins_ties() {
        let records = vec![
            priced("x", "2", "1", None),
            priced("y", "2", "1", None),
        ];
        assert_eq!(best_performer(&records).unwrap().token_id, "x");
    }

    #[test]
    fn test_huge_last_sales_do_not_overflow() {
        // Two sales near Decimal::MAX / 2 sum past Decimal::MAX
        let huge = "50000000000000000000000000000";
        let records = vec![
            priced("a", "1", huge, Some(1)),
            priced("b", "1", huge, Some(1)),
        ];

        let summary = PortfolioSummary::from_records(&records);
        assert_eq!(summary.total_nfts, 2);
        assert_eq!(summary.total_pnl, Decimal::MIN);
        assert_eq!(summary.pnl_percent, dec("-100"));
        assert!(!summary.is_profitable);
        assert!(summary.best_performer.is_none());
        // 30 (price) + 0 (profit) + 0 (avg ~-100%) + 10 (fresh)
        assert_eq!(summary.health_score, 40);
    }

    #[test]
    fn test_chain_allocation() {
        let records = vec![
            item_in("1", "A", Chain::Polygon),
            item_in("2", "A", Chain::Eth),
            item_in("3", "B", Chain::Polygon),
            item_in("4", "C", Chain::Polygon),
        ];

        let shares = chain_allocation(&records);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].chain, Chain::Polygon);
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].percentage, dec("75"));
        assert_eq!(shares[1].chain, Chain::Eth);
        assert_eq!(shares[1].percentage, dec("25"));
    }
}
