use rust_decimal::Decimal;

use crate::models::Pnl;

/// Default USD price of one reference unit (ETH) used to convert fiat floor
/// prices. A rough constant, not a live quote.
pub const DEFAULT_USD_PER_UNIT: i64 = 3_000;

/// Convert a USD floor price into the reference unit.
pub fn normalize_floor_price(floor_usd: Option<Decimal>, usd_per_unit: Decimal) -> Option<Decimal> {
    if usd_per_unit <= Decimal::ZERO {
        return None;
    }
    floor_usd.and_then(|usd| usd.checked_div(usd_per_unit))
}

/// Profit/loss of holding at the current floor versus the last sale.
///
/// Absent unless both prices are known. A zero last sale has no meaningful
/// percentage, so it also yields `None`.
pub fn calculate_pnl(floor: Option<Decimal>, last_sale: Option<Decimal>) -> Option<Pnl> {
    let floor = floor?;
    let last_sale = last_sale?;
    if last_sale.is_zero() {
        return None;
    }

    let value = floor.checked_sub(last_sale)?;
    let percent = value
        .checked_div(last_sale)?
        .checked_mul(Decimal::ONE_HUNDRED)?;

    Some(Pnl {
        value,
        percent,
        is_profit: value >= Decimal::ZERO,
    })
}

/// `0.1234 ETH`, or `N/A` for missing and zero prices.
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) if !p.is_zero() => format!("{:.4} ETH", p.round_dp(4)),
        _ => "N/A".into(),
    }
}

/// `+12.34%` / `-5.00%`, or `N/A`.
pub fn format_percent(percent: Option<Decimal>) -> String {
    match percent {
        Some(p) => {
            let sign = if p >= Decimal::ZERO { "+" } else { "" };
            format!("{sign}{:.2}%", p.round_dp(2))
        }
        None => "N/A".into(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalize_floor_price() {
        let usd = Decimal::from(DEFAULT_USD_PER_UNIT);
        assert_eq!(normalize_floor_price(Some(dec("3000")), usd), Some(Decimal::ONE));
        assert_eq!(normalize_floor_price(Some(dec("1500")), usd), Some(dec("0.5")));
        assert_eq!(normalize_floor_price(None, usd), None);
    }

    #[test]
    fn test_normalize_floor_price_rejects_bad_divisor() {
        assert_eq!(normalize_floor_price(Some(dec("3000")), Decimal::ZERO), None);
        assert_eq!(normalize_floor_price(Some(dec("3000")), dec("-1")), None);
    }

    #[test]
    fn test_pnl_profit() {
        let pnl = calculate_pnl(Some(dec("1.5")), Some(dec("1.0"))).unwrap();
        assert_eq!(pnl.value, dec("0.5"));
        assert_eq!(pnl.percent, dec("50"));
        assert!(pnl.is_profit);
    }

    #[test]
    fn test_pnl_loss() {
        let pnl = calculate_pnl(Some(dec("0.75")), Some(dec("1.0"))).unwrap();
        assert_eq!(pnl.value, dec("-0.25"));
        assert_eq!(pnl.percent, dec("-25"));
        assert!(!pnl.is_profit);
    }

    #[test]
    fn test_pnl_break_even_counts_as_profit() {
        let pnl = calculate_pnl(Some(Decimal::ONE), Some(Decimal::ONE)).unwrap();
        assert!(pnl.value.is_zero());
        assert!(pnl.percent.is_zero());
        assert!(pnl.is_profit);
    }

    #[test]
    fn test_pnl_absent_without_both_prices() {
        assert_eq!(calculate_pnl(None, Some(Decimal::ONE)), None);
        assert_eq!(calculate_pnl(Some(Decimal::ONE), None), None);
        assert_eq!(calculate_pnl(None, None), None);
    }

    #[test]
    fn test_pnl_absent_for_zero_last_sale() {
        assert_eq!(calculate_pnl(Some(Decimal::ONE), Some(Decimal::ZERO)), None);
        assert_eq!(calculate_pnl(Some(Decimal::ZERO), Some(Decimal::ZERO)), None);
    }

    #[test]
    fn test_pnl_zero_floor_is_total_loss() {
        let pnl = calculate_pnl(Some(Decimal::ZERO), Some(dec("2"))).unwrap();
        assert_eq!(pnl.percent, dec("-100"));
        assert!(!pnl.is_profit);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(dec("1.23456"))), "1.2346 ETH");
        assert_eq!(format_price(Some(Decimal::ZERO)), "N/A");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(dec("12.346"))), "+12.35%");
        assert_eq!(format_percent(Some(dec("-5"))), "-5.00%");
        assert_eq!(format_percent(Some(Decimal::ZERO)), "+0.00%");
        assert_eq!(format_percent(None), "N/A");
    }
}
