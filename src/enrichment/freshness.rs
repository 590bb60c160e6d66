use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whole days elapsed between the last sale and `now`, floored and never
/// negative. `None` when the timestamp is missing or unparseable.
pub fn calculate_freshness(last_sale: Option<&str>, now: DateTime<Utc>) -> Option<u32> {
    let sold_at = parse_timestamp(last_sale?)?;
    let days = (now - sold_at).num_days().max(0);
    u32::try_from(days).ok()
}

/// Accepts RFC 3339 (`2024-01-05T10:00:00.000Z`) plus the zone-less and
/// date-only forms some indexer payloads carry.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// How much to trust the last-sale price as a current valuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceConfidence {
    /// Sold within the last week.
    High,
    /// Sold within the last month.
    Medium,
    /// Stale or never sold.
    #[default]
    Low,
}

impl PriceConfidence {
    pub fn from_freshness(freshness_days: Option<u32>) -> Self {
        match freshness_days {
            Some(d) if d < 7 => PriceConfidence::High,
            Some(d) if d < 30 => PriceConfidence::Medium,
            _ => PriceConfidence::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceConfidence::High => "high",
            PriceConfidence::Medium => "medium",
            PriceConfidence::Low => "low",
        }
    }
}

impl fmt::Display for PriceConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
