//! Market benchmark comparison models.
//!
//! This module contains [`SalaryComparison`], the result of placing a salary
//! against a benchmark percentile table, and the coarse [`MarketPosition`]
//! bucket derived from it.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The percentile ranks a benchmark table may contain.
pub const STANDARD_PERCENTILES: [u8; 5] = [10, 25, 50, 75, 90];

/// Coarse three-bucket classification of a percentile rank.
///
/// # Example
///
/// ```
/// use wagelift_engine::models::MarketPosition;
///
/// assert_eq!(MarketPosition::MarketRate.label(), "Market Rate");
/// assert_eq!(
///     serde_json::to_string(&MarketPosition::BelowMarket).unwrap(),
///     "\"below_market\""
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    /// Paid below the lower quartile.
    BelowMarket,
    /// Paid within the interquartile range, boundaries included.
    MarketRate,
    /// Paid above the upper quartile.
    AboveMarket,
}

impl MarketPosition {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            MarketPosition::BelowMarket => "Below Market",
            MarketPosition::MarketRate => "Market Rate",
            MarketPosition::AboveMarket => "Above Market",
        }
    }
}

impl fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A salary benchmarked against the market for one job title and location.
///
/// `percentiles` is keyed by percentile rank, so ranks are unique and iterate
/// in ascending order. Construct through
/// [`build_comparison`](crate::calculation::build_comparison) to have the
/// table checked and `market_position` derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComparison {
    /// The benchmarked job title.
    pub job_title: String,
    /// The benchmarked location.
    pub location: String,
    /// Market salary at each percentile rank.
    pub percentiles: BTreeMap<u8, Decimal>,
    /// Where the user's own salary falls, 0 to 100.
    pub percentile_rank: Decimal,
    /// Bucket derived from `percentile_rank`.
    pub market_position: MarketPosition,
}

impl SalaryComparison {
    /// The market median, if the table has a 50th percentile.
    pub fn median(&self) -> Option<Decimal> {
        self.percentiles.get(&50).copied()
    }
}
