//! Market position classification and benchmark comparison.
//!
//! A percentile rank is bucketed into Below Market / Market Rate / Above
//! Market using two thresholds. When only a salary is known, its rank is
//! estimated from the benchmark percentile table by linear interpolation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{MarketPosition, STANDARD_PERCENTILES, SalaryComparison};

/// Percentile thresholds that separate the three market position buckets.
///
/// Ranks strictly below `below_market_under` are Below Market, ranks strictly
/// above `above_market_over` are Above Market, and everything in between,
/// both boundaries included, is Market Rate.
///
/// # Example
///
/// ```
/// use wagelift_engine::calculation::MarketThresholds;
/// use wagelift_engine::models::MarketPosition;
/// use rust_decimal::Decimal;
///
/// let thresholds = MarketThresholds::default();
/// assert_eq!(thresholds.classify(Decimal::new(25, 0)), MarketPosition::MarketRate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketThresholds {
    /// Ranks below this are Below Market.
    pub below_market_under: Decimal,
    /// Ranks above this are Above Market.
    pub above_market_over: Decimal,
}

impl Default for MarketThresholds {
    fn default() -> Self {
        Self {
            below_market_under: Decimal::new(25, 0),
            above_market_over: Decimal::new(75, 0),
        }
    }
}

impl MarketThresholds {
    /// Buckets a percentile rank. Ranks outside 0 to 100 are classified as-is.
    pub fn classify(&self, percentile_rank: Decimal) -> MarketPosition {
        if percentile_rank < self.below_market_under {
            MarketPosition::BelowMarket
        } else if percentile_rank > self.above_market_over {
            MarketPosition::AboveMarket
        } else {
            MarketPosition::MarketRate
        }
    }
}

/// Buckets a percentile rank using the standard 25th/75th thresholds.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::determine_market_position;
/// use wagelift_engine::models::MarketPosition;
/// use rust_decimal::Decimal;
///
/// assert_eq!(determine_market_position(Decimal::new(24, 0)), MarketPosition::BelowMarket);
/// assert_eq!(determine_market_position(Decimal::new(75, 0)), MarketPosition::MarketRate);
/// assert_eq!(determine_market_position(Decimal::new(76, 0)), MarketPosition::AboveMarket);
/// ```
pub fn determine_market_position(percentile_rank: Decimal) -> MarketPosition {
    MarketThresholds::default().classify(percentile_rank)
}

/// Checks that a benchmark table uses standard ranks with non-decreasing salaries.
fn check_percentile_table(percentiles: &BTreeMap<u8, Decimal>) -> EngineResult<()> {
    if percentiles.is_empty() {
        return Err(EngineError::invalid_input(
            "percentiles",
            "at least one benchmark percentile is required",
        ));
    }

    if let Some(rank) = percentiles
        .keys()
        .find(|rank| !STANDARD_PERCENTILES.contains(*rank))
    {
        return Err(EngineError::invalid_input(
            "percentiles",
            format!(
                "percentile {} is not one of {:?}",
                rank, STANDARD_PERCENTILES
            ),
        ));
    }

    let salaries: Vec<(&u8, &Decimal)> = percentiles.iter().collect();
    if let Some(pair) = salaries.windows(2).find(|pair| pair[1].1 < pair[0].1) {
        return Err(EngineError::invalid_input(
            "percentiles",
            format!(
                "salary at percentile {} ({}) is below percentile {} ({})",
                pair[1].0, pair[1].1, pair[0].0, pair[0].1
            ),
        ));
    }

    Ok(())
}

/// Estimates where `salary` falls within a benchmark percentile table.
///
/// Between two benchmark points the rank is interpolated linearly. Salaries
/// at or below the lowest point get the lowest rank in the table; salaries at
/// or above the highest point get the highest rank.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the table is empty, uses a rank
/// outside 10/25/50/75/90, or has a salary lower than the one before it.
/// Returns [`EngineError::CalculationError`] if the gap between two
/// benchmarks is too wide to represent.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use wagelift_engine::calculation::estimate_percentile_rank;
/// use rust_decimal::Decimal;
///
/// let table = BTreeMap::from([
///     (25, Decimal::new(72000, 0)),
///     (50, Decimal::new(89000, 0)),
/// ]);
/// let rank = estimate_percentile_rank(&table, Decimal::new(80500, 0))?;
/// assert_eq!(rank, Decimal::new(375, 1));
/// # Ok::<(), wagelift_engine::error::EngineError>(())
/// ```
pub fn estimate_percentile_rank(
    percentiles: &BTreeMap<u8, Decimal>,
    salary: Decimal,
) -> EngineResult<Decimal> {
    check_percentile_table(percentiles)?;

    let points: Vec<(Decimal, Decimal)> = percentiles
        .iter()
        .map(|(rank, amount)| (Decimal::from(*rank), *amount))
        .collect();

    let (lowest_rank, lowest_salary) = points[0];
    let (highest_rank, highest_salary) = points[points.len() - 1];

    if salary <= lowest_salary {
        return Ok(lowest_rank);
    }
    if salary >= highest_salary {
        return Ok(highest_rank);
    }

    for pair in points.windows(2) {
        let (lo_rank, lo_salary) = pair[0];
        let (hi_rank, hi_salary) = pair[1];
        if salary <= hi_salary {
            if hi_salary == lo_salary {
                return Ok(lo_rank);
            }
            let fraction = salary
                .checked_sub(lo_salary)
                .zip(hi_salary.checked_sub(lo_salary))
                .and_then(|(offset, span)| offset.checked_div(span))
                .ok_or_else(|| EngineError::CalculationError {
                    message: format!(
                        "cannot place {} between benchmarks {} and {}",
                        salary, lo_salary, hi_salary
                    ),
                })?;
            return Ok(lo_rank + fraction * (hi_rank - lo_rank));
        }
    }

    Ok(highest_rank)
}

/// Builds a [`SalaryComparison`] for a known percentile rank.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the percentile table is invalid
/// (see [`estimate_percentile_rank`]).
pub fn build_comparison(
    job_title: &str,
    location: &str,
    percentiles: BTreeMap<u8, Decimal>,
    percentile_rank: Decimal,
    thresholds: &MarketThresholds,
) -> EngineResult<SalaryComparison> {
    check_percentile_table(&percentiles)?;

    Ok(SalaryComparison {
        job_title: job_title.to_string(),
        location: location.to_string(),
        percentiles,
        percentile_rank,
        market_position: thresholds.classify(percentile_rank),
    })
}

/// Builds a [`SalaryComparison`] by estimating the rank of `salary`.
pub fn build_comparison_from_salary(
    job_title: &str,
    location: &str,
    percentiles: BTreeMap<u8, Decimal>,
    salary: Decimal,
    thresholds: &MarketThresholds,
) -> EngineResult<SalaryComparison> {
    let percentile_rank = estimate_percentile_rank(&percentiles, salary)?;
    build_comparison(job_title, location, percentiles, percentile_rank, thresholds)
}
