//! Inflation gap model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inflation-adjusted value of a past salary compared with today's pay.
///
/// Built by [`compute_cpi_gap`](crate::calculation::compute_cpi_gap) or
/// [`compute_cpi_gap_over`](crate::calculation::compute_cpi_gap_over); the
/// derived fields always satisfy:
///
/// - `adjusted_salary = original_salary × (1 + inflation_rate / 100) ^ years_elapsed`
/// - `dollar_gap = adjusted_salary − current_salary`
/// - `percentage_gap = dollar_gap / current_salary × 100`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpiCalculation {
    /// Salary at the historical date.
    pub original_salary: Decimal,
    /// Salary today.
    pub current_salary: Decimal,
    /// When `original_salary` was set (usually the last raise).
    pub historical_date: NaiveDate,
    /// The date the comparison is made for.
    pub current_date: NaiveDate,
    /// Annualized inflation rate, in percent.
    pub inflation_rate: Decimal,
    /// Years between the two dates.
    pub years_elapsed: Decimal,
    /// `original_salary` grown by inflation over `years_elapsed`.
    pub adjusted_salary: Decimal,
    /// Amount by which current pay trails the adjusted salary.
    pub dollar_gap: Decimal,
    /// `dollar_gap` as a percentage of current pay.
    pub percentage_gap: Decimal,
}

impl CpiCalculation {
    /// Returns true if current pay has fallen behind inflation.
    pub fn is_behind_inflation(&self) -> bool {
        self.dollar_gap > Decimal::ZERO
    }
}
