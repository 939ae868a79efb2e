//! Inflation adjustment calculations.
//!
//! This module grows a past salary by an annualized inflation rate and
//! compares the result with current pay. The rate itself comes from an
//! external CPI source; nothing here derives it from an index series.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use super::increase::{ONE_HUNDRED, calculate_increase_percentage, checked_difference};
use crate::error::{EngineError, EngineResult};
use crate::models::CpiCalculation;

/// Grows `original_salary` by `inflation_rate` percent per year, compounded
/// once per elapsed year.
///
/// `years_elapsed` may be fractional. A zero rate or zero elapsed time
/// returns `original_salary` unchanged. Negative elapsed time is not rejected
/// and discounts the salary instead.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the rate is below −100% (no
/// real growth factor exists) or the result overflows.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::calculate_cpi_adjusted_salary;
/// use rust_decimal::Decimal;
///
/// let adjusted = calculate_cpi_adjusted_salary(
///     Decimal::new(80000, 0),
///     Decimal::new(10, 0),
///     Decimal::new(2, 0),
/// )?;
/// assert_eq!(adjusted, Decimal::new(96800, 0));
/// # Ok::<(), wagelift_engine::error::EngineError>(())
/// ```
pub fn calculate_cpi_adjusted_salary(
    original_salary: Decimal,
    inflation_rate: Decimal,
    years_elapsed: Decimal,
) -> EngineResult<Decimal> {
    if inflation_rate.is_zero() || years_elapsed.is_zero() {
        return Ok(original_salary);
    }

    let growth = Decimal::ONE + inflation_rate / ONE_HUNDRED;
    if growth.is_sign_negative() {
        return Err(EngineError::CalculationError {
            message: format!("inflation rate {}% is below -100%", inflation_rate),
        });
    }

    let factor = if years_elapsed.fract().is_zero() {
        years_elapsed
            .to_i64()
            .and_then(|years| growth.checked_powi(years))
    } else {
        growth.checked_powd(years_elapsed)
    };

    factor
        .and_then(|factor| original_salary.checked_mul(factor))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "adjusting {} by {}% over {} years overflows",
                original_salary, inflation_rate, years_elapsed
            ),
        })
}

/// Returns the number of years from `historical_date` to `current_date`.
///
/// Whole anniversaries count as whole years; the remainder is the fraction
/// of the following anniversary year that has passed. An anniversary on
/// 29 February falls on 28 February in common years.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] unless `historical_date` is strictly
/// before `current_date`.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::years_between;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let years = years_between(
///     NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
/// )?;
/// assert_eq!(years, Decimal::new(2, 0));
/// # Ok::<(), wagelift_engine::error::EngineError>(())
/// ```
pub fn years_between(historical_date: NaiveDate, current_date: NaiveDate) -> EngineResult<Decimal> {
    if historical_date >= current_date {
        return Err(EngineError::invalid_input(
            "historical_date",
            format!(
                "historical date {} must be before current date {}",
                historical_date, current_date
            ),
        ));
    }

    let out_of_range = || EngineError::invalid_input("historical_date", "date out of range");
    let anniversary = |years: u32| {
        historical_date
            .checked_add_months(Months::new(years * 12))
            .ok_or_else(out_of_range)
    };

    let mut whole = u32::try_from(current_date.year() - historical_date.year()).unwrap_or(0);
    while whole > 0 && anniversary(whole)? > current_date {
        whole -= 1;
    }

    let last = anniversary(whole)?;
    let next = anniversary(whole + 1)?;
    let elapsed_days = (current_date - last).num_days();
    let year_days = (next - last).num_days();

    Ok(Decimal::from(whole) + Decimal::from(elapsed_days) / Decimal::from(year_days))
}

/// Computes the inflation gap between two dates, deriving the elapsed years
/// from the dates with [`years_between`].
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] if the dates are not in order or
///   `current_salary` is not positive.
/// - [`EngineError::CalculationError`] if the adjustment cannot be represented.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::compute_cpi_gap;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let gap = compute_cpi_gap(
///     Decimal::new(80000, 0),
///     Decimal::new(80000, 0),
///     NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
///     Decimal::new(10, 0),
/// )?;
/// assert_eq!(gap.adjusted_salary, Decimal::new(96800, 0));
/// assert_eq!(gap.dollar_gap, Decimal::new(16800, 0));
/// assert_eq!(gap.percentage_gap, Decimal::new(21, 0));
/// # Ok::<(), wagelift_engine::error::EngineError>(())
/// ```
pub fn compute_cpi_gap(
    original_salary: Decimal,
    current_salary: Decimal,
    historical_date: NaiveDate,
    current_date: NaiveDate,
    inflation_rate: Decimal,
) -> EngineResult<CpiCalculation> {
    let years_elapsed = years_between(historical_date, current_date)?;
    compute_cpi_gap_over(
        original_salary,
        current_salary,
        historical_date,
        current_date,
        inflation_rate,
        years_elapsed,
    )
}

/// Computes the inflation gap using an explicit elapsed-years figure.
///
/// The dates are recorded on the result and must be in order, but
/// `years_elapsed` is used as given.
pub fn compute_cpi_gap_over(
    original_salary: Decimal,
    current_salary: Decimal,
    historical_date: NaiveDate,
    current_date: NaiveDate,
    inflation_rate: Decimal,
    years_elapsed: Decimal,
) -> EngineResult<CpiCalculation> {
    if historical_date >= current_date {
        return Err(EngineError::invalid_input(
            "historical_date",
            format!(
                "historical date {} must be before current date {}",
                historical_date, current_date
            ),
        ));
    }

    let adjusted_salary =
        calculate_cpi_adjusted_salary(original_salary, inflation_rate, years_elapsed)?;
    let percentage_gap = calculate_increase_percentage(current_salary, adjusted_salary)?;
    let dollar_gap = checked_difference(current_salary, adjusted_salary)?;

    Ok(CpiCalculation {
        original_salary,
        current_salary,
        historical_date,
        current_date,
        inflation_rate,
        years_elapsed,
        adjusted_salary,
        dollar_gap,
        percentage_gap,
    })
}
