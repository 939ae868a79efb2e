//! Salary increase calculations.
//!
//! This module computes the raise between a current and a requested salary,
//! both as an amount and as a percentage of current pay.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryIncrease;

pub(crate) const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Returns `requested_salary − current_salary`.
///
/// A negative result describes a pay cut and is not an error.
///
/// # Panics
///
/// Panics if the difference overflows `Decimal`. Use
/// [`calculate_increase`] for amounts that are not known to be in range.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::calculate_increase_dollar;
/// use rust_decimal::Decimal;
///
/// let raise = calculate_increase_dollar(Decimal::new(100000, 0), Decimal::new(110000, 0));
/// assert_eq!(raise, Decimal::new(10000, 0));
///
/// let cut = calculate_increase_dollar(Decimal::new(100000, 0), Decimal::new(90000, 0));
/// assert_eq!(cut, Decimal::new(-10000, 0));
/// ```
pub fn calculate_increase_dollar(current_salary: Decimal, requested_salary: Decimal) -> Decimal {
    requested_salary - current_salary
}

/// Returns the increase from `current_salary` to `requested_salary` as a
/// percentage of `current_salary`.
///
/// The result is not rounded; choose a precision when formatting.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] if `current_salary` is zero or negative.
/// - [`EngineError::CalculationError`] if the percentage cannot be represented.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::calculate_increase_percentage;
/// use rust_decimal::Decimal;
///
/// let pct = calculate_increase_percentage(Decimal::new(80000, 0), Decimal::new(96800, 0))?;
/// assert_eq!(pct, Decimal::new(21, 0));
/// # Ok::<(), wagelift_engine::error::EngineError>(())
/// ```
pub fn calculate_increase_percentage(
    current_salary: Decimal,
    requested_salary: Decimal,
) -> EngineResult<Decimal> {
    if current_salary <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "current_salary",
            "current salary must be positive",
        ));
    }

    checked_difference(current_salary, requested_salary)?
        .checked_div(current_salary)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "increase from {} to {} is out of range",
                current_salary, requested_salary
            ),
        })
}

/// Computes both increase figures for a requested salary.
pub fn calculate_increase(
    current_salary: Decimal,
    requested_salary: Decimal,
) -> EngineResult<SalaryIncrease> {
    let percentage = calculate_increase_percentage(current_salary, requested_salary)?;

    Ok(SalaryIncrease {
        requested_salary,
        dollar: checked_difference(current_salary, requested_salary)?,
        percentage,
    })
}

/// `to - from`, or a [`EngineError::CalculationError`] when it overflows.
pub(crate) fn checked_difference(from: Decimal, to: Decimal) -> EngineResult<Decimal> {
    to.checked_sub(from)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("difference between {} and {} is out of range", to, from),
        })
}
