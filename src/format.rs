//! Display formatting for salaries and percentages.
//!
//! These helpers only produce presentation strings. Nothing in the engine
//! compares or computes with their output.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Currency used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Decimal places used for percentages when the caller does not choose.
pub const DEFAULT_PERCENTAGE_DECIMALS: u32 = 1;

/// Returns the display symbol for an ISO 4217 code, if one is known.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Inserts a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rounds half away from zero and clears the sign of a rounded zero.
fn round_for_display(value: Decimal, decimals: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.abs()
    } else {
        rounded
    }
}

/// Formats a salary in whole currency units with thousands separators.
///
/// Amounts are rounded half away from zero. Known currency codes render with
/// their symbol; any other code is printed in front of the amount. The code is
/// matched case-insensitively and an empty code means [`DEFAULT_CURRENCY`].
///
/// # Examples
///
/// ```
/// use wagelift_engine::format::format_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_salary(Decimal::new(75000, 0), "USD"), "$75,000");
/// assert_eq!(format_salary(Decimal::new(-123450, 2), "gbp"), "-£1,235");
/// assert_eq!(format_salary(Decimal::new(5000, 0), "CHF"), "CHF 5,000");
/// ```
pub fn format_salary(amount: Decimal, currency: &str) -> String {
    let code = match currency.trim() {
        "" => DEFAULT_CURRENCY.to_string(),
        other => other.to_ascii_uppercase(),
    };

    let rounded = round_for_display(amount, 0);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = group_thousands(&rounded.abs().trunc().to_string());

    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code} {digits}"),
    }
}

/// Parses a string produced by [`format_salary`] back into an amount.
///
/// Currency symbols, codes and grouping commas are ignored; a `-` before the
/// first digit makes the amount negative.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalaryDisplay`] when the text holds no digits
/// or the remaining characters do not form a number.
///
/// # Examples
///
/// ```
/// use wagelift_engine::format::{format_salary, parse_salary_display};
/// use rust_decimal::Decimal;
///
/// let shown = format_salary(Decimal::new(75000, 0), "USD");
/// let parsed = parse_salary_display(&shown)?;
/// assert_eq!(format_salary(parsed, "USD"), "$75,000");
/// # Ok::<(), wagelift_engine::error::EngineError>(())
/// ```
pub fn parse_salary_display(text: &str) -> EngineResult<Decimal> {
    let invalid = || EngineError::InvalidSalaryDisplay {
        input: text.to_string(),
    };

    let first_digit = text.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
    let negative = text[..first_digit].contains('-');

    let numeric: String = text[first_digit..]
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = Decimal::from_str(&numeric).map_err(|_| invalid())?;

    Ok(if negative { -value } else { value })
}

/// Formats a number with exactly `decimals` fractional digits.
///
/// ```
/// use wagelift_engine::format::format_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_decimal(Decimal::new(8, 0), 1), "8.0");
/// assert_eq!(format_decimal(Decimal::new(2125, 2), 1), "21.3");
/// ```
pub fn format_decimal(value: Decimal, decimals: u32) -> String {
    let rounded = round_for_display(value, decimals);
    format!("{:.*}", decimals as usize, rounded)
}

/// Formats a percentage with `decimals` fractional digits and a `%` sign.
///
/// ```
/// use wagelift_engine::format::{format_percentage, DEFAULT_PERCENTAGE_DECIMALS};
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percentage(Decimal::new(21, 0), DEFAULT_PERCENTAGE_DECIMALS), "21.0%");
/// ```
pub fn format_percentage(value: Decimal, decimals: u32) -> String {
    format!("{}%", format_decimal(value, decimals))
}

/// Formats a rank as an English ordinal, rounded to a whole number.
///
/// ```
/// use wagelift_engine::format::format_ordinal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_ordinal(Decimal::new(40, 0)), "40th");
/// assert_eq!(format_ordinal(Decimal::new(215, 1)), "22nd");
/// ```
pub fn format_ordinal(rank: Decimal) -> String {
    let whole = round_for_display(rank, 0).trunc();
    let last_two = (whole.abs() % Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or_default();
    let suffix = match (last_two, last_two % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{whole}{suffix}")
}
