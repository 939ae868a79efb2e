//! Calculation logic for the salary engine.
//!
//! This module contains the pure functions behind a raise request: increase
//! figures, inflation adjustment and gap, market position classification and
//! percentile estimation, justification text, and salary entry validation.
//! None of them perform I/O or hold state between calls.

mod cpi_adjustment;
mod increase;
mod justification;
mod market_position;
mod validation;

pub use cpi_adjustment::{
    calculate_cpi_adjusted_salary, compute_cpi_gap, compute_cpi_gap_over, years_between,
};
pub use increase::{calculate_increase, calculate_increase_dollar, calculate_increase_percentage};
pub use justification::{JustificationPolicy, generate_salary_justification};
pub use market_position::{
    MarketThresholds, build_comparison, build_comparison_from_salary, determine_market_position,
    estimate_percentile_rank,
};
pub use validation::{
    COMPANY_REQUIRED, JOB_TITLE_REQUIRED, LOCATION_REQUIRED, SALARY_NOT_POSITIVE,
    validate_salary_entry,
};
