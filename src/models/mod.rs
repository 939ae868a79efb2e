//! Core data models for the salary engine.
//!
//! All models are ephemeral value objects built from form submissions or
//! upstream API responses and discarded once a result is produced.

mod analysis;
mod cpi_calculation;
mod justification;
mod salary_comparison;
mod salary_entry;

pub use analysis::{DisplaySummary, SalaryAnalysis, SalaryIncrease};
pub use cpi_calculation::CpiCalculation;
pub use justification::JustificationInput;
pub use salary_comparison::{MarketPosition, STANDARD_PERCENTILES, SalaryComparison};
pub use salary_entry::SalaryEntry;
