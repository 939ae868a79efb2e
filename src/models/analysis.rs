//! Salary analysis result models.
//!
//! This module contains [`SalaryAnalysis`], the complete output of one
//! analysis request, along with the increase figures and pre-formatted
//! display strings it carries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CpiCalculation, SalaryComparison, SalaryEntry};

/// The raise a user is asking for, relative to current pay.
///
/// # Example
///
/// ```
/// use wagelift_engine::models::SalaryIncrease;
/// use rust_decimal::Decimal;
///
/// let increase = SalaryIncrease {
///     requested_salary: Decimal::new(96800, 0),
///     dollar: Decimal::new(16800, 0),
///     percentage: Decimal::new(21, 0),
/// };
/// assert!(increase.dollar > Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryIncrease {
    /// The salary being requested.
    pub requested_salary: Decimal,
    /// Requested minus current. Negative for a pay cut.
    pub dollar: Decimal,
    /// `dollar` as a percentage of current pay, unrounded.
    pub percentage: Decimal,
}

/// Display-ready strings for the headline numbers of an analysis.
///
/// Fields are `None` when the corresponding figure was not computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySummary {
    /// Current salary, e.g. `$80,000`.
    pub current_salary: String,
    /// Inflation-adjusted salary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_salary: Option<String>,
    /// Dollar gap to inflation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dollar_gap: Option<String>,
    /// Percentage gap to inflation, e.g. `21.0%`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_gap: Option<String>,
    /// Market median salary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_median: Option<String>,
    /// Market position label, e.g. `Market Rate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_position: Option<String>,
    /// Requested increase as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increase_percentage: Option<String>,
}

/// The complete result of a salary analysis.
///
/// Everything a letter generator or dashboard needs about one salary:
/// the inflation gap, the market comparison, the requested increase and a
/// ready-made justification paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryAnalysis {
    /// Unique identifier for this analysis.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// The salary entry the analysis is for.
    pub entry: SalaryEntry,
    /// Inflation gap since the last raise.
    pub cpi: Option<CpiCalculation>,
    /// Market benchmark comparison.
    pub comparison: Option<SalaryComparison>,
    /// Requested increase.
    pub increase: Option<SalaryIncrease>,
    /// Justification paragraph; empty when nothing supports a raise.
    pub justification: String,
    /// Formatted headline figures.
    pub display: DisplaySummary,
}
