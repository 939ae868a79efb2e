//! Request types for the salary engine API.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SalaryEntry;

/// Request body for the `/analyze` endpoint.
///
/// Only `entry` is required; each optional section switches on the matching
/// part of the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The user's salary details.
    pub entry: SalaryEntry,
    /// Salary the user intends to ask for.
    #[serde(default)]
    pub requested_salary: Option<Decimal>,
    /// Salary at the last raise and the inflation since then.
    #[serde(default)]
    pub raise_history: Option<RaiseHistoryRequest>,
    /// Benchmark percentiles for the entry's job title and location.
    #[serde(default)]
    pub market: Option<MarketDataRequest>,
    /// Accomplishments to cite in the justification.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// ISO currency code for display strings.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Salary history used for the inflation gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseHistoryRequest {
    /// Salary set at `historical_date`.
    pub original_salary: Decimal,
    /// Date of the last raise.
    pub historical_date: NaiveDate,
    /// Date to measure the gap at.
    pub current_date: NaiveDate,
    /// Annualized inflation rate over the period, in percent.
    pub inflation_rate: Decimal,
}

/// Benchmark data for a market comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDataRequest {
    /// Market salary by percentile rank.
    pub percentiles: BTreeMap<u8, Decimal>,
    /// The user's percentile rank, when the benchmark provider supplies it.
    /// Estimated from the entry's salary otherwise.
    #[serde(default)]
    pub percentile_rank: Option<Decimal>,
}

/// Request body for the `/increase` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncreaseRequest {
    /// Current salary.
    pub current_salary: Decimal,
    /// Salary being requested.
    pub requested_salary: Decimal,
    /// ISO currency code for display strings.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request body for the `/market-position` endpoint.
///
/// Exactly one of `percentile_rank` and `salary` is normally given; when both
/// are present the explicit rank wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPositionRequest {
    /// Benchmarked job title.
    pub job_title: String,
    /// Benchmarked location.
    pub location: String,
    /// Market salary by percentile rank.
    pub percentiles: BTreeMap<u8, Decimal>,
    /// Known percentile rank.
    #[serde(default)]
    pub percentile_rank: Option<Decimal>,
    /// Salary to estimate a rank for.
    #[serde(default)]
    pub salary: Option<Decimal>,
}
