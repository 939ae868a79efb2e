//! Justification input model.

use serde::{Deserialize, Serialize};

use super::{CpiCalculation, SalaryComparison};

/// The facts a justification paragraph may draw on. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustificationInput {
    /// Inflation gap, if one was calculated.
    #[serde(default)]
    pub cpi_data: Option<CpiCalculation>,
    /// Market comparison, if benchmarks were available.
    #[serde(default)]
    pub market_data: Option<SalaryComparison>,
    /// Accomplishments the user wants to cite, most important first.
    #[serde(default)]
    pub achievements: Vec<String>,
}
