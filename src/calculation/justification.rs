//! Justification paragraph composition.
//!
//! Builds the short, deterministic paragraph that summarises why a raise is
//! warranted. The prose letter itself is written elsewhere; this text is one
//! of its inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{format_decimal, format_ordinal};
use crate::models::{CpiCalculation, JustificationInput, SalaryComparison};

/// Rules deciding which clauses a justification includes.
///
/// The below-median cut-off is deliberately separate from the market
/// position thresholds: a salary at the 40th percentile is Market Rate yet
/// still earns the below-median clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustificationPolicy {
    /// Percentile ranks below this add the market clause.
    pub below_median_under: Decimal,
    /// Most achievements quoted.
    pub max_achievements: usize,
}

impl Default for JustificationPolicy {
    fn default() -> Self {
        Self {
            below_median_under: Decimal::new(50, 0),
            max_achievements: 3,
        }
    }
}

impl JustificationPolicy {
    /// Composes the justification paragraph.
    ///
    /// Clauses appear in a fixed order (inflation, market, achievements) and
    /// are joined with single spaces. Returns an empty string when none apply.
    pub fn compose(
        &self,
        cpi_data: Option<&CpiCalculation>,
        market_data: Option<&SalaryComparison>,
        achievements: &[String],
    ) -> String {
        let mut clauses: Vec<String> = Vec::new();

        if let Some(cpi) = cpi_data.filter(|cpi| cpi.is_behind_inflation()) {
            clauses.push(format!(
                "With inflation averaging {}% a year over the past {} years, my salary now buys {}% less than it did at my last adjustment.",
                format_decimal(cpi.inflation_rate, 1),
                format_decimal(cpi.years_elapsed, 1),
                format_decimal(cpi.percentage_gap, 1),
            ));
        }

        if let Some(market) =
            market_data.filter(|market| market.percentile_rank < self.below_median_under)
        {
            clauses.push(format!(
                "My current pay sits at the {} percentile for {} roles in {}, below the market median.",
                format_ordinal(market.percentile_rank),
                market.job_title,
                market.location,
            ));
        }

        let quoted: Vec<&str> = achievements
            .iter()
            .take(self.max_achievements)
            .map(String::as_str)
            .collect();
        if !quoted.is_empty() {
            clauses.push(format!(
                "Over this period I have delivered: {}.",
                quoted.join(", ")
            ));
        }

        clauses.join(" ")
    }

    /// Composes the justification paragraph from a [`JustificationInput`].
    pub fn compose_input(&self, input: &JustificationInput) -> String {
        self.compose(
            input.cpi_data.as_ref(),
            input.market_data.as_ref(),
            &input.achievements,
        )
    }
}

/// Composes a justification paragraph with the default policy.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::generate_salary_justification;
///
/// assert_eq!(generate_salary_justification(None, None, &[]), "");
///
/// let achievements = vec!["Led the billing migration".to_string()];
/// let text = generate_salary_justification(None, None, &achievements);
/// assert!(text.contains("Led the billing migration"));
/// ```
pub fn generate_salary_justification(
    cpi_data: Option<&CpiCalculation>,
    market_data: Option<&SalaryComparison>,
    achievements: &[String],
) -> String {
    JustificationPolicy::default().compose(cpi_data, market_data, achievements)
}
