//! Salary entry model.
//!
//! This module defines the [`SalaryEntry`] struct that carries the salary
//! details a user submits before any gap or market calculation runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The salary details submitted by a user.
///
/// Entries are deserialized straight from form submissions, so none of the
/// fields are checked on construction. Use
/// [`validate_salary_entry`](crate::calculation::validate_salary_entry) to
/// collect every problem with an entry at once.
///
/// # Example
///
/// ```
/// use wagelift_engine::models::SalaryEntry;
/// use rust_decimal::Decimal;
///
/// let entry = SalaryEntry {
///     current_salary: Decimal::new(80000, 0),
///     job_title: "Software Engineer".to_string(),
///     company: "Acme".to_string(),
///     location: "94107".to_string(),
/// };
/// assert!(entry.has_positive_salary());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntry {
    /// Current annual salary in currency units.
    pub current_salary: Decimal,
    /// The job title the salary is paid for.
    pub job_title: String,
    /// The employer.
    pub company: String,
    /// Work location, usually a postal or ZIP code.
    pub location: String,
}

impl SalaryEntry {
    /// Returns true if the current salary is strictly positive.
    pub fn has_positive_salary(&self) -> bool {
        self.current_salary > Decimal::ZERO
    }
}
