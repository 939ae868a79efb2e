//! Salary entry validation.
//!
//! Problems with user-submitted data are reported as messages rather than
//! errors, so a form can show every issue at once.

use crate::models::SalaryEntry;

/// Message for a zero or negative salary.
pub const SALARY_NOT_POSITIVE: &str = "Current salary must be a positive number";
/// Message for a blank job title.
pub const JOB_TITLE_REQUIRED: &str = "Job title is required";
/// Message for a blank company.
pub const COMPANY_REQUIRED: &str = "Company is required";
/// Message for a blank location.
pub const LOCATION_REQUIRED: &str = "Location is required";

/// Checks a salary entry and returns one message per problem found.
///
/// Text fields count as blank when they are empty after trimming. An empty
/// list means the entry is valid.
///
/// # Examples
///
/// ```
/// use wagelift_engine::calculation::validate_salary_entry;
/// use wagelift_engine::models::SalaryEntry;
/// use rust_decimal::Decimal;
///
/// let entry = SalaryEntry {
///     current_salary: Decimal::new(-1, 0),
///     job_title: String::new(),
///     company: "  ".to_string(),
///     location: String::new(),
/// };
/// assert_eq!(validate_salary_entry(&entry).len(), 4);
/// ```
pub fn validate_salary_entry(entry: &SalaryEntry) -> Vec<String> {
    let checks = [
        (!entry.has_positive_salary(), SALARY_NOT_POSITIVE),
        (entry.job_title.trim().is_empty(), JOB_TITLE_REQUIRED),
        (entry.company.trim().is_empty(), COMPANY_REQUIRED),
        (entry.location.trim().is_empty(), LOCATION_REQUIRED),
    ];

    checks
        .into_iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, message)| message.to_string())
        .collect()
}
