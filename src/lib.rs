//! WageLift Salary Gap Engine
//!
//! This crate computes the numbers behind a raise request: the increase between
//! two salaries, the inflation-adjusted value of a past salary and the resulting
//! gap, where a salary sits against market benchmarks, and a short justification
//! paragraph built from those facts. The calculations perform no I/O; CPI rates and
//! benchmark percentiles are supplied by the caller.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
