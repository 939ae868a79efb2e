//! Response types for the salary engine API.
//!
//! This module defines the success bodies of the smaller endpoints, the
//! error body shared by all endpoints, and the mapping from [`EngineError`]
//! to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response listing every problem found.
    pub fn validation_error(errors: &[String]) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            "Salary entry is invalid",
            errors.join("; "),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("The value supplied for '{}' cannot be used", field),
                ),
            },
            EngineError::InvalidSalaryDisplay { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_INPUT", message),
            },
            EngineError::CalculationError { message: reason } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", reason),
            },
        }
    }
}

/// Increase figures and their display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncreaseResponse {
    /// Current salary.
    pub current_salary: Decimal,
    /// Salary being requested.
    pub requested_salary: Decimal,
    /// Requested minus current.
    pub increase_dollar: Decimal,
    /// Increase as a percentage of current, unrounded.
    pub increase_percentage: Decimal,
    /// Formatted increase amount, e.g. `$8,000`.
    pub display_dollar: String,
    /// Formatted increase percentage, e.g. `10.0%`.
    pub display_percentage: String,
}

/// Body of the `/justification` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JustificationResponse {
    /// The composed paragraph; empty when nothing supports a raise.
    pub justification: String,
}

/// Body of the `/validate` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// True when `errors` is empty.
    pub valid: bool,
    /// One message per problem.
    pub errors: Vec<String>,
}

/// Body of the `/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server is serving.
    pub status: String,
    /// Engine version.
    pub version: String,
}
