//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_comparison, build_comparison_from_salary, calculate_increase, compute_cpi_gap,
    validate_salary_entry,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::format::{format_percentage, format_salary};
use crate::models::{
    DisplaySummary, JustificationInput, SalaryAnalysis, SalaryComparison, SalaryEntry,
};

use super::request::{AnalysisRequest, IncreaseRequest, MarketPositionRequest};
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, IncreaseResponse, JustificationResponse,
    ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/increase", post(increase_handler))
        .route("/market-position", post(market_position_handler))
        .route("/justification", post(justification_handler))
        .route("/validate", post(validate_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new("VALIDATION_ERROR", body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Handler for POST /analyze.
///
/// Validates the salary entry, then runs every part of the analysis the
/// request supplies data for.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let errors = validate_salary_entry(&request.entry);
    if !errors.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            error_count = errors.len(),
            "Salary entry failed validation"
        );
        return json_response(StatusCode::BAD_REQUEST, ApiError::validation_error(&errors));
    }

    let start_time = Instant::now();
    match perform_analysis(request, state.config()) {
        Ok(analysis) => {
            info!(
                correlation_id = %correlation_id,
                analysis_id = %analysis.analysis_id,
                has_cpi = analysis.cpi.is_some(),
                has_comparison = analysis.comparison.is_some(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Analysis completed successfully"
            );
            json_response(StatusCode::OK, analysis)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Runs the inflation, market and increase calculations for a validated request.
fn perform_analysis(
    request: AnalysisRequest,
    config: &ConfigLoader,
) -> EngineResult<SalaryAnalysis> {
    let AnalysisRequest {
        entry,
        requested_salary,
        raise_history,
        market,
        achievements,
        currency,
    } = request;

    let currency = config.currency_or_default(currency.as_deref()).to_string();
    let decimals = config.engine().percentage_decimals;

    let cpi = raise_history
        .map(|history| {
            compute_cpi_gap(
                history.original_salary,
                entry.current_salary,
                history.historical_date,
                history.current_date,
                history.inflation_rate,
            )
        })
        .transpose()?;

    let comparison = market
        .map(|market| match market.percentile_rank {
            Some(rank) => build_comparison(
                &entry.job_title,
                &entry.location,
                market.percentiles,
                rank,
                config.market_thresholds(),
            ),
            None => build_comparison_from_salary(
                &entry.job_title,
                &entry.location,
                market.percentiles,
                entry.current_salary,
                config.market_thresholds(),
            ),
        })
        .transpose()?;

    let increase = requested_salary
        .map(|requested| calculate_increase(entry.current_salary, requested))
        .transpose()?;

    let justification = config.justification_policy().compose(
        cpi.as_ref(),
        comparison.as_ref(),
        &achievements,
    );

    let display = DisplaySummary {
        current_salary: format_salary(entry.current_salary, &currency),
        adjusted_salary: cpi
            .as_ref()
            .map(|gap| format_salary(gap.adjusted_salary, &currency)),
        dollar_gap: cpi
            .as_ref()
            .map(|gap| format_salary(gap.dollar_gap, &currency)),
        percentage_gap: cpi
            .as_ref()
            .map(|gap| format_percentage(gap.percentage_gap, decimals)),
        market_median: comparison
            .as_ref()
            .and_then(SalaryComparison::median)
            .map(|median| format_salary(median, &currency)),
        market_position: comparison
            .as_ref()
            .map(|comparison| comparison.market_position.label().to_string()),
        increase_percentage: increase
            .as_ref()
            .map(|increase| format_percentage(increase.percentage, decimals)),
    };

    Ok(SalaryAnalysis {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        entry,
        cpi,
        comparison,
        increase,
        justification,
        display,
    })
}

/// Handler for POST /increase.
async fn increase_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncreaseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    match calculate_increase(request.current_salary, request.requested_salary) {
        Ok(increase) => {
            let currency = config.currency_or_default(request.currency.as_deref());
            let body = IncreaseResponse {
                current_salary: request.current_salary,
                requested_salary: increase.requested_salary,
                increase_dollar: increase.dollar,
                increase_percentage: increase.percentage,
                display_dollar: format_salary(increase.dollar, currency),
                display_percentage: format_percentage(
                    increase.percentage,
                    config.engine().percentage_decimals,
                ),
            };
            info!(
                correlation_id = %correlation_id,
                increase_percentage = %body.increase_percentage,
                "Increase calculated"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /market-position.
async fn market_position_handler(
    State(state): State<AppState>,
    payload: Result<Json<MarketPositionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let thresholds = state.config().market_thresholds();
    let result = match (request.percentile_rank, request.salary) {
        (Some(rank), _) => build_comparison(
            &request.job_title,
            &request.location,
            request.percentiles,
            rank,
            thresholds,
        ),
        (None, Some(salary)) => build_comparison_from_salary(
            &request.job_title,
            &request.location,
            request.percentiles,
            salary,
            thresholds,
        ),
        (None, None) => Err(EngineError::invalid_input(
            "percentile_rank",
            "either percentile_rank or salary is required",
        )),
    };

    match result {
        Ok(comparison) => {
            info!(
                correlation_id = %correlation_id,
                percentile_rank = %comparison.percentile_rank,
                market_position = %comparison.market_position,
                "Market position determined"
            );
            json_response(StatusCode::OK, comparison)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /justification.
async fn justification_handler(
    State(state): State<AppState>,
    payload: Result<Json<JustificationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let justification = state.config().justification_policy().compose_input(&input);
    json_response(StatusCode::OK, JustificationResponse { justification })
}

/// Handler for POST /validate.
///
/// Invalid entries are a normal outcome here, so the response is always 200
/// when the body parses.
async fn validate_handler(payload: Result<Json<SalaryEntry>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let entry = match payload {
        Ok(Json(entry)) => entry,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let errors = validate_salary_entry(&entry);
    json_response(
        StatusCode::OK,
        ValidationResponse {
            valid: errors.is_empty(),
            errors,
        },
    )
}
