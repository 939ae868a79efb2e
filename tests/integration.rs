//! End-to-end tests for the WageLift salary engine.
//!
//! This test suite drives the HTTP API and covers:
//! - Full analysis (inflation gap, market position, increase, justification)
//! - Partial analyses where optional sections are omitted
//! - Market position estimation from a salary
//! - Standalone increase, justification and validation endpoints
//! - Display formatting round trips
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use wagelift_engine::api::{AppState, create_router};
use wagelift_engine::config::ConfigLoader;
use wagelift_engine::format::{format_salary, parse_salary_display};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/wagelift").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field that may have been serialized as a string or a number.
fn decimal_field(value: &Value) -> Decimal {
    match value {
        Value::String(s) => decimal(s),
        Value::Number(n) => decimal(&n.to_string()),
        other => panic!("expected a decimal, got {other}"),
    }
}

fn assert_decimal_approx(value: &Value, expected: &str) {
    let actual = decimal_field(value);
    let expected = decimal(expected);
    assert!(
        (actual - expected).abs() < decimal("0.01"),
        "expected {expected}, got {actual}"
    );
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn entry(current_salary: u32) -> Value {
    json!({
        "current_salary": current_salary,
        "job_title": "Software Engineer",
        "company": "Acme Corp",
        "location": "94107"
    })
}

fn benchmark_percentiles() -> Value {
    json!({ "10": 60000, "25": 72000, "50": 89000, "75": 105000, "90": 125000 })
}

// =============================================================================
// SECTION 1: Full analysis
// =============================================================================

#[tokio::test]
async fn test_full_analysis_two_years_ten_percent() {
    let body = json!({
        "entry": entry(80000),
        "requested_salary": 96800,
        "raise_history": {
            "original_salary": 80000,
            "historical_date": "2023-03-15",
            "current_date": "2025-03-15",
            "inflation_rate": 10
        },
        "market": { "percentiles": benchmark_percentiles(), "percentile_rank": 40 },
        "achievements": ["Led the billing migration", "Cut p99 latency by 40%"]
    });

    let (status, result) = post(create_router_for_test(), "/analyze", body).await;
    assert_eq!(status, StatusCode::OK, "body: {result}");

    assert_decimal_approx(&result["cpi"]["years_elapsed"], "2");
    assert_decimal_approx(&result["cpi"]["adjusted_salary"], "96800");
    assert_decimal_approx(&result["cpi"]["dollar_gap"], "16800");
    assert_decimal_approx(&result["cpi"]["percentage_gap"], "21");

    assert_eq!(result["comparison"]["market_position"], "market_rate");
    assert_decimal_approx(&result["increase"]["percentage"], "21");

    assert_eq!(result["display"]["current_salary"], "$80,000");
    assert_eq!(result["display"]["adjusted_salary"], "$96,800");
    assert_eq!(result["display"]["dollar_gap"], "$16,800");
    assert_eq!(result["display"]["percentage_gap"], "21.0%");
    assert_eq!(result["display"]["market_median"], "$89,000");
    assert_eq!(result["display"]["market_position"], "Market Rate");
    assert_eq!(result["display"]["increase_percentage"], "21.0%");

    assert_eq!(
        result["justification"],
        "With inflation averaging 10.0% a year over the past 2.0 years, my salary now buys 21.0% less than it did at my last adjustment. \
         My current pay sits at the 40th percentile for Software Engineer roles in 94107, below the market median. \
         Over this period I have delivered: Led the billing migration, Cut p99 latency by 40%."
    );
}

#[tokio::test]
async fn test_analysis_has_identity_fields() {
    let body = json!({ "entry": entry(80000) });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["analysis_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_analysis_ids_are_unique() {
    let body = json!({ "entry": entry(80000) });
    let (_, first) = post(create_router_for_test(), "/analyze", body.clone()).await;
    let (_, second) = post(create_router_for_test(), "/analyze", body).await;

    assert_ne!(first["analysis_id"], second["analysis_id"]);
}

// =============================================================================
// SECTION 2: Partial analyses
// =============================================================================

#[tokio::test]
async fn test_entry_only_analysis_omits_optional_sections() {
    let body = json!({ "entry": entry(80000) });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["cpi"].is_null());
    assert!(result["comparison"].is_null());
    assert!(result["increase"].is_null());
    assert_eq!(result["justification"], "");
    assert_eq!(result["display"], json!({ "current_salary": "$80,000" }));
}

#[tokio::test]
async fn test_zero_inflation_means_no_gap_and_no_clause() {
    let body = json!({
        "entry": entry(80000),
        "raise_history": {
            "original_salary": 80000,
            "historical_date": "2023-03-15",
            "current_date": "2025-03-15",
            "inflation_rate": 0
        }
    });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_approx(&result["cpi"]["adjusted_salary"], "80000");
    assert_decimal_approx(&result["cpi"]["dollar_gap"], "0");
    assert_eq!(result["justification"], "");
}

#[tokio::test]
async fn test_salary_ahead_of_inflation_has_negative_gap() {
    let body = json!({
        "entry": entry(100000),
        "raise_history": {
            "original_salary": 80000,
            "historical_date": "2023-03-15",
            "current_date": "2025-03-15",
            "inflation_rate": 10
        }
    });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_approx(&result["cpi"]["dollar_gap"], "-3200");
    assert_eq!(result["display"]["dollar_gap"], "-$3,200");
    assert_eq!(result["justification"], "");
}

#[tokio::test]
async fn test_achievements_are_capped_at_three() {
    let body = json!({
        "entry": entry(80000),
        "achievements": ["one", "two", "three", "four"]
    });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["justification"],
        "Over this period I have delivered: one, two, three."
    );
}

#[tokio::test]
async fn test_display_currency_override() {
    let body = json!({ "entry": entry(80000), "currency": "EUR" });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["display"]["current_salary"], "€80,000");
}

// =============================================================================
// SECTION 3: Market position
// =============================================================================

#[tokio::test]
async fn test_market_position_boundaries() {
    let cases = [
        ("24.9", "below_market"),
        ("25", "market_rate"),
        ("75", "market_rate"),
        ("75.1", "above_market"),
    ];

    for (rank, expected) in cases {
        let body = json!({
            "job_title": "Software Engineer",
            "location": "94107",
            "percentiles": benchmark_percentiles(),
            "percentile_rank": rank
        });
        let (status, result) = post(create_router_for_test(), "/market-position", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["market_position"], expected, "rank {rank}");
    }
}

#[tokio::test]
async fn test_market_position_estimated_from_salary() {
    let body = json!({
        "job_title": "Software Engineer",
        "location": "94107",
        "percentiles": benchmark_percentiles(),
        "salary": 97000
    });
    let (status, result) = post(create_router_for_test(), "/market-position", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_approx(&result["percentile_rank"], "62.5");
    assert_eq!(result["market_position"], "market_rate");
}

#[tokio::test]
async fn test_analysis_estimates_rank_when_missing() {
    let body = json!({
        "entry": entry(55000),
        "market": { "percentiles": benchmark_percentiles() }
    });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_approx(&result["comparison"]["percentile_rank"], "10");
    assert_eq!(result["display"]["market_position"], "Below Market");
    assert!(
        result["justification"]
            .as_str()
            .unwrap()
            .contains("10th percentile")
    );
}

#[tokio::test]
async fn test_unsorted_percentile_table_is_rejected() {
    let body = json!({
        "job_title": "Software Engineer",
        "location": "94107",
        "percentiles": { "25": 90000, "50": 80000 },
        "percentile_rank": 40
    });
    let (status, result) = post(create_router_for_test(), "/market-position", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_INPUT");
}

// =============================================================================
// SECTION 4: Standalone endpoints
// =============================================================================

#[tokio::test]
async fn test_increase_from_75k_to_83k() {
    let body = json!({ "current_salary": 75000, "requested_salary": 83000 });
    let (status, result) = post(create_router_for_test(), "/increase", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_approx(&result["increase_dollar"], "8000");
    assert_decimal_approx(&result["increase_percentage"], "10.67");
    assert_eq!(result["display_dollar"], "$8,000");
    assert_eq!(result["display_percentage"], "10.7%");
}

#[tokio::test]
async fn test_increase_allows_decrease() {
    let body = json!({ "current_salary": 100000, "requested_salary": 90000 });
    let (status, result) = post(create_router_for_test(), "/increase", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_approx(&result["increase_percentage"], "-10");
    assert_eq!(result["display_dollar"], "-$10,000");
}

#[tokio::test]
async fn test_justification_endpoint() {
    let body = json!({
        "market_data": {
            "job_title": "Designer",
            "location": "10001",
            "percentiles": { "50": 95000 },
            "percentile_rank": 33,
            "market_position": "market_rate"
        }
    });
    let (status, result) = post(create_router_for_test(), "/justification", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["justification"],
        "My current pay sits at the 33rd percentile for Designer roles in 10001, below the market median."
    );
}

#[tokio::test]
async fn test_justification_endpoint_empty_body() {
    let (status, result) = post(create_router_for_test(), "/justification", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["justification"], "");
}

#[tokio::test]
async fn test_validate_endpoint_valid_entry() {
    let (status, result) = post(create_router_for_test(), "/validate", entry(80000)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result, json!({ "valid": true, "errors": [] }));
}

#[tokio::test]
async fn test_validate_endpoint_reports_every_problem_in_order() {
    let body = json!({
        "current_salary": 0,
        "job_title": "",
        "company": "  ",
        "location": ""
    });
    let (status, result) = post(create_router_for_test(), "/validate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["errors"],
        json!([
            "Current salary must be a positive number",
            "Job title is required",
            "Company is required",
            "Location is required"
        ])
    );
}

// =============================================================================
// SECTION 5: Formatting
// =============================================================================

#[test]
fn test_display_strings_parse_back() {
    for amount in ["0", "999", "75000", "1234567", "-3200"] {
        let shown = format_salary(decimal(amount), "USD");
        let parsed = parse_salary_display(&shown).unwrap();
        assert_eq!(format_salary(parsed, "USD"), shown);
    }
}

// =============================================================================
// SECTION 6: Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_entry_is_rejected_before_calculation() {
    let body = json!({
        "entry": {
            "current_salary": 0,
            "job_title": "Engineer",
            "company": "Acme",
            "location": "94107"
        },
        "requested_salary": 90000
    });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert_eq!(result["details"], "Current salary must be a positive number");
}

#[tokio::test]
async fn test_missing_entry_field_is_validation_error() {
    let body = json!({ "entry": { "current_salary": 80000, "job_title": "Engineer" } });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_wrong_field_type_is_validation_error() {
    let body = json!({
        "entry": {
            "current_salary": "eighty thousand",
            "job_title": "Engineer",
            "company": "Acme",
            "location": "94107"
        }
    });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_syntax_error_is_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/increase")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"current_salary\": 80000,"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unrepresentable_increase_is_calculation_error() {
    let body = json!({
        "current_salary": Decimal::MAX.to_string(),
        "requested_salary": Decimal::MIN.to_string()
    });
    let (status, result) = post(create_router_for_test(), "/increase", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "CALCULATION_ERROR");
}

#[tokio::test]
async fn test_unrepresentable_benchmark_span_is_calculation_error() {
    let body = json!({
        "job_title": "Software Engineer",
        "location": "94107",
        "percentiles": { "10": Decimal::MIN.to_string(), "90": Decimal::MAX.to_string() },
        "salary": 0
    });
    let (status, result) = post(create_router_for_test(), "/market-position", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "CALCULATION_ERROR");
}

#[tokio::test]
async fn test_extreme_negative_rank_still_renders_justification() {
    let body = json!({
        "market_data": {
            "job_title": "Designer",
            "location": "10001",
            "percentiles": { "50": 95000 },
            "percentile_rank": i64::MIN.to_string(),
            "market_position": "below_market"
        }
    });
    let (status, result) = post(create_router_for_test(), "/justification", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        result["justification"]
            .as_str()
            .unwrap()
            .contains("-9223372036854775808th percentile")
    );
}

#[tokio::test]
async fn test_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .body(Body::from(json!({ "entry": entry(80000) }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_inflation_below_minus_hundred_percent_is_calculation_error() {
    let body = json!({
        "entry": entry(80000),
        "raise_history": {
            "original_salary": 80000,
            "historical_date": "2023-03-15",
            "current_date": "2025-03-15",
            "inflation_rate": -150
        }
    });
    let (status, result) = post(create_router_for_test(), "/analyze", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "CALCULATION_ERROR");
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(result["status"], "ok");
}
