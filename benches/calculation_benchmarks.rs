//! Performance benchmarks for the WageLift salary engine.
//!
//! Covers the pure calculation functions and the `/analyze` endpoint:
//! - Inflation gap for a single raise history
//! - Percentile rank estimation against a five-point table
//! - Full analysis over HTTP
//! - Batches of 100 analyses
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeMap;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use wagelift_engine::api::{AnalysisRequest, AppState, create_router};
use wagelift_engine::calculation::{compute_cpi_gap, estimate_percentile_rank};
use wagelift_engine::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/wagelift").expect("Failed to load config");
    AppState::new(config)
}

fn benchmark_table() -> BTreeMap<u8, Decimal> {
    BTreeMap::from([
        (10, Decimal::new(60000, 0)),
        (25, Decimal::new(72000, 0)),
        (50, Decimal::new(89000, 0)),
        (75, Decimal::new(105000, 0)),
        (90, Decimal::new(125000, 0)),
    ])
}

/// Creates an analysis request with every optional section filled in.
fn create_full_request(current_salary: u32) -> AnalysisRequest {
    let request_json = serde_json::json!({
        "entry": {
            "current_salary": current_salary,
            "job_title": "Software Engineer",
            "company": "Acme Corp",
            "location": "94107"
        },
        "requested_salary": current_salary + 12000,
        "raise_history": {
            "original_salary": 80000,
            "historical_date": "2022-06-01",
            "current_date": "2025-09-15",
            "inflation_rate": "3.7"
        },
        "market": { "percentiles": benchmark_table() },
        "achievements": ["Led the billing migration", "Mentored two new hires"]
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Benchmark: inflation gap with a fractional number of years.
fn bench_cpi_gap(c: &mut Criterion) {
    let historical = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
    let current = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();

    c.bench_function("cpi_gap_fractional_years", |b| {
        b.iter(|| {
            compute_cpi_gap(
                black_box(Decimal::new(80000, 0)),
                black_box(Decimal::new(84000, 0)),
                historical,
                current,
                black_box(Decimal::new(37, 1)),
            )
        })
    });
}

/// Benchmark: percentile rank estimation across the table.
fn bench_percentile_rank(c: &mut Criterion) {
    let table = benchmark_table();
    let mut group = c.benchmark_group("percentile_rank");

    for salary in [55000u32, 80000, 97000, 130000] {
        group.bench_with_input(BenchmarkId::new("salary", salary), &salary, |b, salary| {
            b.iter(|| estimate_percentile_rank(&table, black_box(Decimal::from(*salary))))
        });
    }

    group.finish();
}

/// Benchmark: single full analysis through the router.
fn bench_single_analysis(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::to_string(&create_full_request(84000)).unwrap();

    c.bench_function("single_analysis", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/analyze")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 analyses with varied salaries.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| serde_json::to_string(&create_full_request(50000 + i * 1000)).unwrap())
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/analyze")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cpi_gap,
    bench_percentile_rank,
    bench_single_analysis,
    bench_batch_100,
);
criterion_main!(benches);
