//! Performance benchmarks for the payroll engine.
//!
//! Covers the single payslip calculator, batch runs of 100 and 1000 rows,
//! and the full HTTP path for a 100-row sheet.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use prominent_payroll::api::{AppState, CalculateRequest, create_router};
use prominent_payroll::calculation::{RunOptions, compute_payslip, run_payroll};
use prominent_payroll::config::ConfigLoader;
use prominent_payroll::models::RawRow;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ph_train_2023").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `count` rows with salaries spread across every tax bracket.
fn create_rows(count: usize) -> Vec<RawRow> {
    let salaries = [15000.0, 20000.0, 35000.0, 50000.0, 120000.0, 400000.0, 900000.0];
    (0..count)
        .map(|i| {
            RawRow::new()
                .with("ID", format!("EMP{:04}", i + 1))
                .with("Name", format!("Employee {}", i + 1))
                .with("Salary", salaries[i % salaries.len()])
        })
        .collect()
}

fn bench_single_payslip(c: &mut Criterion) {
    c.bench_function("single_payslip", |b| {
        b.iter(|| black_box(compute_payslip(black_box(50000.0))))
    });
}

/// Benchmark: batch runs of 100 and 1000 rows, with and without audit steps.
fn bench_batches(c: &mut Criterion) {
    let loader = create_test_state().config().clone();
    let mut group = c.benchmark_group("batch");

    for row_count in [100usize, 1000] {
        let rows = create_rows(row_count);
        group.throughput(Throughput::Elements(row_count as u64));

        group.bench_with_input(BenchmarkId::new("plain", row_count), &rows, |b, rows| {
            b.iter(|| black_box(run_payroll(rows, loader.config(), RunOptions::default())))
        });
        group.bench_with_input(BenchmarkId::new("explain", row_count), &rows, |b, rows| {
            b.iter(|| {
                black_box(run_payroll(
                    rows,
                    loader.config(),
                    RunOptions { explain: true },
                ))
            })
        });
    }

    group.finish();
}

/// Benchmark: a 100-row sheet through `POST /payroll/calculate`.
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = CalculateRequest {
        rows: create_rows(100),
        explain: false,
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("http_calculate_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll/calculate")
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

criterion_group!(
    benches,
    bench_single_payslip,
    bench_batches,
    bench_http_calculate,
);
criterion_main!(benches);
