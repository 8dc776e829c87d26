//! Benchmarks for dashboard derivation and page rendering
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

use healthhub::monitoring::{
    calculate_trend, generate_synthetic_metrics_from, sparkline_points, DashboardView,
    DataOrigin, HealthSnapshot, MetricKind,
};
use healthhub::site::render_page_for_year;

fn create_snapshot() -> HealthSnapshot {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    HealthSnapshot {
        metrics: generate_synthetic_metrics_from(today, &mut rng),
        alerts: vec![],
        origin: DataOrigin::Synthetic,
    }
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    let snapshot = create_snapshot();
    let heart_rates = MetricKind::HeartRate.series(&snapshot.metrics);

    group.throughput(Throughput::Elements(heart_rates.len() as u64));

    group.bench_function("calculate_trend", |b| {
        b.iter(|| calculate_trend(black_box(&heart_rates)))
    });

    group.bench_function("sparkline_points", |b| {
        b.iter(|| sparkline_points(black_box(&heart_rates)))
    });

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    let snapshot = create_snapshot();

    group.bench_function("derive", |b| {
        b.iter(|| DashboardView::derive(black_box(&snapshot)))
    });

    let view = DashboardView::derive(&snapshot);

    group.bench_function("render_page", |b| {
        b.iter(|| render_page_for_year(black_box(&view), 2024))
    });

    group.finish();
}

criterion_group!(benches, bench_series, bench_dashboard);
criterion_main!(benches);
