//! Performance benchmarks for the charter engine.
//!
//! This benchmark suite covers the hot paths of statement computation:
//! - The hour-by-hour exclusion walk over spans of one to eight weeks
//! - A full single-port laytime statement
//! - Weather-warranty evaluation over a long noon-report log
//! - Parallel batch recomputation of 100 and 1000 statements
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use charter_engine::calculation::{calculate_exclusions, evaluate_warranty};
use charter_engine::config::ConfigLoader;
use charter_engine::engine::{
    LaytimeJob, LaytimeRequest, compute_laytime_statement, recompute_laytime_statements,
};
use charter_engine::models::{ExceptionRule, PortHoliday, WeatherEntry};

/// Loads the sample voyage configuration.
fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/sample-voyage").expect("Failed to load config")
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

/// Creates a port call lasting the given number of hours, with one holiday.
fn create_request(port_index: usize, hours: i64) -> LaytimeRequest {
    LaytimeRequest {
        port: format!("Port {}", port_index),
        nor_tendered: base_time(),
        completed_at: base_time() + Duration::hours(hours),
        allowed_hours: None,
        port_holidays: vec![PortHoliday {
            date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
            affects_laytime: true,
            name: None,
        }],
    }
}

/// Creates a noon-report log with mixed weather.
fn create_weather_log(days: usize) -> Vec<WeatherEntry> {
    (0..days)
        .map(|i| WeatherEntry {
            date: base_time().date() + Duration::days(i as i64),
            beaufort_scale: (i % 8) as u8,
            actual_speed: Decimal::new(120 + (i % 30) as i64, 1),
            actual_consumption: Decimal::new(280 + (i % 40) as i64, 1),
            wind_speed: Some(Decimal::new(10 + (i % 20) as i64, 0)),
            wave_height: None,
        })
        .collect()
}

fn bench_exclusion_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("exclusion_walk");
    let holidays = vec![PortHoliday {
        date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
        affects_laytime: true,
        name: None,
    }];

    for weeks in [1i64, 2, 4, 8] {
        let completed = base_time() + Duration::weeks(weeks);
        group.throughput(Throughput::Elements((weeks * 7 * 24) as u64));
        group.bench_with_input(BenchmarkId::new("shex", weeks), &completed, |b, completed| {
            b.iter(|| {
                calculate_exclusions(
                    black_box(base_time()),
                    black_box(*completed),
                    ExceptionRule::Shex,
                    black_box(&holidays),
                )
            })
        });
    }

    group.finish();
}

fn bench_single_statement(c: &mut Criterion) {
    let config = load_config();
    let request = create_request(0, 120);

    c.bench_function("single_laytime_statement", |b| {
        b.iter(|| compute_laytime_statement(black_box(config.laytime_terms()), black_box(&request)))
    });
}

fn bench_warranty_evaluation(c: &mut Criterion) {
    let config = load_config();
    let terms = &config.warranty().expect("sample voyage has a warranty").terms;
    let entries = create_weather_log(365);

    c.bench_function("warranty_evaluation_365_days", |b| {
        b.iter(|| evaluate_warranty(black_box(&entries), black_box(terms)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("batch_recompute");
    group.sample_size(20);

    for size in [100usize, 1000] {
        let jobs: Vec<LaytimeJob> = (0..size)
            .map(|i| LaytimeJob {
                terms: config.laytime_terms().clone(),
                request: create_request(i, 72 + (i % 96) as i64),
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &jobs, |b, jobs| {
            b.iter(|| recompute_laytime_statements(black_box(jobs)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_exclusion_walk,
    bench_single_statement,
    bench_warranty_evaluation,
    bench_batch
);
criterion_main!(benches);
