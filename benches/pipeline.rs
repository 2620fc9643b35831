//! Benchmarks for log-analyzer parsing, filtering and distribution.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench pipeline -- distribute`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use log_analyzer::core::{
    Concurrency, FilterConfig, MemorySource, ResultSet, StatsRequest, aggregate, apply_filters,
    distribute,
};
use log_analyzer::progress::no_progress;
use log_analyzer::record::parse_line;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_lines(count: usize) -> Vec<String> {
    let actors = ["alice", "bob", "carol", "dave"];
    (0..count)
        .map(|i| {
            let actor = actors[i % actors.len()];
            let day = i % 28 + 1;
            let hour = i % 24;
            let minute = i % 60;
            format!("{actor},{day:02}.01.2020 at {hour}:{minute:02}:00,request {i} handled")
        })
        .collect()
}

fn generate_sources(files: usize, lines_per_file: usize) -> Vec<MemorySource> {
    (0..files)
        .map(|f| MemorySource::new(format!("server-{f}.log"), generate_lines(lines_per_file)))
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1_000, 10_000] {
        let lines = generate_lines(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                for line in lines {
                    black_box(parse_line(line).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let records: Vec<_> = generate_lines(10_000)
        .iter()
        .map(|l| parse_line(l).unwrap())
        .collect();

    let configs = [
        ("actor", FilterConfig::new().with_actor("alice")),
        ("message", FilterConfig::new().with_message("request 9")),
        (
            "all",
            FilterConfig::new()
                .with_actor("bob")
                .with_period("01.01.2020 at 0:00:00-15.01.2020 at 0:00:00")
                .unwrap()
                .with_message("handled"),
        ),
    ];

    group.throughput(Throughput::Elements(records.len() as u64));
    for (name, config) in &configs {
        group.bench_with_input(BenchmarkId::from_parameter(name), config, |b, config| {
            b.iter(|| black_box(apply_filters(records.clone(), config)));
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let records: Vec<_> = generate_lines(10_000)
        .iter()
        .map(|l| parse_line(l).unwrap())
        .collect();
    let mode = StatsRequest::new()
        .with_grouping_actor("alice")
        .with_time_unit_str("10 hour")
        .unwrap()
        .resolve()
        .unwrap();

    c.bench_function("aggregate/both", |b| {
        b.iter(|| black_box(aggregate(records.clone(), &mode)));
    });
}

fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute");
    let sources = generate_sources(20, 2_000);
    let filter = FilterConfig::new().with_message("handled");
    let progress = no_progress();

    group.throughput(Throughput::Elements(20 * 2_000));
    for threads in [1, 2, 4, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let results = ResultSet::new();
                distribute(
                    &sources,
                    &filter,
                    Concurrency::new(threads),
                    &results,
                    &progress,
                )
                .unwrap();
                black_box(results.into_records())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_filter,
    bench_aggregate,
    bench_distribute
);
criterion_main!(benches);
