//! Property-based tests for log-analyzer.
//!
//! These tests generate random record sets and filter combinations to check
//! the filter conjunction and the equivalence of parallel and sequential runs.

use proptest::prelude::*;

use log_analyzer::LogRecord;
use log_analyzer::core::filter::{contains_message, in_window, matches_actor};
use log_analyzer::core::{
    Concurrency, FilterConfig, MemorySource, ResultSet, TimeWindow, apply_filters, distribute,
};
use log_analyzer::progress::no_progress;
use log_analyzer::record::{parse_line, parse_timestamp};

const ACTORS: [&str; 5] = ["alice", "bob", "carol", "Иван", "al"];
const MESSAGES: [&str; 6] = [
    "hello",
    "error: disk full",
    "login, then logout",
    "alice says hi",
    "Привет мир",
    "",
];

/// Generate a well-formed log line from fixed pools of actors and messages
fn arb_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(ACTORS.to_vec()),
        1u32..=28,
        1u32..=12,
        2019i32..=2021,
        0u32..24,
        0u32..60,
        0u32..60,
        prop::sample::select(MESSAGES.to_vec()),
    )
        .prop_map(|(actor, day, month, year, h, m, s, msg)| {
            format!("{actor},{day:02}.{month:02}.{year} at {h}:{m:02}:{s:02},{msg}")
        })
}

fn arb_lines(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_line(), 0..max_len)
}

fn arb_window() -> impl Strategy<Value = TimeWindow> {
    (0usize..3, 0usize..3).prop_map(|(a, b)| {
        let points = [
            "01.01.2019 at 0:00:00",
            "01.07.2020 at 12:00:00",
            "31.12.2021 at 23:59:59",
        ];
        TimeWindow::new(
            parse_timestamp(points[a]).unwrap(),
            parse_timestamp(points[b]).unwrap(),
        )
    })
}

/// Any subset of the three filters, possibly empty.
fn arb_filter() -> impl Strategy<Value = FilterConfig> {
    (
        prop::option::of(prop::sample::select(ACTORS.to_vec())),
        prop::option::of(arb_window()),
        prop::option::of(prop::sample::select(vec!["error", "o", ", then", "мир", ""])),
    )
        .prop_map(|(actor, window, message)| {
            let mut config = FilterConfig::new();
            if let Some(actor) = actor {
                config = config.with_actor(actor);
            }
            if let Some(window) = window {
                config = config.with_window(window.start, window.end);
            }
            if let Some(message) = message {
                config = config.with_message(message);
            }
            config
        })
}

fn parse_all(lines: &[String]) -> Vec<LogRecord> {
    lines.iter().map(|l| parse_line(l).unwrap()).collect()
}

fn sorted_raw(records: Vec<LogRecord>) -> Vec<String> {
    let mut lines: Vec<String> = records.into_iter().map(LogRecord::into_raw_line).collect();
    lines.sort();
    lines
}

/// Split `lines` round-robin into `files` in-memory sources.
fn split_sources(lines: &[String], files: usize) -> Vec<MemorySource> {
    (0..files)
        .map(|f| {
            let chunk: Vec<String> = lines.iter().skip(f).step_by(files).cloned().collect();
            MemorySource::new(format!("file-{f}.log"), chunk)
        })
        .collect()
}

fn run(sources: &[MemorySource], filter: &FilterConfig, threads: usize) -> Vec<String> {
    let results = ResultSet::new();
    let report = distribute(
        sources,
        filter,
        Concurrency::new(threads),
        &results,
        &no_progress(),
    )
    .unwrap();
    assert!(report.is_clean());
    sorted_raw(results.into_records())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// A record passes exactly when every configured predicate holds
    #[test]
    fn filter_is_conjunction(lines in arb_lines(30), config in arb_filter()) {
        let records = parse_all(&lines);
        let expected: Vec<LogRecord> = records
            .iter()
            .filter(|r| config.actor.as_deref().is_none_or(|a| matches_actor(r, a)))
            .filter(|r| config.window.as_ref().is_none_or(|w| in_window(r, w)))
            .filter(|r| config.message.as_deref().is_none_or(|m| contains_message(r, m)))
            .cloned()
            .collect();

        let filtered = apply_filters(records, &config);
        prop_assert_eq!(filtered, expected);
    }

    /// Filtering never grows the record set
    #[test]
    fn filter_never_increases_count(lines in arb_lines(30), config in arb_filter()) {
        let records = parse_all(&lines);
        let original_len = records.len();
        prop_assert!(apply_filters(records, &config).len() <= original_len);
    }

    /// Passing records keep their input line byte for byte
    #[test]
    fn passing_lines_are_unchanged(lines in arb_lines(30), config in arb_filter()) {
        for record in apply_filters(parse_all(&lines), &config) {
            prop_assert!(lines.iter().any(|l| l == record.raw_line()));
            prop_assert_eq!(record.to_string(), record.raw_line());
        }
    }

    // ============================================
    // DISTRIBUTION PROPERTIES
    // ============================================

    /// Any worker count yields the same multiset as a sequential run
    #[test]
    fn parallel_matches_sequential(
        lines in arb_lines(40),
        config in arb_filter(),
        files in 1usize..6,
        threads in 1usize..=15,
    ) {
        let sources = split_sources(&lines, files);
        let sequential = run(&sources, &config, 1);
        let parallel = run(&sources, &config, threads);
        prop_assert_eq!(parallel, sequential);
    }

    /// Oversized requests behave like the cap
    #[test]
    fn concurrency_above_cap_behaves_like_cap(lines in arb_lines(40), files in 1usize..12) {
        let sources = split_sources(&lines, files);
        let config = FilterConfig::new().with_message("o");
        prop_assert_eq!(Concurrency::new(50).workers(), 10);
        prop_assert_eq!(run(&sources, &config, 50), run(&sources, &config, 10));
    }

    // ============================================
    // ROBUSTNESS PROPERTIES
    // ============================================

    /// Parsing arbitrary text never panics
    #[test]
    fn parse_never_panics(text in ".{0,80}") {
        let _ = parse_line(&text);
    }
}
