//! Example: Using log-analyzer as a library
//!
//! This example demonstrates how to use log-analyzer in your own projects.
//!
//! Run with: cargo run --example library_usage

use log_analyzer::core::{ResultSet, aggregate, distribute, to_text};
use log_analyzer::prelude::*;
use log_analyzer::record::parse_line;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== log-analyzer Library Usage Examples ===\n");

    // Example 1: Parse individual lines
    println!("1. Parsing log lines:");
    let record = parse_line("alice,23.05.2015 at 22:39:28,deployed build 42, all green")?;
    println!("   Actor: {}", record.actor());
    println!("   Timestamp: {}", record.timestamp());
    println!("   Message: {}", record.message());

    match parse_line("alice,yesterday,oops") {
        Ok(_) => println!("   (unexpectedly parsed)"),
        Err(e) => println!("   Rejected: {e}"),
    }

    // Example 2: Filter records in memory
    println!("\n2. Filtering by user and time window:");
    let records = vec![
        parse_line("alice,01.01.2020 at 10:00:00,login")?,
        parse_line("bob,01.01.2020 at 11:00:00,login")?,
        parse_line("alice,01.01.2020 at 12:00:00,logout")?,
    ];

    let filter = FilterConfig::new()
        .with_actor("alice")
        .with_period("01.01.2020 at 10:00:00-01.01.2020 at 13:00:00")?;
    for record in apply_filters(records, &filter) {
        println!("   {record}");
    }
    println!("   (10:00:00 is excluded: both window ends are exclusive)");

    // Example 3: Time-unit specs
    println!("\n3. Time-unit matching:");
    let spec: TimeUnitSpec = "10 hour".parse()?;
    let sample = parse_line("carol,02.01.2020 at 10:45:00,coffee")?;
    println!("   '{}' matches {spec}: {}", sample, spec.matches(sample.timestamp()));

    // Example 4: Full pipeline over several sources on a worker pool
    println!("\n4. Running the analyzer on 3 sources with 4 workers:");
    let sources = vec![
        MemorySource::new(
            "web-1.log",
            [
                "alice,01.01.2020 at 10:00:00,GET /index",
                "bob,01.01.2020 at 10:05:00,GET /admin",
            ],
        ),
        MemorySource::new("web-2.log", ["carol,01.01.2020 at 10:10:00,alice asked for help"]),
        MemorySource::new("web-3.log", ["alice,01.01.2020 at 11:00:00,POST /upload"]),
    ];

    let config = AnalyzerConfig::new(
        FilterConfig::new().with_message("/"),
        StatsRequest::new()
            .with_grouping_actor("alice")
            .with_time_unit_str("10 hour")?,
    )
    .with_concurrency(Concurrency::new(4));

    let report = LogAnalyzer::new(config)?.run(&sources)?;
    print!("{}", to_text(&report.lines));
    println!("   Files: {}, failed: {}", report.distribution.files, report.distribution.failures.len());

    // Example 5: Lower-level building blocks
    println!("\n5. Distribute and aggregate by hand:");
    let results = ResultSet::new();
    let filter = FilterConfig::new().with_actor("bob");
    let distribution = distribute(
        &sources,
        &filter,
        Concurrency::SEQUENTIAL,
        &results,
        &log_analyzer::progress::no_progress(),
    )?;
    let output = aggregate(results.into_records(), &StatsRequest::plain().resolve()?);
    println!(
        "   {} of {} files succeeded, {} records",
        distribution.succeeded(),
        distribution.files,
        output.statistics.records
    );

    // Example 6: Configuration errors surface before any input is read
    println!("\n6. Configuration errors:");
    let empty = AnalyzerConfig::new(FilterConfig::new(), StatsRequest::plain());
    if let Err(e) = LogAnalyzer::new(empty) {
        println!("   {e}");
    }

    println!("\n=== Done ===");
    Ok(())
}
