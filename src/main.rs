//! # log-analyzer CLI
//!
//! Command-line interface for the log-analyzer library.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser as ClapParser;
use tracing::info;

use log_analyzer::LogAnalyzerError;
use log_analyzer::analyzer::LogAnalyzer;
use log_analyzer::cli::Args;
use log_analyzer::core::output::resolve_output_path;
use log_analyzer::logging::init_logging;
use log_analyzer::progress::tracing_progress;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), LogAnalyzerError> {
    // Configuration problems are reported before the directory is touched.
    let analyzer = LogAnalyzer::new(args.to_config()?)?.with_progress(tracing_progress());

    let output_path = resolve_output_path(&args.directory, &args.output);
    let inputs = list_input_files(&args.directory, &output_path)?;

    println!("log-analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:   {} ({} files)", args.directory.display(), inputs.len());
    println!("Output:  {}", output_path.display());
    println!("Workers: {}", analyzer.config().concurrency.workers());
    println!();

    let report = analyzer.run_files(&inputs)?;

    for failure in &report.distribution.failures {
        eprintln!("Skipped: {failure}");
    }

    report.write_to(&output_path)?;
    info!(path = %output_path.display(), lines = report.lines.len(), "output written");

    println!("Matched: {} records", report.statistics.records);
    if let Some(count) = report.statistics.grouping_count() {
        println!("User:    {count}");
    }
    if let Some(count) = report.statistics.time_unit_count() {
        println!("Time:    {count}");
    }
    if !report.distribution.is_clean() {
        println!(
            "Failed:  {} of {} files",
            report.distribution.failures.len(),
            report.distribution.files
        );
    }
    println!("Done in {:.2}s", report.elapsed.as_secs_f64());

    Ok(())
}

/// Regular files directly inside `dir`, sorted, excluding the output file.
///
/// Symlinks are followed; dangling links are skipped.
fn list_input_files(dir: &Path, output: &Path) -> Result<Vec<PathBuf>, LogAnalyzerError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if is_same_file(&path, output) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
