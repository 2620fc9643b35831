use std::io;

use tracing::trace;

use super::filter::{FilterConfig, apply_filters};
use crate::error::{LogAnalyzerError, Result};
use crate::record::{LogRecord, parse_line};

/// Parses every line of one file and keeps the records that pass `filter`.
///
/// Lines are parsed in order; blank lines are skipped. The first malformed
/// line, bad timestamp or read error aborts the whole file and is returned
/// with its 1-based line number, so a file contributes either all of its
/// matching records or nothing.
///
/// # Example
///
/// ```
/// use log_analyzer::core::filter::FilterConfig;
/// use log_analyzer::core::processor::process_lines;
///
/// let lines = vec![
///     Ok("alice,01.01.2020 at 10:00:00,hello".to_string()),
///     Ok("bob,01.01.2020 at 11:00:00,world".to_string()),
/// ];
/// let kept = process_lines(lines, &FilterConfig::new().with_actor("alice"))?;
/// assert_eq!(kept.len(), 1);
/// # Ok::<(), log_analyzer::LogAnalyzerError>(())
/// ```
pub fn process_lines<I>(lines: I, filter: &FilterConfig) -> Result<Vec<LogRecord>>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut records = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        let line = line.map_err(LogAnalyzerError::from)?;

        if line.trim_end_matches('\r').is_empty() {
            trace!(line = number, "skipping blank line");
            continue;
        }

        records.push(parse_line(&line).map_err(|e| e.at_line(number))?);
    }

    Ok(apply_filters(records, filter))
}
