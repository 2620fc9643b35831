//! Logging initialization for the binary.

use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Installs a stderr `tracing` subscriber at the given level.
///
/// Logs go to stderr so stdout remains clean for the run summary. If a global
/// subscriber is already installed it is left in place.
pub fn init_logging(level: LogLevel) {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if subscriber.try_init().is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
