#![cfg(feature = "std")]

//! Minimal `log` backend for the binaries.
//!
//! Records go to stderr. The `sim` binary prints its JSON summary on stdout,
//! which has to stay machine-readable at any log level.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SWEEPER_LOG";

/// Level filter named by `value`, falling back to `info` when it is missing
/// or not a level name.
fn level_filter(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level read from [`LOG_ENV`].
///
/// Calling it again is a no-op.
pub fn init_logging() {
    let level = level_filter(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
