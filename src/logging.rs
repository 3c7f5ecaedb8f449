#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`error`..`trace`, or `off`).
pub const LOG_ENV: &str = "SHIPGAME_LOG";

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

/// Parse a level name, falling back to `info` for missing or invalid input.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level taken from `SHIPGAME_LOG`.
/// Later calls keep the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
