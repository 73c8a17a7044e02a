use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "HE_BATTLESHIP_LOG";

/// Install the stderr logger with a level taken from `HE_BATTLESHIP_LOG`.
/// Defaults to `info` if the variable is not set or invalid.
/// Calling it again is a no-op.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(LevelFilter::Info)
}
