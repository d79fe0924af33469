//! Forwarding from the `log` facade
//!
//! Libraries that log through the `log` crate can be routed into the
//! process-wide dispatcher, so their output obeys the same threshold and
//! handler selection as everything else.

use crate::core::{dispatcher, LogLevel, LoggerError, OutputDispatcher, Result};

struct LogBridge;

static LOG_BRIDGE: LogBridge = LogBridge;

/// Map a `log` level onto the dispatcher's levels. `Trace` folds into `Debug`.
pub fn map_level(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::Error,
        log::Level::Warn => LogLevel::Warn,
        log::Level::Info => LogLevel::Info,
        log::Level::Debug | log::Level::Trace => LogLevel::Debug,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        map_level(metadata.level()) >= OutputDispatcher::global().log_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        dispatcher::log(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            map_level(record.level()),
            *record.args(),
        );
    }

    fn flush(&self) {}
}

/// Install the bridge as the `log` crate's logger.
///
/// Fails if some other logger was installed first.
pub fn install_log_bridge() -> Result<()> {
    log::set_logger(&LOG_BRIDGE).map_err(|_| LoggerError::LoggerAlreadySet)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
