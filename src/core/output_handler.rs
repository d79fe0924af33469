//! Output handler trait for log destinations

use super::log_level::LogLevel;

/// Destination for formatted log text.
///
/// Handlers are shared as `Arc<dyn OutputHandler>` and are invoked while the
/// dispatcher lock is held, so every call is serialized with every other
/// dispatcher operation. A handler must not log through the dispatcher
/// itself; doing so deadlocks.
pub trait OutputHandler: Send + Sync {
    fn error(&self, text: &str);
    fn warn(&self, text: &str);
    fn inform(&self, text: &str);
    fn debug(&self, text: &str);

    fn name(&self) -> &str {
        "custom"
    }

    /// Route `text` to the operation matching `level`.
    fn write_level(&self, level: LogLevel, text: &str) {
        match level {
            LogLevel::Debug => self.debug(text),
            LogLevel::Info => self.inform(text),
            LogLevel::Warn => self.warn(text),
            LogLevel::Error | LogLevel::None => self.error(text),
        }
    }
}
