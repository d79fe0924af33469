//! Standard stream output handler

use super::write_line;
use crate::core::{LogLevel, OutputHandler};
#[cfg(feature = "console")]
use colored::Colorize;
use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

static STD_OUTPUT_HANDLER: OnceLock<Arc<StdOutputHandler>> = OnceLock::new();

/// The shared standard-stream handler, created on first use.
///
/// This is the handler the global dispatcher starts with and the fallback
/// that [`FileOutputHandler`](super::FileOutputHandler) reports its own
/// failures to.
pub fn std_output_handler() -> Arc<StdOutputHandler> {
    Arc::clone(STD_OUTPUT_HANDLER.get_or_init(|| Arc::new(StdOutputHandler::new())))
}

/// Writes errors and warnings to stderr, info and debug to stdout.
///
/// Each message is prefixed with its level (`"Error:   "`, `"Warning: "`,
/// `"Info:    "`, `"Debug:   "`) and flushed immediately. Write failures are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct StdOutputHandler {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl StdOutputHandler {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colour the level prefix with ANSI escapes
    ///
    /// # Example
    ///
    /// ```
    /// use rust_console_logger::StdOutputHandler;
    ///
    /// let handler = StdOutputHandler::new().with_colors(true);
    /// ```
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn prefix(&self, level: LogLevel) -> Cow<'static, str> {
        if self.use_colors {
            Cow::Owned(level.prefix().color(level.color_code()).to_string())
        } else {
            Cow::Borrowed(level.prefix())
        }
    }

    #[cfg(not(feature = "console"))]
    fn prefix(&self, level: LogLevel) -> Cow<'static, str> {
        Cow::Borrowed(level.prefix())
    }

    /// Write one line to the stream `level` belongs on. Only that stream is
    /// opened.
    fn emit<E, O>(
        &self,
        level: LogLevel,
        text: &str,
        stderr: impl FnOnce() -> E,
        stdout: impl FnOnce() -> O,
    ) -> io::Result<()>
    where
        E: Write,
        O: Write,
    {
        let prefix = self.prefix(level);
        match level {
            LogLevel::Error | LogLevel::Warn | LogLevel::None => {
                write_line(&mut stderr(), &prefix, text)
            }
            LogLevel::Info | LogLevel::Debug => write_line(&mut stdout(), &prefix, text),
        }
    }

    fn write(&self, level: LogLevel, text: &str) {
        let _ = self.emit(level, text, || io::stderr().lock(), || io::stdout().lock());
    }
}

impl OutputHandler for StdOutputHandler {
    fn error(&self, text: &str) {
        self.write(LogLevel::Error, text);
    }

    fn warn(&self, text: &str) {
        self.write(LogLevel::Warn, text);
    }

    fn inform(&self, text: &str) {
        self.write(LogLevel::Info, text);
    }

    fn debug(&self, text: &str) {
        self.write(LogLevel::Debug, text);
    }

    fn name(&self) -> &str {
        "std"
    }
}
