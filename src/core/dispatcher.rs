//! Output dispatcher: the single point every message flows through
//!
//! The dispatcher holds the active output handler, the handler that was
//! active before it, the minimum level and the line-number toggle. One mutex
//! guards all of it, and the handler call itself runs under that mutex, so
//! messages from concurrent threads are written in a total order and never
//! interleave. A slow handler stalls every other caller; that is the price of
//! ordered output.
//!
//! Only one level of history is kept. `disable_output` followed by another
//! `disable_output` loses the handler that was active before the first one.

use super::{
    log_level::LogLevel, message_buffer::MessageBuffer, metrics::DispatchMetrics,
    output_handler::OutputHandler, settings::ConsoleSettings,
};
use crate::handlers::std_output_handler;
use parking_lot::Mutex;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

struct DispatchState {
    output_handler: Option<Arc<dyn OutputHandler>>,
    previous_output_handler: Option<Arc<dyn OutputHandler>>,
    log_level: LogLevel,
    show_line_numbers: bool,
}

/// Handler selection, level filtering and serialized dispatch.
///
/// Most code uses the process-wide instance through the free functions of
/// this module (or the logging macros). Separate instances are useful when a
/// component wants its own isolated output channel.
pub struct OutputDispatcher {
    state: Mutex<DispatchState>,
    metrics: DispatchMetrics,
}

static GLOBAL_DISPATCHER: OnceLock<OutputDispatcher> = OnceLock::new();

impl OutputDispatcher {
    /// Dispatcher writing to the shared standard-stream handler, emitting
    /// every level, without line numbers.
    #[must_use]
    pub fn new() -> Self {
        let handler: Arc<dyn OutputHandler> = std_output_handler();
        Self::with_output_handler(Some(handler))
    }

    /// Dispatcher starting with `handler` in both the active and previous slot.
    #[must_use]
    pub fn with_output_handler(handler: Option<Arc<dyn OutputHandler>>) -> Self {
        Self {
            state: Mutex::new(DispatchState {
                previous_output_handler: handler.clone(),
                output_handler: handler,
                log_level: LogLevel::Debug,
                show_line_numbers: false,
            }),
            metrics: DispatchMetrics::new(),
        }
    }

    /// The process-wide dispatcher, created on first use.
    pub fn global() -> &'static OutputDispatcher {
        GLOBAL_DISPATCHER.get_or_init(OutputDispatcher::new)
    }

    /// Stop all output until a handler is restored or installed.
    pub fn disable_output(&self) {
        let mut state = self.state.lock();
        state.previous_output_handler = state.output_handler.take();
    }

    /// Swap the active and previous handlers.
    ///
    /// Calling this twice in a row returns to where it started.
    pub fn restore_previous(&self) {
        let mut state = self.state.lock();
        let state = &mut *state;
        std::mem::swap(&mut state.output_handler, &mut state.previous_output_handler);
    }

    /// Install `handler`, remembering the current one as previous.
    ///
    /// `None` behaves like [`disable_output`](Self::disable_output).
    pub fn use_output_handler(&self, handler: Option<Arc<dyn OutputHandler>>) {
        let mut state = self.state.lock();
        state.previous_output_handler = std::mem::replace(&mut state.output_handler, handler);
    }

    pub fn output_handler(&self) -> Option<Arc<dyn OutputHandler>> {
        self.state.lock().output_handler.clone()
    }

    pub fn previous_output_handler(&self) -> Option<Arc<dyn OutputHandler>> {
        self.state.lock().previous_output_handler.clone()
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.state.lock().log_level = level;
    }

    pub fn log_level(&self) -> LogLevel {
        self.state.lock().log_level
    }

    /// Prefix messages with `line <N> in <file>: `.
    pub fn set_show_line_numbers(&self, show: bool) {
        self.state.lock().show_line_numbers = show;
    }

    pub fn show_line_numbers(&self) -> bool {
        self.state.lock().show_line_numbers
    }

    pub fn settings(&self) -> ConsoleSettings {
        let state = self.state.lock();
        ConsoleSettings {
            log_level: state.log_level,
            show_line_numbers: state.show_line_numbers,
        }
    }

    /// Apply level and line-number settings in one step.
    pub fn apply_settings(&self, settings: &ConsoleSettings) {
        let mut state = self.state.lock();
        state.log_level = settings.log_level;
        state.show_line_numbers = settings.show_line_numbers;
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Disable output until the returned guard is dropped.
    #[must_use = "output is restored as soon as the guard is dropped"]
    pub fn silence(&self) -> SilenceGuard<'_> {
        self.disable_output();
        SilenceGuard { dispatcher: self }
    }

    /// Filter, format and hand a message to the active handler.
    ///
    /// Nothing is formatted when the message is filtered out or no handler
    /// is installed. This never fails from the caller's point of view.
    pub fn log(&self, file: &str, line: u32, level: LogLevel, args: fmt::Arguments<'_>) {
        let state = self.state.lock();

        let Some(handler) = state.output_handler.as_ref() else {
            self.metrics.record_discarded();
            return;
        };
        if level < state.log_level {
            self.metrics.record_filtered();
            return;
        }

        let message = if state.show_line_numbers {
            MessageBuffer::render_prefixed(
                format_args!("line {} in {}: ", line, file_name(file)),
                args,
            )
        } else {
            MessageBuffer::render(args)
        };
        if message.is_truncated() {
            self.metrics.record_truncated();
        }

        handler.write_level(level.effective(), message.as_str());
        self.metrics.record_delivered();
    }
}

impl Default for OutputDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OutputDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("OutputDispatcher")
            .field("output_handler", &state.output_handler.as_ref().map(|h| h.name().to_string()))
            .field(
                "previous_output_handler",
                &state.previous_output_handler.as_ref().map(|h| h.name().to_string()),
            )
            .field("log_level", &state.log_level)
            .field("show_line_numbers", &state.show_line_numbers)
            .finish()
    }
}

/// RAII guard returned by [`OutputDispatcher::silence`]
///
/// Restores the previous handler when dropped. Installing or disabling
/// handlers while the guard is alive overwrites the single history slot, so
/// the restore then brings back whatever was active just before that change.
pub struct SilenceGuard<'a> {
    dispatcher: &'a OutputDispatcher,
}

impl Drop for SilenceGuard<'_> {
    fn drop(&mut self) {
        self.dispatcher.restore_previous();
    }
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

pub fn disable_output() {
    OutputDispatcher::global().disable_output();
}

pub fn restore_previous() {
    OutputDispatcher::global().restore_previous();
}

pub fn use_output_handler(handler: Option<Arc<dyn OutputHandler>>) {
    OutputDispatcher::global().use_output_handler(handler);
}

pub fn output_handler() -> Option<Arc<dyn OutputHandler>> {
    OutputDispatcher::global().output_handler()
}

pub fn set_log_level(level: LogLevel) {
    OutputDispatcher::global().set_log_level(level);
}

pub fn log_level() -> LogLevel {
    OutputDispatcher::global().log_level()
}

pub fn set_show_line_numbers(show: bool) {
    OutputDispatcher::global().set_show_line_numbers(show);
}

pub fn show_line_numbers() -> bool {
    OutputDispatcher::global().show_line_numbers()
}

pub fn silence() -> SilenceGuard<'static> {
    OutputDispatcher::global().silence()
}

pub fn metrics() -> &'static DispatchMetrics {
    OutputDispatcher::global().metrics()
}

/// Emit through the process-wide dispatcher. Usually reached via the
/// [`error!`](crate::error), [`warn!`](crate::warn), [`inform!`](crate::inform)
/// and [`debug!`](crate::debug) macros.
pub fn log(file: &str, line: u32, level: LogLevel, args: fmt::Arguments<'_>) {
    OutputDispatcher::global().log(file, line, level, args);
}
