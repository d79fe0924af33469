//! # Rust Console Logger
//!
//! A process-wide logging facility. Every message goes through one
//! dispatcher that filters by severity and hands the text to a single,
//! swappable output handler.
//!
//! ## Features
//!
//! - **Works before setup**: the dispatcher is created on first use and
//!   writes to stdout/stderr until told otherwise
//! - **Swappable handlers**: install, disable and restore the active handler
//!   at runtime
//! - **Ordered output**: one lock serializes every handler call, so messages
//!   from concurrent threads never interleave
//! - **Bounded formatting**: messages are rendered into a fixed buffer and
//!   truncated rather than grown
//!
//! ## Example
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::{inform, warn};
//! use std::sync::Arc;
//!
//! let buffer = Arc::new(BufferOutputHandler::new());
//! use_output_handler(Some(buffer.clone()));
//! set_log_level(LogLevel::Info);
//!
//! inform!("Solution found in {} iterations", 120);
//! warn!("Path is not optimal");
//!
//! restore_previous();
//! set_log_level(LogLevel::Debug);
//! assert_eq!(buffer.len(), 2);
//! ```

pub mod core;
pub mod handlers;
#[cfg(feature = "log-bridge")]
pub mod log_bridge;
pub mod macros;

pub mod prelude {
    pub use crate::core::dispatcher::{
        disable_output, log_level, output_handler, restore_previous, set_log_level,
        set_show_line_numbers, show_line_numbers, silence, use_output_handler,
    };
    pub use crate::core::{
        ConsoleSettings, DispatchMetrics, LogLevel, LoggerError, OutputDispatcher, OutputHandler,
        Result, SilenceGuard,
    };
    pub use crate::handlers::{
        std_output_handler, BufferOutputHandler, FileOutputHandler, StdOutputHandler,
    };
}

pub use crate::core::dispatcher::{
    disable_output, log, log_level, metrics, output_handler, restore_previous, set_log_level,
    set_show_line_numbers, show_line_numbers, silence, use_output_handler,
};
pub use crate::core::{
    ConsoleSettings, DispatchMetrics, LogLevel, LoggerError, MessageBuffer, OutputDispatcher,
    OutputHandler, Result, SilenceGuard, MAX_BUFFER_SIZE, MAX_MESSAGE_LEN, MAX_PREFIX_LEN,
};
pub use handlers::{std_output_handler, BufferOutputHandler, FileOutputHandler, StdOutputHandler};
#[cfg(feature = "log-bridge")]
pub use log_bridge::install_log_bridge;
