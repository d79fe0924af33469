//! Core dispatcher types and traits

pub mod dispatcher;
pub mod error;
pub mod log_level;
pub mod message_buffer;
pub mod metrics;
pub mod output_handler;
pub mod settings;

pub use dispatcher::{OutputDispatcher, SilenceGuard};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use message_buffer::{MessageBuffer, MAX_BUFFER_SIZE, MAX_MESSAGE_LEN, MAX_PREFIX_LEN};
pub use metrics::DispatchMetrics;
pub use output_handler::OutputHandler;
pub use settings::ConsoleSettings;
