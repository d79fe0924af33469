//! Logging macros for the process-wide dispatcher.
//!
//! Each macro records the calling file and line and formats its arguments
//! like `format!`. Arguments are only rendered when the message passes the
//! level filter and an output handler is installed.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::{debug, error, inform, warn};
//!
//! inform!("Planner started");
//!
//! let states = 512;
//! debug!("Created {} states", states);
//! warn!("Goal region is {}", "empty");
//! error!("Unable to find a solution after {:.1} seconds", 2.5);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// use rust_console_logger::{log, LogLevel};
/// log!(LogLevel::Info, "Simple message");
/// log!(LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::core::dispatcher::log(
            ::core::file!(),
            ::core::line!(),
            $level,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Log a debug-level message.
///
/// ```
/// use rust_console_logger::debug;
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// use rust_console_logger::inform;
/// inform!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! inform {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// use rust_console_logger::warn;
/// warn!("Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// use rust_console_logger::error;
/// error!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}
