//! Tests for forwarding `log` facade records into the dispatcher
//!
//! Kept in its own binary: the `log` facade accepts exactly one logger per
//! process.

#![cfg(feature = "log-bridge")]

use rust_console_logger::prelude::*;
use rust_console_logger::{install_log_bridge, LoggerError};
use std::sync::Arc;

#[test]
fn test_log_facade_records_reach_active_handler() {
    install_log_bridge().expect("first install succeeds");
    assert!(matches!(
        install_log_bridge(),
        Err(LoggerError::LoggerAlreadySet)
    ));

    let buffer = Arc::new(BufferOutputHandler::new());
    use_output_handler(Some(buffer.clone()));
    set_log_level(LogLevel::Info);

    log::trace!("trace folds into debug and is filtered");
    log::info!("connected to {}", "localhost");
    log::warn!("slow response");
    log::error!("request failed");

    set_show_line_numbers(true);
    log::error!("annotated");
    set_show_line_numbers(false);

    restore_previous();
    set_log_level(LogLevel::Debug);

    let records = buffer.records();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], (LogLevel::Info, "connected to localhost".to_string()));
    assert_eq!(records[1], (LogLevel::Warn, "slow response".to_string()));
    assert_eq!(records[2], (LogLevel::Error, "request failed".to_string()));
    assert!(records[3].1.starts_with("line "));
    assert!(records[3].1.ends_with(" in log_bridge_tests.rs: annotated"));
}
