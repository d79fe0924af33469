//! Basic usage example
//!
//! Demonstrates the default standard-stream output, level filtering,
//! line-number annotation and temporarily silencing output.
//!
//! Run with: cargo run --example basic_usage

use rust_console_logger::prelude::*;
use rust_console_logger::{debug, error, inform, warn};

fn main() {
    println!("=== Rust Console Logger - Basic Usage Example ===\n");

    println!("1. Logging at every level (default handler, DEBUG threshold):");
    debug!("Sampling {} states", 1000);
    inform!("Planner initialized");
    warn!("Goal tolerance {} is very small", 1e-6);
    error!("Unable to connect start and goal");

    println!("\n2. Raising the threshold to WARN:");
    set_log_level(LogLevel::Warn);
    debug!("Debug message (hidden)");
    inform!("Info message (hidden)");
    warn!("Warning message (visible)");
    set_log_level(LogLevel::Debug);

    println!("\n3. With line numbers:");
    set_show_line_numbers(true);
    inform!("This message carries its call site");
    set_show_line_numbers(false);

    println!("\n4. Silencing output for a scope:");
    {
        let _quiet = silence();
        error!("Nobody sees this");
    }
    inform!("Output restored");

    println!("\n=== Example completed successfully! ===");
}
