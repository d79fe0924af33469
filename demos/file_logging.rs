//! File logging example
//!
//! Demonstrates swapping the active handler to a file and back.
//!
//! Run with: cargo run --example file_logging

use rust_console_logger::prelude::*;
use rust_console_logger::{inform, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Console Logger - File Logging Example ===\n");

    let handler = Arc::new(FileOutputHandler::try_new("application.log")?);

    inform!("Switching output to application.log");
    use_output_handler(Some(handler));

    for i in 1..=5 {
        inform!("Processing item {}/5", i);
        if i == 3 {
            warn!("Item 3 took longer than expected");
        }
    }

    restore_previous();
    inform!("Back on the standard streams");

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the file output");

    Ok(())
}
