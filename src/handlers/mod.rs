//! Output handler implementations

pub mod buffer;
pub mod file;
pub mod std_stream;

pub use buffer::BufferOutputHandler;
pub use file::FileOutputHandler;
pub use std_stream::{std_output_handler, StdOutputHandler};

pub use crate::core::OutputHandler;

use std::io::{self, Write};

/// Write `prefix`, `text` and a newline as one write, then flush.
pub(crate) fn write_line<W: Write>(writer: &mut W, prefix: &str, text: &str) -> io::Result<()> {
    let mut line = String::with_capacity(prefix.len() + text.len() + 1);
    line.push_str(prefix);
    line.push_str(text);
    line.push('\n');
    writer.write_all(line.as_bytes())?;
    writer.flush()
}
