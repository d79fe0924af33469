//! In-memory output handler

use crate::core::{LogLevel, OutputHandler};
use parking_lot::Mutex;

/// Records every message it receives together with the level it arrived on.
///
/// # Example
///
/// ```
/// use rust_console_logger::{BufferOutputHandler, LogLevel, OutputDispatcher};
/// use std::sync::Arc;
///
/// let buffer = Arc::new(BufferOutputHandler::new());
/// let dispatcher = OutputDispatcher::with_output_handler(Some(buffer.clone()));
///
/// dispatcher.log(file!(), line!(), LogLevel::Warn, format_args!("disk at {}%", 91));
/// assert_eq!(buffer.records(), vec![(LogLevel::Warn, "disk at 91%".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct BufferOutputHandler {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl BufferOutputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|(_, text)| text.clone()).collect()
    }

    /// Messages that arrived on `level`'s operation.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<(LogLevel, String)> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn push(&self, level: LogLevel, text: &str) {
        self.records.lock().push((level, text.to_string()));
    }
}

impl OutputHandler for BufferOutputHandler {
    fn error(&self, text: &str) {
        self.push(LogLevel::Error, text);
    }

    fn warn(&self, text: &str) {
        self.push(LogLevel::Warn, text);
    }

    fn inform(&self, text: &str) {
        self.push(LogLevel::Info, text);
    }

    fn debug(&self, text: &str) {
        self.push(LogLevel::Debug, text);
    }

    fn name(&self) -> &str {
        "buffer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_operation_level() {
        let buffer = BufferOutputHandler::new();
        buffer.inform("a");
        buffer.error("b");
        buffer.write_level(LogLevel::None, "c");

        assert_eq!(buffer.messages_at(LogLevel::Error), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.messages_at(LogLevel::Info), vec!["a".to_string()]);
    }

    #[test]
    fn test_take_empties_buffer() {
        let buffer = BufferOutputHandler::new();
        buffer.debug("x");
        assert_eq!(buffer.take(), vec![(LogLevel::Debug, "x".to_string())]);
        assert!(buffer.is_empty());
    }
}
