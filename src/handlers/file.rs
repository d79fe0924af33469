//! File output handler

use super::{std_output_handler, write_line};
use crate::core::{LogLevel, LoggerError, OutputHandler, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends every message to a file, flushing after each one.
///
/// Construction never fails. If the file cannot be opened the failure is
/// reported once on the fallback handler's error operation and the handler
/// silently drops everything it is given. Closing happens on drop; a failure
/// there is reported the same way.
pub struct FileOutputHandler {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
    fallback: Arc<dyn OutputHandler>,
}

impl FileOutputHandler {
    /// Open `path` for appending, reporting failures to the standard streams.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_console_logger::{use_output_handler, FileOutputHandler};
    /// use std::sync::Arc;
    ///
    /// let handler = Arc::new(FileOutputHandler::new("/var/log/planner.log"));
    /// use_output_handler(Some(handler));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fallback(path, std_output_handler())
    }

    /// Open `path` for appending, reporting failures to `fallback`.
    pub fn with_fallback(path: impl Into<PathBuf>, fallback: Arc<dyn OutputHandler>) -> Self {
        let path = path.into();
        let writer = match Self::open(&path) {
            Ok(writer) => Some(writer),
            Err(_) => {
                fallback.error(&format!("Unable to open log file: '{}'", path.display()));
                None
            }
        };

        Self {
            path,
            writer: Mutex::new(writer),
            fallback,
        }
    }

    /// Open `path` for appending, returning the failure instead of degrading.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let writer = Self::open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(Some(writer)),
            fallback: std_output_handler(),
        })
    }

    fn open(path: &Path) -> Result<BufWriter<File>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;
        Ok(BufWriter::new(file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a file is held; `false` means every message is dropped.
    pub fn is_open(&self) -> bool {
        self.writer.lock().is_some()
    }

    fn write(&self, level: LogLevel, text: &str) {
        if let Some(writer) = self.writer.lock().as_mut() {
            let _ = write_line(writer, level.prefix(), text);
        }
    }
}

impl OutputHandler for FileOutputHandler {
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
        "file"
    }
}

impl Drop for FileOutputHandler {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.get_mut().take() {
            if writer.into_inner().is_err() {
                self.fallback.error("Error closing logfile");
            }
        }
    }
}

impl std::fmt::Debug for FileOutputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileOutputHandler")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish()
    }
}
