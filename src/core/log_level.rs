//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a message, ordered `Debug < Info < Warn < Error < None`.
///
/// `None` is a threshold sentinel: setting it as the minimum level suppresses
/// every message. Used as a message's own level it is dispatched as `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    None = 4,
}

impl LogLevel {
    /// Every level, lowest first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::None,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
        }
    }

    /// Fixed-width prefix written by the stream and file handlers.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug:   ",
            LogLevel::Info => "Info:    ",
            LogLevel::Warn => "Warning: ",
            LogLevel::Error | LogLevel::None => "Error:   ",
        }
    }

    /// Level a message is routed as. `None` is never a real message level.
    #[inline]
    pub fn effective(self) -> LogLevel {
        match self {
            LogLevel::None => LogLevel::Error,
            level => level,
        }
    }

    /// Map a raw discriminant back to a level; out-of-range values are
    /// treated as `Error`.
    pub fn from_u8(value: u8) -> LogLevel {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            4 => LogLevel::None,
            _ => LogLevel::Error,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error | LogLevel::None => Red,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "NONE" | "OFF" => Ok(LogLevel::None),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::None);
    }

    #[test]
    fn test_prefixes_share_width() {
        for level in LogLevel::ALL {
            assert_eq!(level.prefix().len(), 9, "prefix for {}", level);
        }
        assert_eq!(LogLevel::Warn.prefix(), "Warning: ");
        assert_eq!(LogLevel::None.prefix(), LogLevel::Error.prefix());
    }

    #[test]
    fn test_none_routes_as_error() {
        assert_eq!(LogLevel::None.effective(), LogLevel::Error);
        assert_eq!(LogLevel::Info.effective(), LogLevel::Info);
    }

    #[test]
    fn test_from_u8_out_of_range() {
        assert_eq!(LogLevel::from_u8(1), LogLevel::Info);
        assert_eq!(LogLevel::from_u8(4), LogLevel::None);
        assert_eq!(LogLevel::from_u8(17), LogLevel::Error);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!(" none ".parse::<LogLevel>().ok(), Some(LogLevel::None));

        let err = "fatal".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref name) if name == "fatal"));
        assert_eq!(err.to_string(), "Invalid log level: 'fatal'");
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"WARN\"");
        let level: LogLevel = serde_json::from_str("\"NONE\"").unwrap();
        assert_eq!(level, LogLevel::None);
    }
}
