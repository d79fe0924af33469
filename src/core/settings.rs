//! Serializable dispatcher configuration

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Threshold and annotation settings of a dispatcher.
///
/// The crate never reads configuration on its own; a host program can embed
/// this struct in its own config and hand it to
/// [`OutputDispatcher::apply_settings`](crate::OutputDispatcher::apply_settings).
///
/// # Example
///
/// ```
/// use rust_console_logger::{ConsoleSettings, LogLevel};
///
/// let settings = ConsoleSettings::from_json(r#"{"log_level": "warn"}"#).unwrap();
/// assert_eq!(settings.log_level, LogLevel::Warn);
/// assert!(!settings.show_line_numbers);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    #[serde(deserialize_with = "deserialize_level")]
    pub log_level: LogLevel,
    pub show_line_numbers: bool,
}

impl ConsoleSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Debug,
            show_line_numbers: false,
        }
    }
}

/// Accept level names in any case, as `FromStr` does.
fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}
