//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Tracing filter directive for the docket crates at this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "docket=debug",
            LogLevel::Info => "docket=info",
            LogLevel::Warning => "docket=warn",
            LogLevel::Error => "docket=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
    }

    #[test]
    fn log_level_serializes_uppercase() {
        let json = serde_json::to_string(&LogLevel::Debug).unwrap();
        assert_eq!(json, "\"DEBUG\"");
        let parsed: LogLevel = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(parsed, LogLevel::Warning);
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Debug.directive(), "docket=debug");
        assert_eq!(LogLevel::Info.directive(), "docket=info");
        assert_eq!(LogLevel::Warning.directive(), "docket=warn");
        assert_eq!(LogLevel::Error.directive(), "docket=error");
    }
}
