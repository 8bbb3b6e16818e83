//! Fragment fetch configuration.

use serde::{Deserialize, Serialize};

/// Timeouts for remote fragment fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (valid range: 1-120).
    pub request_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn fetch_config_partial_toml() {
        let toml_str = r#"
request_timeout_secs = 60
"#;
        let config: FetchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.connect_timeout_secs, 10);
    }
}
