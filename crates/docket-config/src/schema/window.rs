//! Window configuration.

use serde::{Deserialize, Serialize};

/// Host window appearance.
///
/// The default size matches the portrait phone viewport the mini app is
/// designed for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (valid range: 200-4000).
    pub width: f64,
    /// Logical height in pixels (valid range: 200-4000).
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Docket".into(),
            width: 420.0,
            height: 760.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Docket");
        assert!((config.width - 420.0).abs() < f64::EPSILON);
        assert!((config.height - 760.0).abs() < f64::EPSILON);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Docket Dev"
width = 1024.0
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Docket Dev");
        assert!((config.width - 1024.0).abs() < f64::EPSILON);
        // Default preserved
        assert!((config.height - 760.0).abs() < f64::EPSILON);
    }
}
