//! Configuration schema types for Docket.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

mod fetch;
mod gestures;
mod logging;
mod persistence;
mod routes;
mod theme;
mod window;

pub use fetch::*;
pub use gestures::*;
pub use logging::*;
pub use persistence::*;
pub use routes::*;
pub use theme::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Docket.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DocketConfig {
    pub theme: ThemeConfig,
    pub routes: RoutesConfig,
    pub gestures: GestureConfig,
    pub persistence: PersistenceConfig,
    pub window: WindowConfig,
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use docket_common::PageKey;

    #[test]
    fn default_config_has_correct_theme() {
        let config = DocketConfig::default();
        assert_eq!(config.theme.background, "#18222d");
        assert_eq!(config.theme.foreground, "#f5f5f5");
        assert_eq!(config.theme.muted, "#708499");
        assert_eq!(config.theme.accent, "#6ab2f2");
        assert!((config.theme.surface_shade - 0.08).abs() < f64::EPSILON);
        assert!((config.theme.divider_shade - 0.12).abs() < f64::EPSILON);
        assert!((config.theme.control_shade - 0.16).abs() < f64::EPSILON);
        assert!(config.theme.sync_host_colors);
    }

    #[test]
    fn default_config_has_correct_routes() {
        let config = DocketConfig::default();
        assert_eq!(config.routes.fragment_root, "pages");
        assert_eq!(config.routes.default_page, PageKey::Cases);
        assert!(config.routes.remote_base.is_none());
    }

    #[test]
    fn default_config_has_correct_gestures() {
        let config = DocketConfig::default();
        assert!(config.gestures.block_pinch);
        assert!(config.gestures.block_double_tap);
        assert!(config.gestures.block_wheel_zoom);
        assert!(!config.gestures.strict);
        assert_eq!(config.gestures.double_tap_threshold_ms, 300);
    }

    #[test]
    fn default_config_has_correct_persistence() {
        let config = DocketConfig::default();
        assert!(config.persistence.enabled);
        assert_eq!(config.persistence.store_file, "fields.json");
    }

    #[test]
    fn default_config_has_correct_window() {
        let config = DocketConfig::default();
        assert_eq!(config.window.title, "Docket");
        assert!((config.window.width - 420.0).abs() < f64::EPSILON);
        assert!((config.window.height - 760.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_fetch() {
        let config = DocketConfig::default();
        assert_eq!(config.fetch.connect_timeout_secs, 10);
        assert_eq!(config.fetch.request_timeout_secs, 30);
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = DocketConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_deserializes_with_defaults() {
        let toml_str = r##"
[theme]
background = "#ffffff"
foreground = "#111111"

[routes]
default_page = "profile"
"##;
        let config: DocketConfig = toml::from_str(toml_str).unwrap();
        // Overridden values
        assert_eq!(config.theme.background, "#ffffff");
        assert_eq!(config.theme.foreground, "#111111");
        assert_eq!(config.routes.default_page, PageKey::Profile);
        // Defaults preserved
        assert_eq!(config.theme.muted, "#708499");
        assert_eq!(config.routes.fragment_root, "pages");
        assert!(config.gestures.block_pinch);
        assert_eq!(config.window.title, "Docket");
    }

    #[test]
    fn empty_toml_gives_all_defaults() {
        let config: DocketConfig = toml::from_str("").unwrap();
        let default = DocketConfig::default();
        assert_eq!(config.theme.background, default.theme.background);
        assert_eq!(config.routes.fragment_root, default.routes.fragment_root);
        assert_eq!(
            config.gestures.double_tap_threshold_ms,
            default.gestures.double_tap_threshold_ms
        );
        assert_eq!(config.window.title, default.window.title);
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = DocketConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DocketConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.theme.background, config.theme.background);
        assert_eq!(deserialized.routes.default_page, config.routes.default_page);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn toml_serialization_roundtrip() {
        let config = DocketConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: DocketConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.theme.background, config.theme.background);
        assert_eq!(deserialized.window.title, config.window.title);
    }

    #[test]
    fn page_key_lowercase_in_toml() {
        let toml_str = r#"
[routes]
default_page = "hearings"
"#;
        let config: DocketConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.routes.default_page, PageKey::Hearings);
    }

    #[test]
    fn log_level_uppercase_in_toml() {
        let toml_str = r#"
[logging]
level = "DEBUG"
"#;
        let config: DocketConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
}
