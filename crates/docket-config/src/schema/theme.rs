//! Theme fallback palette and derivation settings.

use serde::{Deserialize, Serialize};

/// Fallback palette and shade factors for the published theme.
///
/// Host-supplied theme hints always win; these values fill the gaps when
/// the shell runs outside a Telegram context or the host omits a field.
/// Shade factors control how far the derived surface, divider, and
/// control colors move from the background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub foreground: String,
    /// Secondary text (hints, placeholders).
    pub muted: String,
    pub accent: String,
    /// Shade fraction for the surface color (valid range: 0.0-0.5).
    pub surface_shade: f64,
    pub divider_shade: f64,
    pub control_shade: f64,
    /// Mirror the resolved background into the host header and
    /// background, when the host exposes those setters.
    pub sync_host_colors: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#18222d".into(),
            foreground: "#f5f5f5".into(),
            muted: "#708499".into(),
            accent: "#6ab2f2".into(),
            surface_shade: 0.08,
            divider_shade: 0.12,
            control_shade: 0.16,
            sync_host_colors: true,
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
    fn theme_config_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.background, "#18222d");
        assert_eq!(config.foreground, "#f5f5f5");
        assert_eq!(config.muted, "#708499");
        assert_eq!(config.accent, "#6ab2f2");
        assert!((config.surface_shade - 0.08).abs() < f64::EPSILON);
        assert!((config.divider_shade - 0.12).abs() < f64::EPSILON);
        assert!((config.control_shade - 0.16).abs() < f64::EPSILON);
        assert!(config.sync_host_colors);
    }

    #[test]
    fn theme_config_partial_toml() {
        let toml_str = r##"
background = "#ffffff"
surface_shade = 0.05
sync_host_colors = false
"##;
        let config: ThemeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.background, "#ffffff");
        assert!((config.surface_shade - 0.05).abs() < f64::EPSILON);
        assert!(!config.sync_host_colors);
        // Defaults preserved
        assert_eq!(config.foreground, "#f5f5f5");
        assert!((config.divider_shade - 0.12).abs() < f64::EPSILON);
    }
}
