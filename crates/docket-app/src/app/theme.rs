//! Theme resolution and publication: maps the config palette to fallbacks,
//! resolves host hints, and pushes the result into the shell view.

use docket_common::types::Color;
use docket_config::schema::ThemeConfig;
use docket_shell::theme::generate_css_injection_js;
use docket_shell::{host, ThemeFallbacks, ThemeHints};

use super::core::DocketApp;

// =============================================================================
// CONFIG → FALLBACK PALETTE
// =============================================================================

/// Build the fallback palette from the theme config section.
///
/// Unparseable colors fall back to the built-in palette slot by slot, so a
/// single bad value never takes down the whole theme.
pub(super) fn fallbacks_from_config(theme: &ThemeConfig) -> ThemeFallbacks {
    let defaults = ThemeFallbacks::default();
    ThemeFallbacks {
        background: parse_or(&theme.background, defaults.background, "background"),
        foreground: parse_or(&theme.foreground, defaults.foreground, "foreground"),
        muted: parse_or(&theme.muted, defaults.muted, "muted"),
        accent: parse_or(&theme.accent, defaults.accent, "accent"),
        surface_shade: theme.surface_shade,
        divider_shade: theme.divider_shade,
        control_shade: theme.control_shade,
    }
}

fn parse_or(value: &str, fallback: Color, slot: &'static str) -> Color {
    match docket_config::colors::parse_color(value) {
        Ok(color) => color,
        Err(e) => {
            tracing::warn!(slot, error = %e, "Unusable config color, using built-in default");
            fallback
        }
    }
}

// =============================================================================
// RESOLUTION AND PUBLICATION
// =============================================================================

impl DocketApp {
    /// Remember the hints and re-resolve the theme against the current
    /// fallbacks.
    pub(super) fn apply_theme_hints(&mut self, hints: ThemeHints) {
        self.last_hints = hints;
        self.refresh_theme();
    }

    /// Re-resolve the theme from the remembered hints and publish it.
    pub(super) fn refresh_theme(&mut self) {
        self.theme = self.last_hints.resolve(&self.fallbacks);
        self.publish_theme();
    }

    /// Push the resolved theme into the shell view and, when enabled,
    /// mirror the background into the host chrome.
    pub(super) fn publish_theme(&self) {
        let Some(ref view) = self.view else { return };

        let vars = self.theme.css_variables();
        if let Err(e) = view.evaluate_script(&generate_css_injection_js(&vars)) {
            tracing::warn!(error = %e, "Failed to inject theme CSS");
        }

        if self.config.theme.sync_host_colors {
            let js = host::host_color_sync_script(&self.theme.background);
            if let Err(e) = view.evaluate_script(&js) {
                tracing::warn!(error = %e, "Failed to sync host colors");
            }
        }

        tracing::debug!("Theme published to shell view");
    }
}

// =============================================================================
// TESTS
// =============================================================================
