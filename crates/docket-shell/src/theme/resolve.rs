use docket_common::types::Color;
use tracing::warn;

use super::hints::ThemeHints;
use super::sanitize::is_strict_hex;

// Shades of the default background, substituted when a derived value fails
// strict validation (for example when an alpha channel leaks in).
const SAFE_SURFACE: Color = Color {
    r: 0x2a,
    g: 0x34,
    b: 0x3e,
    a: 255,
};
const SAFE_DIVIDER: Color = Color {
    r: 0x34,
    g: 0x3d,
    b: 0x46,
    a: 255,
};
const SAFE_CONTROL: Color = Color {
    r: 0x3d,
    g: 0x45,
    b: 0x4f,
    a: 255,
};

/// Fallback palette and shading amounts applied when host hints are missing
/// or malformed. Built from the theme section of the config.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeFallbacks {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    /// Shade fraction for the derived surface color.
    pub surface_shade: f64,
    /// Shade fraction for the derived divider color.
    pub divider_shade: f64,
    /// Shade fraction for the derived control background.
    pub control_shade: f64,
}

impl Default for ThemeFallbacks {
    fn default() -> Self {
        Self {
            background: Color::from_rgba(0x18, 0x22, 0x2d, 255),
            foreground: Color::from_rgba(0xf5, 0xf5, 0xf5, 255),
            muted: Color::from_rgba(0x70, 0x84, 0x99, 255),
            accent: Color::from_rgba(0x6a, 0xb2, 0xf2, 255),
            surface_shade: 0.08,
            divider_shade: 0.12,
            control_shade: 0.16,
        }
    }
}

/// A complete set of display colors. Every slot is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub surface: Color,
    pub divider: Color,
    pub control_background: Color,
}

impl ThemeHints {
    /// Resolve hints against the fallback palette into a complete theme.
    ///
    /// Hints are taken verbatim when they are strict `#rrggbb` hex; anything
    /// else falls back to the configured palette. Surface, divider, and
    /// control colors are derived from the background by shading toward
    /// white on dark backgrounds and toward black on light ones. A supplied
    /// secondary-background hint replaces the derived surface. The derived
    /// slots are strictly validated afterwards and substituted with safe
    /// defaults when malformed host input slips through.
    ///
    /// Resolution is idempotent: the same hints and fallbacks always produce
    /// the same theme.
    pub fn resolve(&self, fallbacks: &ThemeFallbacks) -> ResolvedTheme {
        let background = hint_or(self.bg_color.as_deref(), fallbacks.background, "bg_color");
        let foreground = hint_or(
            self.text_color.as_deref(),
            fallbacks.foreground,
            "text_color",
        );
        let muted = hint_or(self.hint_color.as_deref(), fallbacks.muted, "hint_color");
        let accent = hint_or(self.link_color.as_deref(), fallbacks.accent, "link_color");

        let shade = |amount: f64| {
            if background.is_dark() {
                background.lighten(amount)
            } else {
                background.darken(amount)
            }
        };

        let surface = match self.secondary_bg_color.as_deref().map(str::trim) {
            Some(raw) => Color::from_hex(raw).unwrap_or_else(|| {
                warn!(value = %raw, "unusable secondary_bg_color hint; deriving surface");
                shade(fallbacks.surface_shade)
            }),
            None => shade(fallbacks.surface_shade),
        };
        let divider = shade(fallbacks.divider_shade);
        let control_background = shade(fallbacks.control_shade);

        ResolvedTheme {
            background,
            foreground,
            muted,
            accent,
            surface: strict_or_safe(surface, SAFE_SURFACE, "surface"),
            divider: strict_or_safe(divider, SAFE_DIVIDER, "divider"),
            control_background: strict_or_safe(control_background, SAFE_CONTROL, "control"),
        }
    }
}

impl ResolvedTheme {
    /// Resolve with no hints at all (the boot theme before any host
    /// contact).
    pub fn from_fallbacks(fallbacks: &ThemeFallbacks) -> Self {
        ThemeHints::default().resolve(fallbacks)
    }

    /// CSS custom property names and values, in publication order.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--color-bg", self.background.to_hex()),
            ("--color-fg", self.foreground.to_hex()),
            ("--color-muted", self.muted.to_hex()),
            ("--color-accent", self.accent.to_hex()),
            ("--color-surface", self.surface.to_hex()),
            ("--color-divider", self.divider.to_hex()),
            ("--color-control-bg", self.control_background.to_hex()),
        ]
    }
}

/// Take a hint verbatim when it is strict `#rrggbb`, otherwise fall back.
fn hint_or(hint: Option<&str>, fallback: Color, name: &'static str) -> Color {
    match hint {
        Some(raw) => {
            let trimmed = raw.trim();
            if !is_strict_hex(trimmed) {
                warn!(hint = name, value = %raw, "malformed theme hint ignored");
                return fallback;
            }
            Color::from_hex(trimmed).unwrap_or(fallback)
        }
        None => fallback,
    }
}

/// Keep a derived color only if it is strict `#rrggbb`.
fn strict_or_safe(color: Color, safe: Color, slot: &'static str) -> Color {
    let hex = color.to_hex();
    if is_strict_hex(&hex) {
        color
    } else {
        warn!(slot, value = %hex, "derived color failed strict validation; using safe default");
        safe
    }
}
