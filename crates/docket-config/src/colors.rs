//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and `rgba(r,g,b,a)` formats.
//! In the `rgba()` format, the alpha component can be either 0-255 (integer)
//! or 0.0-1.0 (float), matching CSS conventions.

use docket_common::types::Color;
use docket_common::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for the strict `#RRGGBB` form. Host-facing values (header color
/// sync, published variables) must pass this; shorthand and alpha forms
/// do not.
static STRICT_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Regex for rgba() color with float or int alpha.
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*([0-9]*\.?[0-9]+)\s*\)$")
        .unwrap()
});

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RGB` (e.g. `#f00`)
/// - `#RRGGBB` (e.g. `#6ab2f2`)
/// - `#RRGGBBAA` (e.g. `#6ab2f280`)
/// - `rgba(r,g,b,a)` where `a` is 0.0-1.0 (e.g. `rgba(112,132,153,0.5)`)
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        if let Some(color) = parse_rgba(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s);
    }
    false
}

/// Validate the strict 6-digit `#RRGGBB` form.
pub fn validate_hex_strict(s: &str) -> bool {
    STRICT_HEX_RE.is_match(s.trim())
}

/// Parse a hex color string (#RGB, #RRGGBB, or #RRGGBBAA).
fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::from_rgba(r * 17, g * 17, b * 17, 255))
        }
        6 => Color::from_hex(s),
        8 => Color::from_hex(s),
        _ => None,
    }
}

/// Parse an `rgba(r,g,b,a)` color string.
/// Alpha is interpreted as 0.0-1.0 (CSS convention) and converted to 0-255.
fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    let a_str = &caps[4];

    let a: u8 = if a_str.contains('.') {
        let a_float: f64 = a_str.parse().ok()?;
        if !(0.0..=1.0).contains(&a_float) {
            return None;
        }
        (a_float * 255.0).round() as u8
    } else {
        let a_int: u32 = a_str.parse().ok()?;
        if a_int > 255 {
            return None;
        }
        a_int as u8
    };

    Some(Color::from_rgba(r, g, b, a))
}
