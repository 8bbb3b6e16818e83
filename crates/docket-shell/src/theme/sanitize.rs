//! CSS value sanitization to prevent CSS injection attacks.
//!
//! The shell only ever publishes color variables, so the validators cover
//! color forms exclusively:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with numeric arguments
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `eval(`, `import`, `;`, `}`, `{`, `<`, `>`

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a CSS color value.
///
/// Accepts hex (`#rgb`, `#rrggbb`, etc.) and `rgb()`/`rgba()` with numeric
/// args. Rejects everything else, including named colors (to prevent
/// injection).
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    // Check for injection patterns first
    check_injection_patterns(trimmed)?;

    // Hex color: #rgb, #rgba, #rrggbb, #rrggbbaa
    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    // rgba(r, g, b, a) or rgb(r, g, b)
    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "Invalid CSS color: only hex (#rrggbb) and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

/// Check for the strict `#rrggbb` form required of host theme hints and
/// derived surface colors.
pub fn is_strict_hex(value: &str) -> bool {
    let trimmed = value.trim();
    let Some(hex) = trimmed.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check for common CSS injection patterns.
fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "import",
        "@import",
        "@charset",
        "behavior:",
        "-moz-binding",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    // Block structural characters that could escape CSS context
    for ch in [';', '{', '}', '<', '>'] {
        if value.contains(ch) {
            return Err(format!("CSS injection blocked: contains '{ch}'"));
        }
    }

    Ok(())
}

/// Validate a hex color string.
fn validate_hex_color(value: &str) -> Result<(), String> {
    let hex = &value[1..]; // skip '#'

    // Must be 3, 4, 6, or 8 hex digits
    let valid_len = matches!(hex.len(), 3 | 4 | 6 | 8);
    if !valid_len {
        return Err(format!(
            "Invalid hex color length: expected 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: non-hex character in '{value}'"));
    }

    Ok(())
}

/// Validate an `rgb()` or `rgba()` function call.
fn validate_rgb_function(value: &str) -> Result<(), String> {
    // Extract content between parens
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("Malformed rgb/rgba: '{value}'"))?;

    // Split by comma, validate each part is numeric
    let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();

    let expected_count = if value.starts_with("rgba(") { 4 } else { 3 };
    if parts.len() != expected_count {
        return Err(format!(
            "Expected {expected_count} arguments in {}, got {}",
            if expected_count == 4 {
                "rgba()"
            } else {
                "rgb()"
            },
            parts.len()
        ));
    }

    for (i, part) in parts.iter().enumerate() {
        if part.parse::<f64>().is_err() {
            return Err(format!(
                "Non-numeric argument at position {i} in '{value}': '{part}'"
            ));
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
