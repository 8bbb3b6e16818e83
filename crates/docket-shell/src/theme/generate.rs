//! CSS generation for theme publication.
//!
//! Two outputs: a `:root` stylesheet served as the boot `theme.css` so the
//! first paint already carries the variables, and a `setProperty` snippet
//! evaluated for live re-theming. Values that fail color validation are
//! skipped with a warning rather than aborting the whole set.

use tracing::warn;

use super::sanitize::validate_css_color;

/// Generate a `:root { ... }` rule from variable name/value pairs.
pub fn generate_css_root(vars: &[(&str, String)]) -> String {
    let mut css = String::from(":root {\n");

    for (name, value) in vars {
        if let Err(reason) = validate_css_color(value) {
            warn!(name, reason = %reason, "skipping invalid CSS variable");
            continue;
        }
        css.push_str(&format!("  {name}: {value};\n"));
    }

    css.push('}');
    css
}

/// Generate JS that applies the variables to the root element's inline
/// style, overriding the boot stylesheet.
pub fn generate_css_injection_js(vars: &[(&str, String)]) -> String {
    let mut js = String::from("(function() {\n  var s = document.documentElement.style;\n");

    for (name, value) in vars {
        if let Err(reason) = validate_css_color(value) {
            warn!(name, reason = %reason, "skipping invalid CSS variable");
            continue;
        }
        let escaped_name = name.replace('\\', "\\\\").replace('\'', "\\'");
        let escaped_value = value.replace('\\', "\\\\").replace('\'', "\\'");
        js.push_str(&format!(
            "  s.setProperty('{escaped_name}', '{escaped_value}');\n"
        ));
    }

    js.push_str("})();");
    js
}
