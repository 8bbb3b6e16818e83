//! Theme handling: host hint resolution and CSS variable publication.
//!
//! Host-supplied theme hints are resolved against the configured fallback
//! palette into a complete set of display colors, then published as CSS
//! custom properties. All published values are validated to prevent CSS
//! injection.

mod generate;
mod hints;
mod resolve;
mod sanitize;

pub use generate::{generate_css_injection_js, generate_css_root};
pub use hints::ThemeHints;
pub use resolve::{ResolvedTheme, ThemeFallbacks};
pub use sanitize::{is_strict_hex, validate_css_color};
