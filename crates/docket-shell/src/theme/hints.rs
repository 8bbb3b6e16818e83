use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Host-supplied theme color hints.
///
/// Field names follow the Telegram `themeParams` object; every field is
/// optional and unknown fields are ignored. Values are expected to be
/// `#rrggbb` strings but are treated as untrusted input: resolution
/// validates each one and falls back when a hint is malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeHints {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub link_color: Option<String>,
    pub hint_color: Option<String>,
    pub secondary_bg_color: Option<String>,
}

impl ThemeHints {
    /// Extract hints from a `host_ready` / `theme_changed` IPC payload.
    ///
    /// Accepts either `{ "theme": { ... } }` or the bare theme object.
    /// Anything unparseable yields empty hints.
    pub fn from_payload(payload: &Value) -> Self {
        let object = payload.get("theme").unwrap_or(payload);
        serde_json::from_value(object.clone()).unwrap_or_default()
    }

    /// True when no hint is present at all.
    pub fn is_empty(&self) -> bool {
        self.bg_color.is_none()
            && self.text_color.is_none()
            && self.link_color.is_none()
            && self.hint_color.is_none()
            && self.secondary_bg_color.is_none()
    }
}
