use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of sections the shell can show. Unknown route strings are
/// never represented; callers fall back to [`PageKey::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Cases,
    Hearings,
    Tasks,
    Profile,
}

impl PageKey {
    pub const ALL: [PageKey; 4] = [
        PageKey::Cases,
        PageKey::Hearings,
        PageKey::Tasks,
        PageKey::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Cases => "cases",
            PageKey::Hearings => "hearings",
            PageKey::Tasks => "tasks",
            PageKey::Profile => "profile",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cases" => Some(PageKey::Cases),
            "hearings" => Some(PageKey::Hearings),
            "tasks" => Some(PageKey::Tasks),
            "profile" => Some(PageKey::Profile),
            _ => None,
        }
    }
}

impl Default for PageKey {
    fn default() -> Self {
        PageKey::Cases
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one persisted form field: the page it lives on plus the
/// field's `data-persist` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldKey {
    pub page: PageKey,
    pub field: String,
}

impl FieldKey {
    pub fn new(page: PageKey, field: impl Into<String>) -> Self {
        Self {
            page,
            field: field.into(),
        }
    }

    /// Storage key string, `page:<pageKey>:<fieldId>`.
    pub fn storage_key(&self) -> String {
        format!("page:{}:{}", self.page.as_str(), self.field)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}
