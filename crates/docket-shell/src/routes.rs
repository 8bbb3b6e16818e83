//! Route table: page keys to fragment locations.

use docket_common::types::PageKey;

/// Fixed mapping from page key to fragment path.
///
/// Built once at startup from the configured fragment root; immutable
/// afterwards. Unknown page strings never reach this table: `PageKey::parse`
/// returns `None` and callers substitute the default key first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    fragment_root: String,
}

impl RouteTable {
    pub fn new(fragment_root: impl Into<String>) -> Self {
        let mut root = fragment_root.into();
        while root.ends_with('/') {
            root.pop();
        }
        Self {
            fragment_root: root,
        }
    }

    /// Fragment path for a page key, e.g. `pages/tasks.html`.
    pub fn resolve(&self, page: PageKey) -> String {
        if self.fragment_root.is_empty() {
            format!("{}.html", page.as_str())
        } else {
            format!("{}/{}.html", self.fragment_root, page.as_str())
        }
    }

    pub fn fragment_root(&self) -> &str {
        &self.fragment_root
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new("pages")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_page_key() {
        let routes = RouteTable::default();
        assert_eq!(routes.resolve(PageKey::Cases), "pages/cases.html");
        assert_eq!(routes.resolve(PageKey::Hearings), "pages/hearings.html");
        assert_eq!(routes.resolve(PageKey::Tasks), "pages/tasks.html");
        assert_eq!(routes.resolve(PageKey::Profile), "pages/profile.html");
    }

    #[test]
    fn custom_fragment_root() {
        let routes = RouteTable::new("fragments/v2");
        assert_eq!(routes.resolve(PageKey::Cases), "fragments/v2/cases.html");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let routes = RouteTable::new("pages///");
        assert_eq!(routes.resolve(PageKey::Tasks), "pages/tasks.html");
        assert_eq!(routes.fragment_root(), "pages");
    }

    #[test]
    fn empty_root_resolves_flat() {
        let routes = RouteTable::new("");
        assert_eq!(routes.resolve(PageKey::Profile), "profile.html");
    }
}
