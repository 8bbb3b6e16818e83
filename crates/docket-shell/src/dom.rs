//! Generated DOM scripts for page swaps.
//!
//! Each builder returns a self-contained snippet evaluated in the shell
//! document. Fragment markup and stored field values are embedded as JSON
//! string literals, so arbitrary content cannot break out of the script.

use std::collections::BTreeMap;

use docket_common::types::PageKey;

/// Selector of the content region in the shell document.
pub const CONTENT_SELECTOR: &str = "#content";

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Replace the content region with `markup` and scroll back to the top.
pub fn swap_markup(markup: &str) -> String {
    format!(
        "(function() {{\n  \
           var region = document.querySelector('{CONTENT_SELECTOR}');\n  \
           if (!region) {{ return; }}\n  \
           region.innerHTML = {markup};\n  \
           region.scrollTop = 0;\n  \
           window.scrollTo(0, 0);\n\
         }})();",
        markup = js_string(markup)
    )
}

/// Transient placeholder shown while a fragment is in flight.
pub fn loading_script(page: PageKey) -> String {
    swap_markup(&format!(
        "<div class=\"placeholder\">Loading {}...</div>",
        page.as_str()
    ))
}

/// Inline error markup naming the failed page and location.
pub fn error_script(page: PageKey, path: &str, reason: &str) -> String {
    swap_markup(&format!(
        "<div class=\"load-error\"><strong>Could not load {page}</strong>\
         <p>{path}: {reason}</p></div>",
        page = page.as_str(),
        path = html_escape(path),
        reason = html_escape(reason)
    ))
}

/// Invoke the page init hook after a successful swap.
///
/// Dispatches a `docket:page` event and calls the function registered under
/// `window.docket.pages[<key>]` when one exists. Replaces any reliance on
/// inline `<script>` elements inside fragments, which stay inert when
/// inserted through `innerHTML`.
pub fn page_init_script(page: PageKey) -> String {
    format!(
        "(function() {{\n  \
           var key = {key};\n  \
           document.dispatchEvent(new CustomEvent('docket:page', {{ detail: {{ page: key }} }}));\n  \
           var hook = window.docket.pages[key];\n  \
           if (typeof hook === 'function') {{\n    \
             try {{ hook(); }} catch (e) {{ console.error('page hook error', e); }}\n  \
           }}\n\
         }})();",
        key = js_string(page.as_str())
    )
}

/// Mark the tab for `page` active (and `aria-selected`), deactivate the
/// rest.
pub fn tab_script(page: PageKey) -> String {
    format!(
        "(function() {{\n  \
           var key = {key};\n  \
           document.querySelectorAll('[data-page]').forEach(function(tab) {{\n    \
             var active = tab.getAttribute('data-page') === key;\n    \
             tab.classList.toggle('active', active);\n    \
             tab.setAttribute('aria-selected', active ? 'true' : 'false');\n  \
           }});\n\
         }})();",
        key = js_string(page.as_str())
    )
}

/// Reflect `page` in the address fragment without producing a navigation
/// event.
pub fn hash_script(page: PageKey) -> String {
    format!(
        "history.replaceState(null, '', {});",
        js_string(&format!("#{}", page.as_str()))
    )
}

/// Restore stored values into the page's `[data-persist]` fields.
///
/// Returns an empty string when there is nothing to restore; callers skip
/// evaluation in that case.
pub fn restore_fields_script(fields: &[(String, String)]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let map: BTreeMap<&str, &str> = fields
        .iter()
        .map(|(field, value)| (field.as_str(), value.as_str()))
        .collect();
    let stored = serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string());
    format!(
        "(function() {{\n  \
           var stored = {stored};\n  \
           Object.keys(stored).forEach(function(field) {{\n    \
             var el = document.querySelector('[data-persist=\"' + CSS.escape(field) + '\"]');\n    \
             if (el && 'value' in el) {{ el.value = stored[field]; }}\n  \
           }});\n\
         }})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_embeds_markup_as_json_literal() {
        let js = swap_markup("<p class=\"note\">It's here</p>");
        assert!(js.contains("document.querySelector('#content')"));
        // Quotes survive JSON escaping instead of breaking the script.
        assert!(js.contains(r#"<p class=\"note\">It's here</p>"#));
        assert!(js.contains("region.scrollTop = 0;"));
        assert!(js.contains("window.scrollTo(0, 0);"));
    }

    #[test]
    fn loading_names_the_page() {
        let js = loading_script(PageKey::Hearings);
        assert!(js.contains("Loading hearings..."));
        assert!(js.contains("placeholder"));
    }

    #[test]
    fn error_names_page_and_location() {
        let js = error_script(PageKey::Tasks, "pages/tasks.html", "HTTP 503");
        assert!(js.contains("Could not load tasks"));
        assert!(js.contains("pages/tasks.html"));
        assert!(js.contains("HTTP 503"));
    }

    #[test]
    fn error_escapes_reason_markup() {
        let js = error_script(PageKey::Cases, "pages/cases.html", "<script>alert(1)</script>");
        assert!(!js.contains("<script>"));
        assert!(js.contains("&lt;script&gt;"));
    }

    #[test]
    fn init_hook_dispatches_event_and_calls_registration() {
        let js = page_init_script(PageKey::Profile);
        assert!(js.contains("var key = \"profile\";"));
        assert!(js.contains("CustomEvent('docket:page'"));
        assert!(js.contains("window.docket.pages[key]"));
        assert!(js.contains("typeof hook === 'function'"));
    }

    #[test]
    fn tab_activation_is_exclusive() {
        let js = tab_script(PageKey::Tasks);
        assert!(js.contains("var key = \"tasks\";"));
        assert!(js.contains("querySelectorAll('[data-page]')"));
        // Every tab is toggled against the key, so exactly one ends active.
        assert!(js.contains("classList.toggle('active', active)"));
        assert!(js.contains("setAttribute('aria-selected', active ? 'true' : 'false')"));
    }

    #[test]
    fn hash_uses_replace_state() {
        assert_eq!(
            hash_script(PageKey::Tasks),
            "history.replaceState(null, '', \"#tasks\");"
        );
    }

    #[test]
    fn restore_embeds_field_map() {
        let js = restore_fields_script(&[
            ("notes".to_string(), "call the clerk".to_string()),
            ("matter".to_string(), "D-1042".to_string()),
        ]);
        assert!(js.contains(r#""notes":"call the clerk""#));
        assert!(js.contains(r#""matter":"D-1042""#));
        assert!(js.contains("data-persist"));
        assert!(js.contains("CSS.escape(field)"));
    }

    #[test]
    fn restore_with_no_fields_is_empty() {
        assert_eq!(restore_fields_script(&[]), "");
    }

    #[test]
    fn restore_escapes_hostile_values() {
        let js = restore_fields_script(&[(
            "notes".to_string(),
            "\"});alert(1);//".to_string(),
        )]);
        // The value stays inside the JSON literal.
        assert!(js.contains(r#"\"});alert(1);//"#));
    }
}
