//! The shell view: one wry WebView hosting the Docket document as a child
//! of the application window.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use docket_common::errors::ShellError;

use crate::content::ContentProvider;
use crate::events::{PageLoadState, ShellViewEvent};
use crate::ipc::{self, IpcMessage, IPC_INIT_SCRIPT, SHELL_BOOT_SCRIPT};

/// The entry document, served over the custom protocol.
pub const SHELL_URL: &str = "docket://localhost/index.html";

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for webview navigation.
///
/// - `docket://` — custom protocol for bundled shell assets
/// - `http://docket.localhost` — WebView2 on Windows rewrites the custom
///   protocol to this origin
/// - `about:blank` — default empty page
pub const ALLOWED_NAV_PREFIXES: &[&str] =
    &["docket://", "http://docket.localhost", "about:blank"];

/// Check whether a URL is allowed, including the configured remote fragment
/// origin when one is set.
pub fn is_navigation_allowed(url: &str, remote_base: Option<&str>) -> bool {
    if ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
    {
        return true;
    }
    matches!(remote_base, Some(base) if !base.is_empty() && url.starts_with(base))
}

// =============================================================================
// VIEW
// =============================================================================

/// Construction options for the shell view.
#[derive(Debug, Clone)]
pub struct ShellViewOptions {
    /// Extra initialization scripts (gesture blocker, host bridge) run
    /// before any page code.
    pub init_scripts: Vec<String>,
    /// Remote origin allowed for navigation when remote fragments are
    /// configured.
    pub remote_base: Option<String>,
    pub transparent: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
}

impl Default for ShellViewOptions {
    fn default() -> Self {
        Self {
            init_scripts: Vec::new(),
            remote_base: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some("Docket/0.1".to_string()),
        }
    }
}

/// Wraps the single WebView and the event sink its handlers fill.
pub struct ShellView {
    webview: wry::WebView,
    events: Arc<Mutex<Vec<ShellViewEvent>>>,
}

impl ShellView {
    /// Build the view as a child of `window`, covering `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        provider: Arc<ContentProvider>,
        options: &ShellViewOptions,
    ) -> Result<Self, ShellError> {
        let events: Arc<Mutex<Vec<ShellViewEvent>>> = Arc::new(Mutex::new(Vec::new()));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(options.transparent)
            .with_devtools(options.devtools)
            .with_clipboard(true)
            .with_focused(true);

        // Bridge first, boot wiring second, feature scripts afterwards.
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
        builder = builder.with_initialization_script(SHELL_BOOT_SCRIPT);
        for script in &options.init_scripts {
            builder = builder.with_initialization_script(script.as_str());
        }

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder =
            Self::attach_navigation_handler(builder, Arc::clone(&events), options.remote_base.clone());
        builder = Self::attach_custom_protocol(builder, provider);

        builder = builder.with_url(SHELL_URL);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| ShellError::View(e.to_string()))?;

        debug!(url = SHELL_URL, "shell view created");

        Ok(Self { webview, events })
    }

    /// Drain events captured since the last call.
    pub fn drain_events(&self) -> Vec<ShellViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Execute JavaScript in the shell document.
    pub fn evaluate_script(&self, js: &str) -> Result<(), ShellError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| ShellError::Script(e.to_string()))
    }

    /// Send a typed message to handlers registered on `window.docket.ipc`.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ShellError> {
        self.evaluate_script(&ipc::js_dispatch_message(kind, payload))
    }

    /// Resize the view within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), ShellError> {
        self.webview
            .set_bounds(bounds)
            .map_err(|e| ShellError::View(e.to_string()))
    }

    /// Focus the view.
    pub fn focus(&self) -> Result<(), ShellError> {
        self.webview
            .focus()
            .map_err(|e| ShellError::View(e.to_string()))
    }

    // -------------------------------------------------------------------
    // Handler attachments
    // -------------------------------------------------------------------

    fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            let Some(message) = IpcMessage::from_json(&body) else {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            };
            if !ipc::is_allowed_kind(&message.kind) {
                warn!(kind = %message.kind, "IPC message rejected: unknown kind");
                return;
            }

            debug!(kind = %message.kind, "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellViewEvent::Ipc(message));
            }
        })
    }

    fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellViewEvent::PageLoad { state, url });
            }
        })
    }

    fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellViewEvent>>>,
        remote_base: Option<String>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url, remote_base.as_deref()) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }

            debug!(url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellViewEvent::NavigationRequested { url });
            }
            true
        })
    }

    fn attach_custom_protocol<'a>(
        builder: WebViewBuilder<'a>,
        provider: Arc<ContentProvider>,
    ) -> WebViewBuilder<'a> {
        builder.with_custom_protocol("docket".to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = uri
                .strip_prefix("docket://localhost/")
                .or_else(|| uri.strip_prefix("docket://localhost"))
                .or_else(|| uri.strip_prefix("docket:///"))
                .or_else(|| uri.strip_prefix("docket://"))
                .unwrap_or("");

            match provider.resolve(path) {
                Some((mime, data)) => wry::http::Response::builder()
                    .status(200)
                    .header("Content-Type", mime.as_ref())
                    .header("Access-Control-Allow-Origin", "docket://localhost")
                    .body(std::borrow::Cow::from(data.into_owned()))
                    .unwrap(),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    wry::http::Response::builder()
                        .status(404)
                        .body(std::borrow::Cow::from(b"Not Found".to_vec()))
                        .unwrap()
                }
            }
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Allowed URLs --

    #[test]
    fn allows_docket_protocol() {
        assert!(is_navigation_allowed("docket://localhost/index.html", None));
        assert!(is_navigation_allowed(
            "docket://localhost/pages/cases.html",
            None
        ));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank", None));
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        // WebView2 on Windows rewrites docket://localhost/… → http://docket.localhost/…
        assert!(is_navigation_allowed(
            "http://docket.localhost/index.html",
            None
        ));
    }

    #[test]
    fn allows_configured_remote_origin() {
        let base = Some("https://fragments.example/app");
        assert!(is_navigation_allowed(
            "https://fragments.example/app/pages/tasks.html",
            base
        ));
    }

    // -- Blocked URLs --

    #[test]
    fn blocks_arbitrary_https() {
        assert!(!is_navigation_allowed("https://evil.com", None));
        assert!(!is_navigation_allowed("https://example.com/phishing", None));
    }

    #[test]
    fn blocks_unconfigured_remote_origin() {
        assert!(!is_navigation_allowed(
            "https://fragments.example/app/pages/tasks.html",
            None
        ));
    }

    #[test]
    fn blocks_other_origins_when_remote_is_configured() {
        let base = Some("https://fragments.example/app");
        assert!(!is_navigation_allowed("https://evil.com", base));
    }

    #[test]
    fn empty_remote_base_allows_nothing_extra() {
        assert!(!is_navigation_allowed("https://evil.com", Some("")));
    }

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_navigation_allowed("file:///etc/passwd", None));
    }

    #[test]
    fn blocks_javascript_protocol() {
        assert!(!is_navigation_allowed("javascript:alert(1)", None));
    }

    #[test]
    fn blocks_data_protocol() {
        assert!(!is_navigation_allowed("data:text/html,<h1>x</h1>", None));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed("", None));
        assert!(!is_navigation_allowed("not-a-url", None));
        assert!(!is_navigation_allowed("ftp://files.example.com", None));
    }

    // -- Allowlist structure --

    #[test]
    fn allowlist_has_expected_entries() {
        assert_eq!(ALLOWED_NAV_PREFIXES.len(), 3);
        assert!(ALLOWED_NAV_PREFIXES.contains(&"docket://"));
        assert!(ALLOWED_NAV_PREFIXES.contains(&"about:blank"));
    }

    // -- Options --

    #[test]
    fn default_options() {
        let options = ShellViewOptions::default();
        assert!(options.init_scripts.is_empty());
        assert!(options.remote_base.is_none());
        assert!(!options.transparent);
        assert_eq!(options.user_agent.as_deref(), Some("Docket/0.1"));
    }
}
