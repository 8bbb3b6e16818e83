//! Telegram WebApp host bridge.
//!
//! The bridge script probes for the host object and, when present, signals
//! readiness, expands the viewport, and forwards theme snapshots over IPC.
//! Outside a Telegram context the probe finds nothing and the script does
//! nothing; the shell keeps running on fallback colors.

use docket_common::types::Color;

/// Initialization script probing `window.Telegram.WebApp`.
///
/// The host API object is loaded by a page script, so the probe waits for
/// `DOMContentLoaded` when the document is still parsing. Every host call
/// sits in its own try/catch: older hosts miss individual methods and that
/// must never break the bridge.
pub const HOST_BRIDGE_SCRIPT: &str = r#"(function() {
  function connect() {
    var tg = window.Telegram && window.Telegram.WebApp;
    if (!tg) { return; }
    try { tg.ready(); } catch (e) {}
    try { tg.expand(); } catch (e) {}
    try {
      window.docket.ipc.send('host_ready', { theme: tg.themeParams || {} });
    } catch (e) {}
    try {
      tg.onEvent('themeChanged', function() {
        window.docket.ipc.send('theme_changed', { theme: tg.themeParams || {} });
      });
    } catch (e) {}
  }
  if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', connect);
  } else {
    connect();
  }
})();"#;

/// Best-effort script syncing the host chrome to the resolved background.
///
/// Evaluated after each theme resolution when color syncing is enabled.
pub fn host_color_sync_script(background: &Color) -> String {
    let hex = background.to_hex();
    format!(
        "(function() {{\n  \
           var tg = window.Telegram && window.Telegram.WebApp;\n  \
           if (!tg) {{ return; }}\n  \
           try {{ tg.setHeaderColor('{hex}'); }} catch (e) {{}}\n  \
           try {{ tg.setBackgroundColor('{hex}'); }} catch (e) {{}}\n\
         }})();"
    )
}
