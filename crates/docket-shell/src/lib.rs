//! Shell machinery for the Docket mini app.
//!
//! Wraps the `wry` crate to provide:
//! - A single managed WebView hosting the shell document
//! - Bidirectional IPC (Rust <-> JavaScript) with an allowlisted message set
//! - Custom protocol (`docket://`) for serving bundled assets
//! - Theme hint resolution and CSS variable publication
//! - Page fragment loading with stale-response sequencing
//! - Field persistence, gesture blocking, and the Telegram host bridge

pub mod content;
pub mod dom;
pub mod events;
pub mod fetch;
pub mod gesture;
pub mod host;
pub mod ipc;
pub mod loader;
pub mod routes;
pub mod store;
pub mod theme;
pub mod view;

pub use content::ContentProvider;
pub use events::{PageLoadState, ShellViewEvent};
pub use fetch::{FragmentError, FragmentSource, LocalAssets, RemoteHttp};
pub use gesture::{generate_gesture_script, GestureOptions};
pub use ipc::IpcMessage;
pub use loader::{Completion, Navigation, PageLoader};
pub use routes::RouteTable;
pub use store::FieldStore;
pub use theme::{ResolvedTheme, ThemeFallbacks, ThemeHints};
pub use view::{ShellView, ShellViewOptions};
