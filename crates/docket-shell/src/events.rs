//! Events surfaced by the shell view to the application loop.

use crate::ipc::IpcMessage;

/// Page load states reported by wry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(event: wry::PageLoadEvent) -> Self {
        match event {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// An event captured by the view's wry handlers, drained each loop turn.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellViewEvent {
    /// The shell document started or finished loading.
    PageLoad { state: PageLoadState, url: String },
    /// A validated IPC message arrived from JavaScript.
    Ipc(IpcMessage),
    /// An allowlisted navigation was requested.
    NavigationRequested { url: String },
}
