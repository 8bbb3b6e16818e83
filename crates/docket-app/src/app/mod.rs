//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the shell view, page navigation,
//! theming, and field persistence.

mod core;
mod event_handler;
mod init;
mod ipc;
mod navigation;
mod polling;
mod reload;
mod shutdown;
mod theme;
mod types;

pub use self::core::{AppOptions, DocketApp};
