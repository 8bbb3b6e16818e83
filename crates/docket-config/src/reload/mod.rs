//! Live config reload.
//!
//! Combines the file watcher with loading and validation, publishing
//! fresh configs on a `tokio::sync::watch` channel.

mod manager;


pub use manager::ReloadManager;
