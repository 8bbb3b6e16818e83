//! Internal types and constants for the app module.

use std::time::Duration;

use docket_common::PageKey;

/// Result of one fragment fetch, delivered from the async task.
pub(super) struct FetchDone {
    /// Navigation sequence number the fetch belongs to.
    pub seq: u64,
    pub page: PageKey,
    pub result: Result<String, String>,
}

/// How often to poll for events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
