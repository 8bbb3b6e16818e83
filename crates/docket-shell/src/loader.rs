//! Page navigation state: ordering fetches so a slow response can never
//! overwrite a newer page.
//!
//! Every navigation gets a monotonically increasing sequence number. When
//! a fetch settles, its sequence is checked against the latest issued one;
//! anything older is reported stale and dropped by the caller. In-flight
//! fetches are never cancelled, they are simply outranked.

use docket_common::types::PageKey;
use tracing::debug;

use crate::routes::RouteTable;

/// A navigation issued by [`PageLoader::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub seq: u64,
    pub page: PageKey,
    /// Fragment path resolved through the route table.
    pub path: String,
}

/// Outcome of a settled navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The fragment arrived and should be applied.
    Applied { page: PageKey },
    /// The fetch failed; error markup should replace the content region.
    Failed { page: PageKey, reason: String },
    /// A newer navigation superseded this one; nothing to do.
    Stale { seq: u64 },
}

/// Tracks the current page and orders navigations.
#[derive(Debug)]
pub struct PageLoader {
    routes: RouteTable,
    next_seq: u64,
    latest: Option<(u64, PageKey)>,
    current: Option<PageKey>,
}

impl PageLoader {
    pub fn new(routes: RouteTable) -> Self {
        Self {
            routes,
            next_seq: 0,
            latest: None,
            current: None,
        }
    }

    /// Start a navigation to `page`.
    ///
    /// The returned sequence number must come back through [`complete`]
    /// together with the fetch outcome. Re-entrant calls (same or different
    /// key) simply issue a newer sequence.
    ///
    /// [`complete`]: PageLoader::complete
    pub fn begin(&mut self, page: PageKey) -> Navigation {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest = Some((seq, page));
        debug!(seq, page = %page, "navigation started");
        Navigation {
            seq,
            page,
            path: self.routes.resolve(page),
        }
    }

    /// Record the outcome of a navigation.
    ///
    /// Completions carrying anything but the most recently issued sequence
    /// are stale and must be discarded by the caller. A failure leaves the
    /// current page untouched: the shell shows error markup but the tab and
    /// hash keep reflecting the last page that actually loaded.
    pub fn complete(&mut self, seq: u64, outcome: Result<(), String>) -> Completion {
        let Some((latest_seq, page)) = self.latest else {
            debug!(seq, "completion with no navigation in flight");
            return Completion::Stale { seq };
        };
        if seq != latest_seq {
            debug!(seq, latest = latest_seq, "stale navigation discarded");
            return Completion::Stale { seq };
        }
        match outcome {
            Ok(()) => {
                self.current = Some(page);
                Completion::Applied { page }
            }
            Err(reason) => Completion::Failed { page, reason },
        }
    }

    /// The page currently shown, if any navigation has completed.
    pub fn current(&self) -> Option<PageKey> {
        self.current
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> PageLoader {
        PageLoader::new(RouteTable::default())
    }

    #[test]
    fn begin_issues_increasing_sequences() {
        let mut loader = loader();
        let a = loader.begin(PageKey::Cases);
        let b = loader.begin(PageKey::Tasks);
        let c = loader.begin(PageKey::Cases);
        assert!(a.seq < b.seq);
        assert!(b.seq < c.seq);
    }

    #[test]
    fn navigation_carries_resolved_path() {
        let mut loader = loader();
        let nav = loader.begin(PageKey::Tasks);
        assert_eq!(nav.page, PageKey::Tasks);
        assert_eq!(nav.path, "pages/tasks.html");
    }

    #[test]
    fn successful_completion_sets_current() {
        let mut loader = loader();
        assert_eq!(loader.current(), None);
        let nav = loader.begin(PageKey::Hearings);
        let completion = loader.complete(nav.seq, Ok(()));
        assert_eq!(
            completion,
            Completion::Applied {
                page: PageKey::Hearings
            }
        );
        assert_eq!(loader.current(), Some(PageKey::Hearings));
    }

    #[test]
    fn failed_completion_keeps_current_page() {
        let mut loader = loader();
        let nav = loader.begin(PageKey::Cases);
        loader.complete(nav.seq, Ok(()));

        let nav = loader.begin(PageKey::Profile);
        let completion = loader.complete(nav.seq, Err("HTTP 404".into()));
        assert_eq!(
            completion,
            Completion::Failed {
                page: PageKey::Profile,
                reason: "HTTP 404".into()
            }
        );
        // The error state does not move the tab or hash.
        assert_eq!(loader.current(), Some(PageKey::Cases));
    }

    #[test]
    fn slow_earlier_fetch_is_stale() {
        let mut loader = loader();
        let slow = loader.begin(PageKey::Cases);
        let fast = loader.begin(PageKey::Tasks);

        // The newer navigation settles first.
        assert_eq!(
            loader.complete(fast.seq, Ok(())),
            Completion::Applied {
                page: PageKey::Tasks
            }
        );
        // The older one resolves afterwards and must not overwrite.
        assert_eq!(
            loader.complete(slow.seq, Ok(())),
            Completion::Stale { seq: slow.seq }
        );
        assert_eq!(loader.current(), Some(PageKey::Tasks));
    }

    #[test]
    fn stale_failure_is_also_discarded() {
        let mut loader = loader();
        let old = loader.begin(PageKey::Cases);
        let new = loader.begin(PageKey::Hearings);
        assert_eq!(
            loader.complete(old.seq, Err("timeout".into())),
            Completion::Stale { seq: old.seq }
        );
        assert_eq!(
            loader.complete(new.seq, Ok(())),
            Completion::Applied {
                page: PageKey::Hearings
            }
        );
    }

    #[test]
    fn renavigating_to_same_key_outranks_the_first_fetch() {
        let mut loader = loader();
        let first = loader.begin(PageKey::Cases);
        let second = loader.begin(PageKey::Cases);
        assert_eq!(
            loader.complete(first.seq, Ok(())),
            Completion::Stale { seq: first.seq }
        );
        assert_eq!(
            loader.complete(second.seq, Ok(())),
            Completion::Applied {
                page: PageKey::Cases
            }
        );
    }

    #[test]
    fn completion_without_navigation_is_stale() {
        let mut loader = loader();
        assert_eq!(loader.complete(7, Ok(())), Completion::Stale { seq: 7 });
        assert_eq!(loader.current(), None);
    }
}
