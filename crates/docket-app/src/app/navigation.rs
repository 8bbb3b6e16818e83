//! Page navigation: boot target selection, fragment fetches, and applying
//! completed loads to the shell document.

use docket_common::{PageKey, ShellError, ShellEvent};
use docket_shell::dom;
use docket_shell::loader::Completion;

use super::core::DocketApp;
use super::types::FetchDone;

impl DocketApp {
    /// Boot page precedence: address fragment, then the CLI override, then
    /// the configured default.
    pub(super) fn boot_target(&self, hash: &str) -> PageKey {
        if let Some(page) = PageKey::parse(hash.trim_start_matches('#')) {
            return page;
        }
        if let Some(page) = self.start_page {
            return page;
        }
        self.config.routes.default_page
    }

    /// Start a navigation: show the loading placeholder and fetch the
    /// fragment on the async runtime.
    pub(super) fn navigate_to(&mut self, page: PageKey) {
        let Some(source) = self.source.clone() else {
            tracing::warn!(page = %page, "No fragment source, dropping navigation");
            return;
        };

        let nav = self.loader.begin(page);
        self.event_bus.publish(ShellEvent::PageRequested(page));

        if let Some(ref view) = self.view {
            if let Err(e) = view.evaluate_script(&dom::loading_script(page)) {
                tracing::warn!(page = %page, error = %e, "Failed to show loading placeholder");
            }
        }

        let Some(ref runtime) = self.tokio_runtime else {
            tracing::warn!(page = %page, "Async runtime not running, dropping navigation");
            return;
        };

        let tx = self.fetch_tx.clone();
        runtime.spawn(async move {
            let result = source.fetch(&nav.path).await.map_err(|e| e.to_string());
            let _ = tx.send(FetchDone {
                seq: nav.seq,
                page: nav.page,
                result,
            });
        });
    }

    /// Drain finished fetches and apply them in completion order.
    pub(super) fn poll_fetch_completions(&mut self) {
        let done: Vec<FetchDone> = self.fetch_rx.try_iter().collect();
        for item in done {
            self.finish_fetch(item);
        }
    }

    /// Feed one fetch result through the loader and act on the outcome.
    pub(super) fn finish_fetch(&mut self, done: FetchDone) {
        let FetchDone { seq, page, result } = done;

        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(reason) => Err(reason.clone()),
        };

        match self.loader.complete(seq, outcome) {
            Completion::Applied { page } => {
                if let Ok(ref markup) = result {
                    self.apply_fragment(page, markup);
                    self.event_bus.publish(ShellEvent::PageLoaded(page));
                }
            }
            Completion::Failed { page, reason } => {
                let path = self.loader.routes().resolve(page);
                self.show_load_error(page, &path, &reason);
                self.event_bus.publish(ShellEvent::PageFailed { page, reason });
            }
            Completion::Stale { seq } => {
                tracing::debug!(seq, page = %page, "Stale fragment discarded");
            }
        }
    }

    /// Swap the fragment into the content region, restore persisted
    /// fields, and update the chrome.
    fn apply_fragment(&self, page: PageKey, markup: &str) {
        let Some(ref view) = self.view else { return };

        let mut scripts = vec![dom::swap_markup(markup)];
        if let Some(js) = self.restore_script(page) {
            scripts.push(js);
        }
        scripts.push(dom::tab_script(page));
        scripts.push(dom::hash_script(page));
        scripts.push(dom::page_init_script(page));

        for js in &scripts {
            if let Err(e) = view.evaluate_script(js) {
                tracing::warn!(page = %page, error = %e, "Failed to apply fragment script");
            }
        }

        tracing::info!(page = %page, "Page applied");
    }

    /// Restore script for the page's persisted fields, when any exist.
    fn restore_script(&self, page: PageKey) -> Option<String> {
        if !self.config.persistence.enabled {
            return None;
        }
        let store = self.store.as_ref()?;

        let fields = store.page_fields(page);
        if fields.is_empty() {
            return None;
        }

        tracing::debug!(page = %page, count = fields.len(), "Restoring persisted fields");
        Some(dom::restore_fields_script(&fields))
    }

    /// Show the load error panel; the previously applied page stays
    /// current.
    fn show_load_error(&self, page: PageKey, path: &str, reason: &str) {
        let err = ShellError::FragmentLoad {
            page: page.as_str().to_string(),
            reason: reason.to_string(),
        };
        tracing::warn!(path, "{err}");

        if let Some(ref view) = self.view {
            if let Err(e) = view.evaluate_script(&dom::error_script(page, path, reason)) {
                tracing::warn!(page = %page, error = %e, "Failed to show load error");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::core::{AppOptions, DocketApp};
    use super::super::types::FetchDone;
    use docket_common::PageKey;
    use docket_config::schema::DocketConfig;
    use std::path::PathBuf;

    fn test_app(config: DocketConfig, start_page: Option<PageKey>) -> DocketApp {
        DocketApp::new(
            config,
            AppOptions {
                config_path: PathBuf::from("config.toml"),
                assets_dir: PathBuf::from("assets"),
                start_page,
            },
        )
    }

    #[test]
    fn boot_target_prefers_address_fragment() {
        let app = test_app(DocketConfig::default(), Some(PageKey::Profile));
        assert_eq!(app.boot_target("#tasks"), PageKey::Tasks);
        assert_eq!(app.boot_target("hearings"), PageKey::Hearings);
    }

    #[test]
    fn boot_target_falls_back_to_cli_page() {
        let app = test_app(DocketConfig::default(), Some(PageKey::Profile));
        assert_eq!(app.boot_target(""), PageKey::Profile);
        assert_eq!(app.boot_target("#unknown"), PageKey::Profile);
    }

    #[test]
    fn boot_target_uses_configured_default() {
        let mut config = DocketConfig::default();
        config.routes.default_page = PageKey::Hearings;
        let app = test_app(config, None);
        assert_eq!(app.boot_target(""), PageKey::Hearings);
        assert_eq!(app.boot_target("#settings"), PageKey::Hearings);
    }

    #[test]
    fn successful_fetch_becomes_current_page() {
        let mut app = test_app(DocketConfig::default(), None);
        let nav = app.loader.begin(PageKey::Tasks);

        app.finish_fetch(FetchDone {
            seq: nav.seq,
            page: nav.page,
            result: Ok("<section>tasks</section>".into()),
        });

        assert_eq!(app.loader.current(), Some(PageKey::Tasks));
    }

    #[test]
    fn failed_fetch_keeps_previous_page() {
        let mut app = test_app(DocketConfig::default(), None);

        let nav = app.loader.begin(PageKey::Cases);
        app.finish_fetch(FetchDone {
            seq: nav.seq,
            page: nav.page,
            result: Ok("<section>cases</section>".into()),
        });

        let nav = app.loader.begin(PageKey::Profile);
        app.finish_fetch(FetchDone {
            seq: nav.seq,
            page: nav.page,
            result: Err("HTTP status 404 for pages/profile.html".into()),
        });

        assert_eq!(app.loader.current(), Some(PageKey::Cases));
    }

    #[test]
    fn stale_fetch_is_discarded() {
        let mut app = test_app(DocketConfig::default(), None);

        let first = app.loader.begin(PageKey::Cases);
        let second = app.loader.begin(PageKey::Tasks);

        app.finish_fetch(FetchDone {
            seq: second.seq,
            page: second.page,
            result: Ok("<section>tasks</section>".into()),
        });
        app.finish_fetch(FetchDone {
            seq: first.seq,
            page: first.page,
            result: Ok("<section>cases</section>".into()),
        });

        assert_eq!(app.loader.current(), Some(PageKey::Tasks));
    }
}
