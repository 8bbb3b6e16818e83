//! Polling for shell view events, fetch completions, and config reloads.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use super::core::DocketApp;
use super::types::POLL_INTERVAL;

impl DocketApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_view_events();
            self.poll_fetch_completions();
            self.poll_config_reload();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }
}
