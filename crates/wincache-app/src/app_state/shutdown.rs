//! Graceful shutdown: destroy every registered window.

use super::core::WincacheApp;

impl WincacheApp {
    /// Switch the registry into quitting mode and destroy all windows.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        let destroyed = self.windows.application_quit();
        self.close_requests.borrow_mut().clear();
        self.log_registry_events();

        tracing::info!(destroyed, "Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
