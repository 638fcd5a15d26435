//! Creation of the configured startup windows.

use winit::event_loop::ActiveEventLoop;

use super::core::WincacheApp;

impl WincacheApp {
    /// Create and register every window declared in config.
    /// Returns the number of windows created.
    pub(super) fn create_configured_windows(&mut self, event_loop: &ActiveEventLoop) -> usize {
        let host = self.host(event_loop);
        let mut created = 0;

        for spec in &self.config.windows {
            match self.windows.add(
                &host,
                &spec.name,
                &spec.options,
                spec.url.as_deref(),
                spec.triggers_app_quit,
            ) {
                Ok(entry) => {
                    tracing::info!(name = %entry.name(), id = %entry.id(), "Window created");
                    created += 1;
                }
                Err(e) => {
                    tracing::error!(name = %spec.name, "Failed to create window: {e}");
                }
            }
        }

        created
    }
}
