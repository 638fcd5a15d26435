use tracing::{debug, info, warn};

use wincache_common::{RegistryError, WindowOptions, WindowStatus};

use crate::entry::ManagedWindow;
use crate::events::RegistryEvent;
use crate::host::{WindowHandle, WindowHost};

use super::WindowRegistry;

// =============================================================================
// CREATION / TEARDOWN
// =============================================================================

impl<H: WindowHandle> WindowRegistry<H> {
    /// Create a window through `host` and register it under `name`.
    ///
    /// The new window takes the registry's current close behavior. If `url`
    /// is given it is loaded right away; a failed load destroys the window
    /// and nothing is registered.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if `name` is taken (the existing window is left
    /// untouched), or whatever the host reports for creation or loading.
    pub fn add<W>(
        &mut self,
        host: &W,
        name: &str,
        options: &WindowOptions,
        url: Option<&str>,
        triggers_app_quit: bool,
    ) -> Result<&mut ManagedWindow<H>, RegistryError>
    where
        W: WindowHost<Handle = H>,
    {
        if self.has(name) {
            warn!(name = %name, "window already exists");
            return Err(RegistryError::AlreadyExists(name.to_string()));
        }

        let mut handle = host.create_window(options)?;

        if let Some(url) = url {
            if let Err(e) = handle.load_url(url) {
                warn!(name = %name, url = %url, "failed to load url: {e}");
                handle.destroy();
                return Err(e);
            }
        }

        // A closed window still waiting for its closed event gives up the name.
        if self.entries.remove(name).is_some() {
            debug!(name = %name, "dropped closed window awaiting its closed event");
        }

        let id = handle.id();
        debug!(name = %name, %id, triggers_app_quit, "window added");
        self.push_event(RegistryEvent::Added {
            name: name.to_string(),
            id,
        });

        let entry = ManagedWindow::new(
            name.to_string(),
            handle,
            self.close_behavior,
            triggers_app_quit,
        );
        Ok(self.entries.entry(name.to_string()).or_insert(entry))
    }

    /// Destroy a window and drop it from the registry.
    ///
    /// Returns the removed entry, or `None` if `name` is not registered.
    /// A window already destroyed by an allowed close is dropped without
    /// destroying it again.
    pub fn remove(&mut self, name: &str) -> Option<ManagedWindow<H>> {
        let mut entry = self.entries.remove(name)?;
        if entry.is_open() {
            entry.handle.destroy();
            entry.status = WindowStatus::Closed;
        }
        debug!(name = %name, "window removed");
        self.push_event(RegistryEvent::Removed {
            name: name.to_string(),
        });
        Some(entry)
    }

    /// Destroy every registered window. Returns how many were removed.
    pub fn remove_all(&mut self) -> usize {
        let names: Vec<String> = self.entries.keys().cloned().collect();
        let mut removed = 0;
        for name in names {
            if self.remove(&name).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Enter quitting mode and destroy every window.
    ///
    /// Call this from the host's quit sequence. Returns the number of
    /// windows destroyed; repeated calls are harmless.
    pub fn application_quit(&mut self) -> usize {
        if !self.quitting {
            self.quitting = true;
            self.push_event(RegistryEvent::QuitStarted);
        }
        let removed = self.remove_all();
        info!(removed, "application quitting, windows destroyed");
        removed
    }

    // =========================================================================
    // VISIBILITY
    // =========================================================================

    /// Show a window. Returns `false` if `name` is not registered.
    pub fn show(&mut self, name: &str) -> bool {
        let Some(entry) = self.get(name) else {
            return false;
        };
        entry.handle.show();
        self.push_event(RegistryEvent::Shown {
            name: name.to_string(),
        });
        true
    }

    /// Hide a window. Returns `false` if `name` is not registered.
    pub fn hide(&mut self, name: &str) -> bool {
        let Some(entry) = self.get(name) else {
            return false;
        };
        entry.handle.hide();
        self.push_event(RegistryEvent::Hidden {
            name: name.to_string(),
        });
        true
    }

    /// Show a window and give it focus.
    pub fn open(&mut self, name: &str) -> bool {
        if !self.show(name) {
            return false;
        }
        if let Some(entry) = self.get(name) {
            entry.handle.focus();
        }
        true
    }
}
