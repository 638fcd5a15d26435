//! Close policy and host close-event handling.

use tracing::{debug, info};

use wincache_common::{CloseBehavior, HandleId, WindowStatus};

use crate::entry::ManagedWindow;
use crate::events::RegistryEvent;
use crate::host::{WindowHandle, WindowHost};

use super::WindowRegistry;

/// Which window [`WindowRegistry::close`] acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTarget<'a> {
    Name(&'a str),
    Handle(HandleId),
}

impl<'a> From<&'a str> for CloseTarget<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<HandleId> for CloseTarget<'_> {
    fn from(id: HandleId) -> Self {
        Self::Handle(id)
    }
}

/// What the host should do after reporting a close event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The window is not registered; the host applies its default.
    Untracked,
    /// The close was cancelled and the window hidden. Prevent the default.
    Hidden,
    /// The close went ahead: the registry destroyed the native window and
    /// drops the entry when the host reports the closed event.
    Closing,
    /// The registry already destroyed and removed the window.
    Destroyed,
}

impl CloseOutcome {
    /// Whether the host must suppress its default destroy action. Every
    /// tracked window is torn down by the registry itself.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::Untracked)
    }
}

impl<H: WindowHandle> WindowRegistry<H> {
    /// Set the close policy for `close` and for windows added afterwards.
    pub fn set_close_behavior(&mut self, behavior: CloseBehavior) {
        self.close_behavior = behavior;
    }

    /// Set the close policy from its config spelling (`"hide"` or `"close"`).
    ///
    /// Unrecognized values are ignored and `false` is returned.
    pub fn set_close_behavior_str(&mut self, option: &str) -> bool {
        match option.parse::<CloseBehavior>() {
            Ok(behavior) => {
                self.set_close_behavior(behavior);
                true
            }
            Err(e) => {
                debug!("ignoring close behavior: {e}");
                false
            }
        }
    }

    /// Close a window by name or by native handle id.
    pub fn close<'a>(&mut self, target: impl Into<CloseTarget<'a>>) -> bool {
        match target.into() {
            CloseTarget::Name(name) => self.close_by_name(name),
            CloseTarget::Handle(id) => self.close_by_handle(id),
        }
    }

    /// Close a window under the current close behavior: hide it, or ask the
    /// native window to close (which comes back as a host close event).
    pub fn close_by_name(&mut self, name: &str) -> bool {
        match self.close_behavior {
            CloseBehavior::Hide => self.hide(name),
            CloseBehavior::Close => match self.get(name) {
                Some(entry) => {
                    entry.handle.close();
                    true
                }
                None => false,
            },
        }
    }

    /// Resolve a native handle id to its registry name and close it.
    pub fn close_by_handle(&mut self, id: HandleId) -> bool {
        let name = self.find_name(|w| w.id() == id).map(str::to_owned);
        match name {
            Some(name) => self.close_by_name(&name),
            None => false,
        }
    }

    /// Handle the host's cancelable close event for `name`.
    pub fn handle_close<W>(&mut self, host: &W, name: &str) -> CloseOutcome
    where
        W: WindowHost<Handle = H>,
    {
        let Some(entry) = self.get(name) else {
            return CloseOutcome::Untracked;
        };
        let triggers_app_quit = entry.triggers_app_quit;
        let close_behavior = entry.close_behavior;

        if triggers_app_quit && !self.quitting {
            info!(name = %name, "closing window quits the application");
            self.quitting = true;
            self.push_event(RegistryEvent::QuitStarted);
        }

        if self.quitting {
            self.remove(name);
            if triggers_app_quit {
                host.request_application_quit();
            }
            return CloseOutcome::Destroyed;
        }

        match close_behavior {
            CloseBehavior::Hide => {
                self.hide(name);
                debug!(name = %name, "close intercepted, window hidden");
                CloseOutcome::Hidden
            }
            CloseBehavior::Close => {
                if let Some(entry) = self.entries.get_mut(name) {
                    entry.handle.destroy();
                    entry.status = WindowStatus::Closed;
                }
                debug!(name = %name, "window closing");
                CloseOutcome::Closing
            }
        }
    }

    /// Handle the host's closed event, fired once the native window is gone.
    ///
    /// The entry is removed without calling `destroy` again and returned
    /// with status `Closed`; `None` if `name` was no longer registered.
    /// Accepts entries still open (the native side closed on its own) and
    /// entries already destroyed by a [`CloseOutcome::Closing`] close.
    pub fn handle_closed<W>(&mut self, host: &W, name: &str) -> Option<ManagedWindow<H>>
    where
        W: WindowHost<Handle = H>,
    {
        let mut entry = self.entries.remove(name)?;
        entry.status = WindowStatus::Closed;
        debug!(name = %name, "window closed");
        self.push_event(RegistryEvent::Removed {
            name: name.to_string(),
        });
        if entry.triggers_app_quit {
            host.request_application_quit();
        }
        Some(entry)
    }
}
