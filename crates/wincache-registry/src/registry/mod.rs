//! `WindowRegistry`: name-keyed table of managed windows.
//!
//! The registry owns every window it creates. Host close events are routed
//! in through [`WindowRegistry::handle_close`] and
//! [`WindowRegistry::handle_closed`]; depending on the close policy and
//! whether the application is quitting, a close becomes a hide or a real
//! teardown.
//!
//! A window destroyed by an allowed close stays in the table with status
//! `Closed` until its closed event arrives, so the host can still route that
//! event. Such an entry is invisible to every lookup except
//! [`WindowRegistry::name_for`].

use std::collections::HashMap;

use wincache_common::{CloseBehavior, HandleId};

use crate::entry::ManagedWindow;
use crate::events::RegistryEvent;
use crate::host::WindowHandle;

mod close;
mod lifecycle;


pub use close::{CloseOutcome, CloseTarget};

/// Registry of named native windows.
///
/// Construct one per application and keep it in the top-level app state.
#[derive(Debug)]
pub struct WindowRegistry<H> {
    entries: HashMap<String, ManagedWindow<H>>,
    /// Once set, every close destroys instead of hiding.
    quitting: bool,
    /// Policy applied to windows added from now on, and to `close`.
    close_behavior: CloseBehavior,
    /// Pending lifecycle events for the host loop.
    events: Vec<RegistryEvent>,
}

impl<H: WindowHandle> WindowRegistry<H> {
    pub fn new() -> Self {
        Self::with_close_behavior(CloseBehavior::default())
    }

    pub fn with_close_behavior(close_behavior: CloseBehavior) -> Self {
        Self {
            entries: HashMap::new(),
            quitting: false,
            close_behavior,
            events: Vec::new(),
        }
    }

    /// Get a window entry by name.
    pub fn get(&self, name: &str) -> Option<&ManagedWindow<H>> {
        self.entries.get(name).filter(|w| w.is_open())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ManagedWindow<H>> {
        self.entries.get_mut(name).filter(|w| w.is_open())
    }

    /// Get just the native handle for a window.
    pub fn get_handle(&self, name: &str) -> Option<&H> {
        self.get(name).map(|w| &w.handle)
    }

    pub fn get_handle_mut(&mut self, name: &str) -> Option<&mut H> {
        self.get_mut(name).map(|w| &mut w.handle)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// First entry matching `predicate`. Iteration order is unspecified.
    pub fn find<P>(&self, mut predicate: P) -> Option<&ManagedWindow<H>>
    where
        P: FnMut(&ManagedWindow<H>) -> bool,
    {
        self.all().find(|w| predicate(w))
    }

    /// Like [`find`](Self::find), but returns the registry key.
    pub fn find_name<P>(&self, predicate: P) -> Option<&str>
    where
        P: FnMut(&ManagedWindow<H>) -> bool,
    {
        self.find(predicate).map(|w| w.name.as_str())
    }

    /// Registry key for a native window id, including a window whose
    /// native side is already gone but whose closed event is still pending.
    ///
    /// Hosts use this to route native events back to their entry.
    pub fn name_for(&self, id: HandleId) -> Option<&str> {
        self.entries
            .values()
            .find(|w| w.id() == id)
            .map(|w| w.name.as_str())
    }

    /// Iterate all registered windows.
    pub fn all(&self) -> impl Iterator<Item = &ManagedWindow<H>> {
        self.entries.values().filter(|w| w.is_open())
    }

    /// Names of all registered windows.
    pub fn names(&self) -> Vec<String> {
        self.all().map(|w| w.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.all().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_application_quitting(&self) -> bool {
        self.quitting
    }

    pub fn close_behavior(&self) -> CloseBehavior {
        self.close_behavior
    }

    /// Drain all pending registry events.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }
}

impl<H: WindowHandle> Default for WindowRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
