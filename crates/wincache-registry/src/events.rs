//! Registry lifecycle events.

use wincache_common::HandleId;

/// Events queued by the registry for the host loop to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A window was created and registered.
    Added { name: String, id: HandleId },
    /// A registered window was shown.
    Shown { name: String },
    /// A registered window was hidden, either directly or in place of a close.
    Hidden { name: String },
    /// A window left the registry and its native window is gone.
    Removed { name: String },
    /// The registry switched to destroy-on-close for the rest of the process.
    QuitStarted,
}
