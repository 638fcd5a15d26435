//! Named window registry for desktop hosts.
//!
//! Lets the rest of the main process look up native windows by a logical
//! name instead of passing handles around, and turns a user "close" into
//! a hide so window state survives until the application really quits.
//!
//! The native window system is reached only through the [`WindowHost`] and
//! [`WindowHandle`] traits, so the registry runs the same against winit,
//! a webview toolkit, or a test double.

pub mod entry;
pub mod events;
pub mod host;
pub mod registry;

pub use entry::ManagedWindow;
pub use events::RegistryEvent;
pub use host::{WindowHandle, WindowHost};
pub use registry::{CloseOutcome, CloseTarget, WindowRegistry};
