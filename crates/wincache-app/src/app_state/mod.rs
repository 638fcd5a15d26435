//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window registry and routes native close events
//! through it.

mod core;
mod event_handler;
mod init;
mod routing;
mod shutdown;

pub use core::WincacheApp;
