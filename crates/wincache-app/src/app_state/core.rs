//! WincacheApp struct definition and constructor.

use std::rc::Rc;

use winit::event_loop::ActiveEventLoop;

use wincache_config::WincacheConfig;
use wincache_registry::WindowRegistry;

use crate::native::{CloseQueue, NativeWindow, WinitHost};

/// Top-level application state.
pub struct WincacheApp {
    pub(super) config: WincacheConfig,

    // Named native windows
    pub(super) windows: WindowRegistry<NativeWindow>,

    // Close requests raised by `WindowHandle::close`
    pub(super) close_requests: CloseQueue,

    // Configured windows have been created
    pub(super) started: bool,
}

impl WincacheApp {
    pub fn new(config: WincacheConfig) -> Self {
        let windows = WindowRegistry::with_close_behavior(config.registry.close_behavior);
        Self {
            config,
            windows,
            close_requests: CloseQueue::default(),
            started: false,
        }
    }

    /// Apply a close behavior given on the command line.
    pub fn override_close_behavior(&mut self, option: &str) {
        if self.windows.set_close_behavior_str(option) {
            tracing::info!("Close behavior set to {}", self.windows.close_behavior());
        } else {
            tracing::warn!("Ignoring unknown close behavior '{option}'");
        }
    }

    /// Host bound to the current event loop callback.
    pub(super) fn host<'a>(&self, event_loop: &'a ActiveEventLoop) -> WinitHost<'a> {
        WinitHost::new(event_loop, Rc::clone(&self.close_requests))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wincache_common::CloseBehavior;

    #[test]
    fn new_app_uses_configured_close_behavior() {
        let mut config = WincacheConfig::default();
        config.registry.close_behavior = CloseBehavior::Close;
        let app = WincacheApp::new(config);

        assert_eq!(app.windows.close_behavior(), CloseBehavior::Close);
        assert!(app.windows.is_empty());
        assert!(!app.started);
    }

    #[test]
    fn override_close_behavior_ignores_unknown() {
        let mut app = WincacheApp::new(WincacheConfig::default());

        app.override_close_behavior("minimize");
        assert_eq!(app.windows.close_behavior(), CloseBehavior::Hide);

        app.override_close_behavior("close");
        assert_eq!(app.windows.close_behavior(), CloseBehavior::Close);
    }
}
