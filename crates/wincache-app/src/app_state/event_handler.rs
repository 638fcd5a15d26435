//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use wincache_common::HandleId;
use wincache_registry::RegistryEvent;

use crate::native::handle_id;

use super::core::WincacheApp;
use super::routing;

impl ApplicationHandler for WincacheApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        if self.create_configured_windows(event_loop) == 0 {
            tracing::error!("No windows could be created, exiting");
            event_loop.exit();
        }
        self.log_registry_events();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let id = handle_id(window_id);

        match event {
            WindowEvent::CloseRequested => {
                let host = self.host(event_loop);
                if routing::route_close_request(&mut self.windows, &host, id).is_none() {
                    tracing::debug!(%id, "Close requested for untracked window");
                }
            }

            WindowEvent::Destroyed => {
                let host = self.host(event_loop);
                if let Some(name) = routing::route_closed(&mut self.windows, &host, id) {
                    tracing::info!(name = %name, "Window closed");
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if self.windows.name_for(id).is_some() {
                    self.handle_keyboard_input(id, event);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let host = self.host(event_loop);
        routing::drain_close_requests(&mut self.windows, &host, &self.close_requests);

        self.log_registry_events();

        if routing::should_exit_when_empty(&self.windows, self.started) {
            tracing::info!("All windows closed, exiting");
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl WincacheApp {
    /// Escape closes the focused window through the registry; digit keys
    /// reopen the configured windows by position.
    fn handle_keyboard_input(&mut self, id: HandleId, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        match &event.logical_key {
            Key::Named(NamedKey::Escape) => {
                self.windows.close(id);
            }
            Key::Character(c) => {
                let Some(index) = c.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                    return;
                };
                let Some(name) = self.config.windows.get(index).map(|s| s.name.clone()) else {
                    return;
                };
                if !self.windows.open(&name) {
                    tracing::debug!(name = %name, "Window no longer registered");
                }
            }
            _ => {}
        }
    }

    pub(super) fn log_registry_events(&mut self) {
        for event in self.windows.drain_events() {
            match event {
                RegistryEvent::Added { name, id } => {
                    tracing::debug!(name = %name, %id, "registry: added");
                }
                RegistryEvent::Shown { name } => tracing::debug!(name = %name, "registry: shown"),
                RegistryEvent::Hidden { name } => tracing::debug!(name = %name, "registry: hidden"),
                RegistryEvent::Removed { name } => {
                    tracing::debug!(name = %name, "registry: removed");
                }
                RegistryEvent::QuitStarted => tracing::info!("registry: application quitting"),
            }
        }
    }
}
