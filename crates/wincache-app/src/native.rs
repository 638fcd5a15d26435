//! winit + wry backend for the window registry.
//!
//! `NativeWindow` pairs a winit window with a lazily created webview for
//! URL content. `WinitHost` borrows the active event loop for the duration
//! of one callback and creates windows through it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};
use wry::{WebView, WebViewBuilder};

use wincache_common::{HandleId, RegistryError, WindowOptions};
use wincache_registry::{WindowHandle, WindowHost};

/// Synthetic close requests raised by `WindowHandle::close`, drained by the
/// app on `about_to_wait`. winit has no programmatic close event.
pub type CloseQueue = Rc<RefCell<Vec<HandleId>>>;

pub fn handle_id(window_id: WindowId) -> HandleId {
    HandleId(u64::from(window_id))
}

// =============================================================================
// NATIVE WINDOW
// =============================================================================

/// A winit window, optionally hosting a webview.
pub struct NativeWindow {
    id: HandleId,
    window: Option<Window>,
    webview: Option<WebView>,
    close_requests: CloseQueue,
}

impl NativeWindow {
    fn new(window: Window, close_requests: CloseQueue) -> Self {
        Self {
            id: handle_id(window.id()),
            window: Some(window),
            webview: None,
            close_requests,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.window.is_none()
    }
}

impl std::fmt::Debug for NativeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeWindow")
            .field("id", &self.id)
            .field("destroyed", &self.is_destroyed())
            .field("has_webview", &self.webview.is_some())
            .finish()
    }
}

impl WindowHandle for NativeWindow {
    fn id(&self) -> HandleId {
        self.id
    }

    fn load_url(&mut self, url: &str) -> Result<(), RegistryError> {
        if let Some(webview) = &self.webview {
            return webview
                .load_url(url)
                .map_err(|e| RegistryError::LoadFailed(e.to_string()));
        }

        let Some(window) = &self.window else {
            return Err(RegistryError::LoadFailed(format!(
                "window {} already destroyed",
                self.id
            )));
        };

        let webview = WebViewBuilder::new()
            .with_url(url)
            .build(window)
            .map_err(|e| RegistryError::LoadFailed(e.to_string()))?;
        debug!(id = %self.id, url = %url, "webview created");
        self.webview = Some(webview);
        Ok(())
    }

    fn show(&self) {
        if let Some(window) = &self.window {
            window.set_visible(true);
        }
    }

    fn hide(&self) {
        if let Some(window) = &self.window {
            window.set_visible(false);
        }
    }

    fn focus(&self) {
        if let Some(window) = &self.window {
            window.focus_window();
        }
    }

    fn close(&self) {
        if self.window.is_some() {
            self.close_requests.borrow_mut().push(self.id);
        }
    }

    fn destroy(&mut self) {
        // Dropping the window makes winit report `Destroyed`, which drops a
        // closing entry from the registry. Webview must go before its parent.
        self.webview = None;
        if self.window.take().is_some() {
            debug!(id = %self.id, "native window destroyed");
        }
    }
}

// =============================================================================
// HOST
// =============================================================================

/// Creates native windows on the active event loop.
pub struct WinitHost<'a> {
    event_loop: &'a ActiveEventLoop,
    close_requests: CloseQueue,
}

impl<'a> WinitHost<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop, close_requests: CloseQueue) -> Self {
        Self {
            event_loop,
            close_requests,
        }
    }
}

impl WindowHost for WinitHost<'_> {
    type Handle = NativeWindow;

    fn create_window(&self, options: &WindowOptions) -> Result<NativeWindow, RegistryError> {
        let attrs = WindowAttributes::default()
            .with_title(options.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(options.width),
                f64::from(options.height),
            ))
            .with_visible(options.visible)
            .with_resizable(options.resizable);

        let window = self
            .event_loop
            .create_window(attrs)
            .map_err(|e| RegistryError::CreateFailed(e.to_string()))?;

        Ok(NativeWindow::new(window, self.close_requests.clone()))
    }

    fn request_application_quit(&self) {
        info!("application quit requested");
        self.event_loop.exit();
    }
}
