//! The window system the registry drives.

use wincache_common::{HandleId, RegistryError, WindowOptions};

/// Creates native windows and owns the application's quit path.
pub trait WindowHost {
    type Handle: WindowHandle;

    /// Create a new native window from `options`.
    fn create_window(&self, options: &WindowOptions) -> Result<Self::Handle, RegistryError>;

    /// Ask the host to terminate the whole application.
    fn request_application_quit(&self);
}

/// A single native window.
///
/// `close` behaves like a user clicking the close button: the host delivers
/// a close event which it routes back through
/// [`WindowRegistry::handle_close`](crate::WindowRegistry::handle_close).
/// `destroy` tears the native window down unconditionally.
pub trait WindowHandle {
    fn id(&self) -> HandleId;

    /// Navigate the window's content to `url`.
    fn load_url(&mut self, url: &str) -> Result<(), RegistryError>;

    fn show(&self);

    fn hide(&self);

    fn focus(&self);

    fn close(&self);

    fn destroy(&mut self);
}
