use wincache_common::{CloseBehavior, HandleId, WindowStatus};

use crate::host::WindowHandle;

/// A window owned by the registry under a unique name.
#[derive(Debug)]
pub struct ManagedWindow<H> {
    pub(crate) name: String,
    pub(crate) handle: H,
    /// Close policy captured from the registry default when the window was added.
    pub(crate) close_behavior: CloseBehavior,
    /// Closing this window shuts down the whole application.
    pub(crate) triggers_app_quit: bool,
    pub(crate) status: WindowStatus,
}

impl<H: WindowHandle> ManagedWindow<H> {
    pub(crate) fn new(
        name: String,
        handle: H,
        close_behavior: CloseBehavior,
        triggers_app_quit: bool,
    ) -> Self {
        Self {
            name,
            handle,
            close_behavior,
            triggers_app_quit,
            status: WindowStatus::Open,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the underlying native window.
    pub fn id(&self) -> HandleId {
        self.handle.id()
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn close_behavior(&self) -> CloseBehavior {
        self.close_behavior
    }

    pub fn triggers_app_quit(&self) -> bool {
        self.triggers_app_quit
    }

    pub fn status(&self) -> WindowStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == WindowStatus::Open
    }

    /// Consume the entry, returning the native handle.
    pub fn into_handle(self) -> H {
        self.handle
    }
}
