//! Routing of native window events into the registry.
//!
//! Kept free of winit types so the event loop's decisions run against any
//! `WindowHost`.

use wincache_common::HandleId;
use wincache_registry::{CloseOutcome, WindowHandle, WindowHost, WindowRegistry};

use crate::native::CloseQueue;

/// Route a close request for native window `id`.
///
/// Returns `None` when the id belongs to no open window.
pub(super) fn route_close_request<W: WindowHost>(
    windows: &mut WindowRegistry<W::Handle>,
    host: &W,
    id: HandleId,
) -> Option<CloseOutcome> {
    let name = windows.name_for(id)?.to_owned();
    let outcome = windows.handle_close(host, &name);
    if outcome == CloseOutcome::Untracked {
        return None;
    }
    tracing::debug!(name = %name, ?outcome, "Close request routed");
    Some(outcome)
}

/// Route the closed event for native window `id`, dropping its entry.
///
/// Returns the name of the dropped window.
pub(super) fn route_closed<W: WindowHost>(
    windows: &mut WindowRegistry<W::Handle>,
    host: &W,
    id: HandleId,
) -> Option<String> {
    let name = windows.name_for(id)?.to_owned();
    windows.handle_closed(host, &name).map(|_| name)
}

/// Route every close request queued by `WindowHandle::close`.
///
/// Returns how many requests reached a registered window.
pub(super) fn drain_close_requests<W: WindowHost>(
    windows: &mut WindowRegistry<W::Handle>,
    host: &W,
    queue: &CloseQueue,
) -> usize {
    let pending: Vec<HandleId> = queue.borrow_mut().drain(..).collect();
    let mut routed = 0;
    for id in pending {
        if route_close_request(windows, host, id).is_some() {
            routed += 1;
        }
    }
    routed
}

/// The app exits on its own once every window has been closed for good,
/// outside the quit path.
pub(super) fn should_exit_when_empty<H: WindowHandle>(
    windows: &WindowRegistry<H>,
    started: bool,
) -> bool {
    started && windows.is_empty() && !windows.is_application_quitting()
}
