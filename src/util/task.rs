//! Fire-and-forget async work on the browser event loop.

use std::future::Future;

/// Run `task` on the browser event loop. Native builds have no event loop
/// and drop it unpolled.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}
