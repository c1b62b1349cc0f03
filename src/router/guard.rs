//! Authentication gate evaluated before page selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard never touches history. It returns a `Decision`; the navigator
//! applies any redirect exactly once and the renderer shows the decided page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::route::Route;

/// Snapshot of the session the guard decides against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthStatus {
    /// The initial session check is still outstanding.
    pub loading: bool,
    pub authenticated: bool,
}

impl AuthStatus {
    pub const PENDING: Self = Self { loading: true, authenticated: false };
    pub const ANONYMOUS: Self = Self { loading: false, authenticated: false };
    pub const SIGNED_IN: Self = Self { loading: false, authenticated: true };
}

/// Outcome of evaluating the gate for one location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session check pending: show a placeholder, do not redirect.
    Pending,
    /// Show this page at the current location.
    Render(Route),
    /// Replace the current location with this route and show it.
    Redirect(Route),
}

impl Decision {
    /// Page to render for this decision, if any.
    pub fn route(self) -> Option<Route> {
        match self {
            Decision::Pending => None,
            Decision::Render(route) | Decision::Redirect(route) => Some(route),
        }
    }

    pub fn is_redirect(self) -> bool {
        matches!(self, Decision::Redirect(_))
    }
}

/// Decide what a viewer with `status` sees at the normalized `path`.
pub fn evaluate(path: &str, status: AuthStatus) -> Decision {
    if status.loading {
        return Decision::Pending;
    }
    let known = Route::from_path(path);
    if !status.authenticated && !known.is_some_and(Route::is_public) {
        return Decision::Redirect(Route::Login);
    }
    Decision::Render(known.unwrap_or(Route::Login))
}
