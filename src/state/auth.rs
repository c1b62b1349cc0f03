//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feeds the route guard through `status()` and drives the header's
//! public/authenticated split. The session flows are plain async functions
//! returning the next state; `App` and the login page write the result into
//! the provided signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::{ApiClient, ApiError};
use crate::net::types::User;
use crate::router::AuthStatus;
use crate::util::storage;

/// Current user plus whether the initial session check is still running.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading: nothing may redirect until the stored token is checked.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Snapshot consumed by the route guard.
    pub fn status(&self) -> AuthStatus {
        AuthStatus { loading: self.loading, authenticated: self.is_authenticated() }
    }
}

/// Resolve the stored token into a session.
///
/// An invalid or expired token is discarded and the viewer becomes
/// anonymous; this never fails.
pub async fn restore_session(api: &ApiClient) -> AuthState {
    if storage::load_token().is_none() {
        return AuthState::anonymous();
    }
    match api.me().await {
        Ok(user) => {
            log::info!("session restored for {}", user.email);
            AuthState::signed_in(user)
        }
        Err(err) => {
            log::warn!("stored session rejected: {err}");
            storage::clear_token();
            AuthState::anonymous()
        }
    }
}

/// Log in with email and password, persist the token and load the profile.
///
/// # Errors
///
/// Returns the backend's rejection of the credentials, or the profile
/// failure (in which case the fresh token is discarded).
pub async fn sign_in(api: &ApiClient, email: &str, password: &str) -> Result<AuthState, ApiError> {
    let token = api.login(email, password).await?;
    storage::save_token(&token.access_token);
    match api.me().await {
        Ok(user) => Ok(AuthState::signed_in(user)),
        Err(err) => {
            storage::clear_token();
            Err(err)
        }
    }
}

/// Forget the session locally. The backend keeps no server-side session.
pub fn sign_out() -> AuthState {
    storage::clear_token();
    AuthState::anonymous()
}
