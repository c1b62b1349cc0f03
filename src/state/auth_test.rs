use super::*;
use crate::config::ClientConfig;

fn user() -> User {
    User { id: 1, email: "admin@planta.com".to_owned(), is_active: true, company_id: Some(3) }
}

// =============================================================================
// AuthState
// =============================================================================

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.status(), AuthStatus::PENDING);
}

#[test]
fn signed_in_state_reports_authenticated() {
    let state = AuthState::signed_in(user());
    assert_eq!(state.status(), AuthStatus::SIGNED_IN);
}

#[test]
fn anonymous_state_is_ready() {
    assert_eq!(AuthState::anonymous().status(), AuthStatus::ANONYMOUS);
}

// =============================================================================
// session flows (native: per-thread token store, no network)
// =============================================================================

#[cfg(not(feature = "csr"))]
#[test]
fn restore_without_token_is_anonymous() {
    let api = ApiClient::new(ClientConfig::default());
    let state = futures::executor::block_on(restore_session(&api));
    assert_eq!(state, AuthState::anonymous());
}

#[cfg(not(feature = "csr"))]
#[test]
fn restore_discards_rejected_token() {
    storage::save_token("expired.jwt");
    let api = ApiClient::new(ClientConfig::default());
    let state = futures::executor::block_on(restore_session(&api));
    assert_eq!(state, AuthState::anonymous());
    assert_eq!(storage::load_token(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn sign_in_surfaces_transport_failure() {
    let api = ApiClient::new(ClientConfig::default());
    let result = futures::executor::block_on(sign_in(&api, "admin@planta.com", "secreto"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn sign_out_is_anonymous() {
    assert_eq!(sign_out(), AuthState::anonymous());
}

#[cfg(not(feature = "csr"))]
#[test]
fn sign_out_clears_stored_token() {
    storage::save_token("live.jwt");
    sign_out();
    assert_eq!(storage::load_token(), None);
}
