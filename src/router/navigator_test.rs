use super::*;
use crate::router::history::MemoryHistory;
use crate::router::route::Route;

fn navigator_at(path: &str) -> Navigator<MemoryHistory> {
    Navigator::new(MemoryHistory::new(path))
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_updates_location_and_pushes_history() {
    let mut nav = navigator_at("/");
    let decision = nav.navigate("/work-orders/", AuthStatus::SIGNED_IN);
    assert_eq!(decision, Decision::Render(Route::WorkOrders));
    assert_eq!(nav.location().path(), "/work-orders");
    assert_eq!(nav.history().entries(), ["/", "/work-orders"]);
}

#[test]
fn navigate_keeps_query_string() {
    let mut nav = navigator_at("/");
    nav.navigate("/billing?status=approved", AuthStatus::SIGNED_IN);
    assert_eq!(nav.location().query_param("status").as_deref(), Some("approved"));
    assert_eq!(nav.history().current(), "/billing?status=approved");
}

#[test]
fn anonymous_navigate_to_protected_leaves_login_in_history() {
    let mut nav = navigator_at("/");
    let decision = nav.navigate("/settings/general", AuthStatus::ANONYMOUS);
    assert_eq!(decision, Decision::Redirect(Route::Login));
    assert_eq!(nav.location().path(), "/login");
    assert_eq!(nav.history().entries(), ["/", "/login"]);
}

#[test]
fn anonymous_navigate_to_public_page_does_not_redirect() {
    let mut nav = navigator_at("/");
    for path in ["/login", "/register", "/pricing", "/"] {
        let decision = nav.navigate(path, AuthStatus::ANONYMOUS);
        assert!(!decision.is_redirect(), "{path}");
        assert_eq!(nav.location().path(), path);
    }
}

#[test]
fn navigate_while_pending_keeps_requested_location() {
    let mut nav = navigator_at("/");
    let decision = nav.navigate("/dashboard", AuthStatus::PENDING);
    assert_eq!(decision, Decision::Pending);
    assert_eq!(nav.location().path(), "/dashboard");
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_after_session_check_redirects_anonymous_deep_link() {
    let mut nav = navigator_at("/archives/tools");
    assert_eq!(nav.settle(AuthStatus::PENDING), Decision::Pending);
    assert_eq!(nav.settle(AuthStatus::ANONYMOUS), Decision::Redirect(Route::Login));
    assert_eq!(nav.history().entries(), ["/login"]);
}

#[test]
fn settle_after_session_check_keeps_signed_in_deep_link() {
    let mut nav = navigator_at("/archives/tools");
    assert_eq!(nav.settle(AuthStatus::SIGNED_IN), Decision::Render(Route::Tools));
    assert_eq!(nav.history().entries(), ["/archives/tools"]);
}

#[test]
fn settle_is_idempotent_after_redirect() {
    let mut nav = navigator_at("/dashboard");
    nav.settle(AuthStatus::ANONYMOUS);
    assert_eq!(nav.settle(AuthStatus::ANONYMOUS), Decision::Render(Route::Login));
    assert_eq!(nav.history().entries(), ["/login"]);
}

#[test]
fn unknown_path_renders_login_without_failing() {
    let mut nav = navigator_at("/");
    assert_eq!(nav.navigate("/does/not/exist", AuthStatus::SIGNED_IN), Decision::Render(Route::Login));
    assert_eq!(nav.location().path(), "/does/not/exist");
}

// =============================================================
// pop_state
// =============================================================

#[test]
fn back_and_forward_restore_rendered_page() {
    let mut nav = navigator_at("/");
    nav.navigate("/archives/sectors", AuthStatus::SIGNED_IN);
    nav.navigate("/archives/assets", AuthStatus::SIGNED_IN);

    assert!(nav.history_mut().back());
    assert_eq!(nav.pop_state(AuthStatus::SIGNED_IN), Decision::Render(Route::Sectors));
    assert_eq!(nav.location().path(), "/archives/sectors");

    assert!(nav.history_mut().forward());
    assert_eq!(nav.pop_state(AuthStatus::SIGNED_IN), Decision::Render(Route::Assets));
}

#[test]
fn back_into_protected_entry_after_logout_redirects() {
    let mut nav = navigator_at("/");
    nav.navigate("/work-orders", AuthStatus::SIGNED_IN);
    nav.navigate("/login", AuthStatus::ANONYMOUS);

    assert!(nav.history_mut().back());
    assert_eq!(nav.pop_state(AuthStatus::ANONYMOUS), Decision::Redirect(Route::Login));
    assert_eq!(nav.history().current(), "/login");
}
