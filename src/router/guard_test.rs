use super::*;

const PROTECTED: &[&str] = &[
    "/dashboard",
    "/billing",
    "/archives/sectors",
    "/archives/assets",
    "/archives/workers",
    "/archives/tools",
    "/archives/spare-parts",
    "/archives/suppliers",
    "/preventive/plans",
    "/preventive/new",
    "/work-orders",
    "/stock/purchase-orders",
    "/stock/purchase-orders/new",
    "/stock/purchase-orders/9",
    "/settings/general",
];

// =============================================================
// Loading
// =============================================================

#[test]
fn pending_session_never_redirects() {
    for path in PROTECTED.iter().chain(&["/", "/login", "/unknown"]) {
        assert_eq!(evaluate(path, AuthStatus::PENDING), Decision::Pending, "{path}");
    }
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn anonymous_viewer_sees_public_pages() {
    assert_eq!(evaluate("/", AuthStatus::ANONYMOUS), Decision::Render(Route::Home));
    assert_eq!(evaluate("/login", AuthStatus::ANONYMOUS), Decision::Render(Route::Login));
    assert_eq!(evaluate("/register", AuthStatus::ANONYMOUS), Decision::Render(Route::Register));
    assert_eq!(evaluate("/pricing", AuthStatus::ANONYMOUS), Decision::Render(Route::Pricing));
}

#[test]
fn anonymous_viewer_is_redirected_from_protected_pages() {
    for path in PROTECTED {
        assert_eq!(evaluate(path, AuthStatus::ANONYMOUS), Decision::Redirect(Route::Login), "{path}");
    }
}

#[test]
fn anonymous_viewer_on_unknown_path_is_redirected() {
    assert_eq!(evaluate("/nope", AuthStatus::ANONYMOUS), Decision::Redirect(Route::Login));
}

// =============================================================
// Authenticated
// =============================================================

#[test]
fn signed_in_viewer_sees_protected_pages() {
    assert_eq!(evaluate("/work-orders", AuthStatus::SIGNED_IN), Decision::Render(Route::WorkOrders));
    assert_eq!(
        evaluate("/stock/purchase-orders/9", AuthStatus::SIGNED_IN),
        Decision::Render(Route::PurchaseOrderEdit(9))
    );
}

#[test]
fn signed_in_viewer_on_unknown_path_gets_login_page_without_redirect() {
    assert_eq!(evaluate("/nope", AuthStatus::SIGNED_IN), Decision::Render(Route::Login));
}

#[test]
fn decision_route_exposes_rendered_page() {
    assert_eq!(Decision::Pending.route(), None);
    assert_eq!(Decision::Redirect(Route::Login).route(), Some(Route::Login));
    assert!(Decision::Redirect(Route::Login).is_redirect());
    assert!(!Decision::Render(Route::Home).is_redirect());
}
