use super::*;
use crate::router::path::normalize;

// =============================================================
// Table lookup
// =============================================================

#[test]
fn every_static_route_round_trips_through_its_path() {
    for route in Route::statics() {
        assert_eq!(Route::from_path(&route.path()), Some(route), "{route:?}");
    }
}

#[test]
fn static_paths_are_already_normalized() {
    for route in Route::statics() {
        let path = route.path();
        assert_eq!(normalize(&path), path);
    }
}

#[test]
fn purchase_order_edit_parses_numeric_id() {
    assert_eq!(Route::from_path("/stock/purchase-orders/42"), Some(Route::PurchaseOrderEdit(42)));
    assert_eq!(Route::PurchaseOrderEdit(42).path(), "/stock/purchase-orders/42");
}

#[test]
fn purchase_order_new_wins_over_dynamic_segment() {
    assert_eq!(Route::from_path("/stock/purchase-orders/new"), Some(Route::PurchaseOrderNew));
}

#[test]
fn purchase_order_edit_rejects_non_numeric_ids() {
    assert_eq!(Route::from_path("/stock/purchase-orders/abc"), None);
    assert_eq!(Route::from_path("/stock/purchase-orders/-1"), None);
    assert_eq!(Route::from_path("/stock/purchase-orders/1/items"), None);
}

#[test]
fn trailing_slash_variants_resolve_to_same_route() {
    let a = Route::resolve(&normalize("/archives/assets/"));
    let b = Route::resolve(&normalize("/archives/assets"));
    assert_eq!(a, Route::Assets);
    assert_eq!(a, b);
}

// =============================================================
// Fallback + public set
// =============================================================

#[test]
fn unknown_path_resolves_to_login() {
    assert_eq!(Route::from_path("/no/such/page"), None);
    assert_eq!(Route::resolve("/no/such/page"), Route::Login);
}

#[test]
fn public_set_is_root_login_register_pricing() {
    let public: Vec<Route> = Route::statics().filter(|r| r.is_public()).collect();
    assert_eq!(public, vec![Route::Home, Route::Login, Route::Register, Route::Pricing]);
    assert!(!Route::PurchaseOrderEdit(1).is_public());
}

#[test]
fn every_route_has_a_title() {
    for route in Route::statics().chain([Route::PurchaseOrderEdit(3)]) {
        assert!(!route.title().is_empty());
    }
}

#[test]
fn purchase_order_id_must_be_canonical() {
    assert_eq!(Route::from_path("/stock/purchase-orders/007"), None);
    assert_eq!(Route::resolve("/stock/purchase-orders/007"), Route::Login);
    assert_eq!(Route::from_path("/stock/purchase-orders/70"), Some(Route::PurchaseOrderEdit(70)));
    assert_eq!(Route::from_path("/stock/purchase-orders/0"), Some(Route::PurchaseOrderEdit(0)));
}
