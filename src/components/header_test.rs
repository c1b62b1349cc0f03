use super::*;

#[test]
fn public_links_point_at_public_routes() {
    assert!(PUBLIC_LINKS.iter().all(|(_, route)| route.is_public()));
}

#[test]
fn menu_entries_are_protected_pages() {
    for menu in &MENUS {
        assert!(!menu.items.is_empty(), "{} is empty", menu.label);
        assert!(menu.items.iter().all(|(_, route)| !route.is_public()), "{} links a public page", menu.label);
    }
}

#[test]
fn every_listing_page_is_reachable_from_a_menu() {
    let linked: Vec<Route> = MENUS.iter().flat_map(|m| m.items.iter().map(|(_, r)| *r)).collect();
    for route in [
        Route::Sectors,
        Route::Assets,
        Route::Workers,
        Route::Tools,
        Route::SpareParts,
        Route::Suppliers,
        Route::PreventivePlans,
        Route::WorkOrders,
        Route::PurchaseOrders,
        Route::GeneralSettings,
    ] {
        assert!(linked.contains(&route), "{route:?} missing from navigation");
    }
}
