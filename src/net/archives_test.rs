use super::*;

#[test]
fn collection_endpoints_match_backend_routes() {
    assert_eq!(collection_endpoint::<Sector>(), "/archives/sectors");
    assert_eq!(collection_endpoint::<Asset>(), "/archives/assets");
    assert_eq!(collection_endpoint::<Worker>(), "/archives/workers");
    assert_eq!(collection_endpoint::<Tool>(), "/archives/tools");
    assert_eq!(collection_endpoint::<SparePartCategory>(), "/archives/categories");
    assert_eq!(collection_endpoint::<SparePart>(), "/archives/spare-parts");
    assert_eq!(collection_endpoint::<Supplier>(), "/archives/suppliers");
}

#[test]
fn record_endpoint_appends_id() {
    assert_eq!(record_endpoint::<Tool>(12), "/archives/tools/12");
    assert_eq!(record_endpoint::<SparePart>(3), "/archives/spare-parts/3");
}
