use super::*;

#[test]
fn default_filter_requests_all_orders() {
    assert_eq!(PurchaseOrderFilter::default().endpoint(), "/stock/purchase-orders?status=TODAS");
}

#[test]
fn filter_encodes_view_and_supplier() {
    let filter = PurchaseOrderFilter { view: PurchaseOrderView::Pending, supplier_id: Some(8) };
    assert_eq!(filter.endpoint(), "/stock/purchase-orders?status=PENDIENTES&supplier_id=8");
}

#[test]
fn view_wire_names_round_trip() {
    for view in PurchaseOrderView::ALL {
        assert_eq!(PurchaseOrderView::from_wire(view.as_wire()), Some(view));
    }
    assert_eq!(PurchaseOrderView::from_wire("OTRAS"), None);
}

#[test]
fn purchase_order_endpoint_appends_id() {
    assert_eq!(purchase_order_endpoint(15), "/stock/purchase-orders/15");
}
