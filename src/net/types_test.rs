use super::*;

// =============================================================
// Decimal leniency
// =============================================================

#[test]
fn spare_part_accepts_decimal_strings() {
    let part: SparePart = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Rodamiento 6204",
        "cost": "1250.50",
        "currency": "ARS",
        "stock": 12,
        "category_id": null
    }))
    .unwrap();
    assert!((part.cost - 1250.5).abs() < f64::EPSILON);
    assert!((part.stock - 12.0).abs() < f64::EPSILON);
    assert_eq!(part.category_id, None);
}

#[test]
fn spare_part_defaults_currency_when_missing() {
    let part: SparePart = serde_json::from_value(serde_json::json!({"id": 1, "name": "Correa"})).unwrap();
    assert_eq!(part.currency, "ARS");
    assert!(part.cost.abs() < f64::EPSILON);
}

#[test]
fn decimal_rejects_garbage_strings() {
    let result: Result<SparePart, _> =
        serde_json::from_value(serde_json::json!({"id": 1, "name": "x", "cost": "abc"}));
    assert!(result.is_err());
}

// =============================================================
// Enum wire names
// =============================================================

#[test]
fn work_order_status_uses_backend_names() {
    for status in WorkOrderStatus::ALL {
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json, serde_json::Value::String(status.as_wire().to_owned()));
        assert_eq!(WorkOrderStatus::from_wire(status.as_wire()), Some(status));
    }
}

#[test]
fn frequency_type_uses_spanish_wire_names() {
    assert_eq!(serde_json::to_value(FrequencyType::Monthly).unwrap(), "MENSUAL");
    assert_eq!(FrequencyType::from_wire("SEMANAL"), Some(FrequencyType::Weekly));
    assert_eq!(FrequencyType::from_wire("monthly"), None);
}

#[test]
fn frequency_unit_label_pluralizes() {
    assert_eq!(FrequencyType::Monthly.unit_label(1), "mes");
    assert_eq!(FrequencyType::Monthly.unit_label(3), "meses");
    assert_eq!(FrequencyType::Daily.unit_label(0), "días");
}

#[test]
fn tool_and_asset_status_round_trip_wire_names() {
    assert_eq!(serde_json::to_value(ToolStatus::InUse).unwrap(), "IN_USE");
    assert_eq!(ToolStatus::from_wire("LOST"), Some(ToolStatus::Lost));
    assert_eq!(AssetStatus::from_wire("MAINTENANCE"), Some(AssetStatus::Maintenance));
}

#[test]
fn purchase_order_status_parses_partial_receipt() {
    let status: PurchaseOrderStatus = serde_json::from_str("\"PARCIALMENTE_RECIBIDO\"").unwrap();
    assert_eq!(status, PurchaseOrderStatus::ParcialmenteRecibido);
}

// =============================================================
// Work orders
// =============================================================

fn sample_work_order() -> WorkOrder {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "ticket_number": "PM-2-20250101120000",
        "type": "PREVENTIVO",
        "status": "PENDIENTE",
        "priority": "MEDIA",
        "description": "Mantenimiento Preventivo",
        "asset_id": 4,
        "plan_id": 2,
        "created_at": "2025-01-01T12:00:00"
    }))
    .unwrap()
}

#[test]
fn work_order_reads_type_field_as_kind() {
    let order = sample_work_order();
    assert_eq!(order.kind, WorkOrderType::Preventivo);
    assert_eq!(order.plan_id, Some(2));
    assert_eq!(order.assigned_to_id, None);
}

#[test]
fn work_order_input_carries_full_record_with_new_status() {
    let order = sample_work_order();
    let input = WorkOrderInput::from(&order).with_status(WorkOrderStatus::EnProgreso);
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["status"], "EN_PROGRESO");
    assert_eq!(json["type"], "PREVENTIVO");
    assert_eq!(json["description"], "Mantenimiento Preventivo");
    assert_eq!(json["asset_id"], 4);
}

// =============================================================
// Purchase orders
// =============================================================

#[test]
fn purchase_order_item_totals_and_pending_quantity() {
    let item = PurchaseOrderItem {
        quantity: 4.0,
        unit_price: 2.5,
        received_quantity: 5.0,
        ..PurchaseOrderItem::blank()
    };
    assert!((item.line_total() - 10.0).abs() < f64::EPSILON);
    assert!(item.pending_quantity().abs() < f64::EPSILON);
}

#[test]
fn purchase_order_item_autofills_from_spare_part() {
    let part = SparePart {
        id: 9,
        name: "Filtro de aceite".to_owned(),
        internal_code: None,
        cost: 800.0,
        currency: "ARS".to_owned(),
        stock: 0.0,
        category_id: None,
    };
    let mut item = PurchaseOrderItem::blank();
    item.apply_spare_part(&part);
    assert_eq!(item.spare_part_id, Some(9));
    assert_eq!(item.description, "Filtro de aceite");
    assert!((item.unit_price - 800.0).abs() < f64::EPSILON);
}

#[test]
fn purchase_order_input_total_sums_lines() {
    let input = PurchaseOrderInput {
        items: vec![
            PurchaseOrderItem { quantity: 2.0, unit_price: 10.0, ..PurchaseOrderItem::blank() },
            PurchaseOrderItem { quantity: 1.0, unit_price: 5.5, ..PurchaseOrderItem::blank() },
        ],
        ..PurchaseOrderInput::default()
    };
    assert!((input.total() - 25.5).abs() < f64::EPSILON);
}

#[test]
fn purchase_order_parses_string_amounts_and_omits_item_ids_when_absent() {
    let order: PurchaseOrder = serde_json::from_value(serde_json::json!({
        "id": 1,
        "order_number": "OC-2025-0001",
        "supplier_id": 2,
        "order_date": "2025-03-01",
        "status": "COMPLETADA",
        "total_amount": "300.00",
        "items": [{"id": 11, "description": "Correa", "quantity": "3", "unit_price": "100", "received_quantity": "3"}]
    }))
    .unwrap();
    assert!((order.total_amount - 300.0).abs() < f64::EPSILON);
    assert_eq!(order.status, PurchaseOrderStatus::Completada);

    let json = serde_json::to_value(PurchaseOrderItem::blank()).unwrap();
    assert!(json.get("id").is_none());
    assert!(json.get("received_date").is_none());
}

#[test]
fn spare_part_input_rounds_stock_for_editing() {
    let part: SparePart = serde_json::from_value(serde_json::json!({
        "id": 3, "name": "Filtro", "cost": "12.50", "stock": "4.000", "category_id": 2
    }))
    .unwrap();
    let input = SparePartInput::from(&part);
    assert_eq!(input.stock, 4);
    assert_eq!(input.currency, "ARS");
    assert_eq!(input.category_id, Some(2));
}

// =============================================================
// Suppliers + settings
// =============================================================

#[test]
fn supplier_input_collects_category_ids() {
    let supplier: Supplier = serde_json::from_value(serde_json::json!({
        "id": 5,
        "name": "Rulemanes SA",
        "categories": [{"id": 1, "name": "Rodamientos"}, {"id": 4, "name": "Correas"}]
    }))
    .unwrap();
    assert!(supplier.serves_category(4));
    assert!(!supplier.serves_category(2));
    assert_eq!(SupplierInput::from(&supplier).category_ids, vec![1, 4]);
}

#[test]
fn company_settings_update_omits_unset_fields() {
    let update = CompanySettingsUpdate { name: Some("Planta Norte".to_owned()), ..CompanySettingsUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"name": "Planta Norte"}));
}

#[test]
fn dashboard_stats_tolerates_empty_company_payload() {
    let stats: DashboardStats = serde_json::from_value(serde_json::json!({
        "counts": {"pending": 0, "in_progress": 0, "paused": 0},
        "recent_activity": [],
        "yearly_stats": {"corrective": 0, "preventive": 0, "total": 0}
    }))
    .unwrap();
    assert_eq!(stats, DashboardStats::default());
}
