use super::*;

#[test]
fn work_order_filter_without_values_lists_everything() {
    assert_eq!(WorkOrderFilter::default().endpoint(), "/work-orders");
}

#[test]
fn work_order_filter_encodes_status_and_asset() {
    let filter = WorkOrderFilter { status: Some(WorkOrderStatus::EnProgreso), asset_id: Some(4) };
    assert_eq!(filter.endpoint(), "/work-orders?status=EN_PROGRESO&asset_id=4");
}

#[test]
fn check_and_run_result_parses_generated_count() {
    let result: CheckAndRunResult = serde_json::from_str(r#"{"status":"success","generated_count":3}"#).unwrap();
    assert_eq!(result.generated_count, 3);
}
