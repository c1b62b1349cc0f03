use super::*;
use crate::net::types::{Priority, WorkOrderType};

fn order(status: WorkOrderStatus) -> WorkOrder {
    WorkOrder {
        id: 12,
        ticket_number: "OT-0012".to_owned(),
        kind: WorkOrderType::Preventivo,
        status,
        priority: Priority::Alta,
        description: "Cambio de rodamientos".to_owned(),
        observations: Some("Revisar holgura".to_owned()),
        asset_id: Some(3),
        sector_id: Some(1),
        assigned_to_id: Some(8),
        requested_by_id: None,
        plan_id: Some(2),
        created_at: Some("2026-10-01T08:30:00".to_owned()),
        start_date: None,
        end_date: None,
    }
}

#[test]
fn open_orders_can_be_completed() {
    assert!(can_complete(WorkOrderStatus::Pendiente));
    assert!(can_complete(WorkOrderStatus::EnProgreso));
    assert!(!can_complete(WorkOrderStatus::Completada));
    assert!(!can_complete(WorkOrderStatus::Cancelada));
}

#[test]
fn status_change_keeps_every_editable_field() {
    let source = order(WorkOrderStatus::Asignada);
    let input = WorkOrderInput::from(&source).with_status(WorkOrderStatus::Pausada);
    assert_eq!(input.status, WorkOrderStatus::Pausada);
    assert_eq!(input.description, source.description);
    assert_eq!(input.observations, source.observations);
    assert_eq!(input.assigned_to_id, Some(8));
    assert_eq!(input.priority, Priority::Alta);
    assert_eq!(input.kind, WorkOrderType::Preventivo);
}
