use super::*;

fn filled() -> PlanDraft {
    PlanDraft {
        name: " Cambio de aceite ".to_owned(),
        asset_id: Some(4),
        frequency_value: "3".to_owned(),
        tasks: vec![
            TaskDraft { description: "Drenar aceite".to_owned(), minutes: "20".to_owned() },
            TaskDraft { description: "  ".to_owned(), minutes: "5".to_owned() },
            TaskDraft { description: "Cambiar filtro".to_owned(), minutes: "7,5".to_owned() },
        ],
        ..PlanDraft::default()
    }
}

// =============================================================================
// TASK LIST
// =============================================================================

#[test]
fn new_draft_starts_with_one_empty_task() {
    let draft = PlanDraft::default();
    assert_eq!(draft.tasks, vec![TaskDraft::default()]);
    assert_eq!(draft.frequency_type, FrequencyType::Monthly);
    assert!(draft.is_active);
}

#[test]
fn remove_task_drops_only_that_row() {
    let mut draft = filled();
    draft.remove_task(0);
    assert_eq!(draft.tasks.len(), 2);
    assert_eq!(draft.tasks[1].description, "Cambiar filtro");
    draft.remove_task(10);
    assert_eq!(draft.tasks.len(), 2);
}

#[test]
fn add_task_appends_blank_row() {
    let mut draft = filled();
    draft.add_task();
    assert_eq!(draft.tasks.last(), Some(&TaskDraft::default()));
}

// =============================================================================
// PAYLOAD
// =============================================================================

#[test]
fn to_input_skips_blank_tasks_and_parses_minutes() {
    let input = filled().to_input().unwrap();
    assert_eq!(input.name, "Cambio de aceite");
    assert_eq!(input.asset_id, 4);
    assert_eq!(input.frequency_value, 3);
    assert_eq!(input.tasks.len(), 2);
    assert!((input.tasks[1].estimated_time - 7.5).abs() < f64::EPSILON);
}

#[test]
fn to_input_requires_an_asset() {
    let draft = PlanDraft { asset_id: None, ..filled() };
    assert_eq!(draft.to_input(), Err("Debes seleccionar un activo"));
}

#[test]
fn to_input_rejects_zero_frequency() {
    let draft = PlanDraft { frequency_value: "0".to_owned(), ..filled() };
    assert!(draft.to_input().is_err());
}
