use super::*;
use crate::net::types::Sector;

fn sectors() -> Vec<Sector> {
    vec![
        Sector { id: 1, name: "Producción".to_owned(), description: None },
        Sector { id: 2, name: "Depósito".to_owned(), description: Some("Planta baja".to_owned()) },
    ]
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn closed_editor_has_no_id() {
    assert!(!Editing::Closed.is_open());
    assert_eq!(Editing::default(), Editing::Closed);
    assert_eq!(Editing::New.id(), None);
}

#[test]
fn existing_editor_carries_record_id() {
    let editing = Editing::Existing(9);
    assert!(editing.is_open());
    assert_eq!(editing.id(), Some(9));
    assert_eq!(editing.heading("Sector"), "Editar Sector");
    assert_eq!(Editing::New.heading("Sector"), "Nuevo Sector");
    assert_eq!(Editing::New.heading_feminine("Herramienta"), "Nueva Herramienta");
}

// =============================================================================
// select helpers
// =============================================================================

#[test]
fn options_pair_ids_with_labels() {
    let opts = options(&sectors(), |s| s.id, |s| s.name.clone());
    assert_eq!(
        opts,
        vec![("1".to_owned(), "Producción".to_owned()), ("2".to_owned(), "Depósito".to_owned())]
    );
}

#[test]
fn label_for_falls_back_to_dash() {
    let records = sectors();
    assert_eq!(label_for(&records, Some(2), |s| s.id, |s| s.name.clone()), "Depósito");
    assert_eq!(label_for(&records, Some(7), |s| s.id, |s| s.name.clone()), "-");
    assert_eq!(label_for(&records, None, |s| s.id, |s| s.name.clone()), "-");
}
