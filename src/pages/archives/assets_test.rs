use super::*;

fn input() -> AssetInput {
    AssetInput {
        name: " Torno CNC ".to_owned(),
        sector_id: 2,
        brand: Some("Haas".to_owned()),
        model: Some(" ".to_owned()),
        serial_number: None,
        purchase_date: Some(String::new()),
        status: AssetStatus::Maintenance,
    }
}

#[test]
fn cleaned_keeps_filled_fields_and_drops_blank_ones() {
    let cleaned = cleaned(input()).unwrap();
    assert_eq!(cleaned.name, "Torno CNC");
    assert_eq!(cleaned.brand.as_deref(), Some("Haas"));
    assert_eq!(cleaned.model, None);
    assert_eq!(cleaned.purchase_date, None);
    assert_eq!(cleaned.status, AssetStatus::Maintenance);
}

#[test]
fn cleaned_requires_a_sector() {
    let missing = AssetInput { sector_id: 0, ..input() };
    assert_eq!(cleaned(missing), Err("Seleccione un sector."));
}

#[test]
fn status_badges_differ_per_state() {
    let classes: Vec<_> = AssetStatus::ALL.iter().map(|s| status_class(*s)).collect();
    assert_eq!(classes.len(), 3);
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}
