use super::*;

#[test]
fn cleaned_requires_both_names() {
    let input = WorkerInput { first_name: "Ana".to_owned(), last_name: "  ".to_owned(), ..WorkerInput::default() };
    assert!(cleaned(input).is_err());
}

#[test]
fn cleaned_trims_contact_fields() {
    let input = WorkerInput {
        first_name: " Ana ".to_owned(),
        last_name: "Pérez".to_owned(),
        email: Some(" ana@planta.com ".to_owned()),
        phone: Some(String::new()),
        sector_id: Some(4),
        ..WorkerInput::default()
    };
    let cleaned = cleaned(input).unwrap();
    assert_eq!(cleaned.first_name, "Ana");
    assert_eq!(cleaned.email.as_deref(), Some("ana@planta.com"));
    assert_eq!(cleaned.phone, None);
    assert_eq!(cleaned.sector_id, Some(4));
}
