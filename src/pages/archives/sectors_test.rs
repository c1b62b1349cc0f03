use super::*;

#[test]
fn cleaned_trims_name_and_drops_blank_description() {
    let input = SectorInput { name: "  Mantenimiento ".to_owned(), description: Some("   ".to_owned()) };
    let cleaned = cleaned(input).unwrap();
    assert_eq!(cleaned.name, "Mantenimiento");
    assert_eq!(cleaned.description, None);
}

#[test]
fn cleaned_rejects_blank_name() {
    assert!(cleaned(SectorInput::default()).is_err());
}
