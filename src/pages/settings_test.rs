use super::*;

fn update() -> CompanySettingsUpdate {
    CompanySettingsUpdate {
        name: Some("  Planta Norte ".to_owned()),
        address: Some(" Av. Siempre Viva 742 ".to_owned()),
        city: Some("   ".to_owned()),
        postal_code: None,
        province: Some("Córdoba".to_owned()),
        phone: None,
        email_contact: Some(" contacto@plantanorte.com ".to_owned()),
    }
}

#[test]
fn cleaned_trims_every_field() {
    let cleaned = cleaned(update()).unwrap();
    assert_eq!(cleaned.name.as_deref(), Some("Planta Norte"));
    assert_eq!(cleaned.address.as_deref(), Some("Av. Siempre Viva 742"));
    assert_eq!(cleaned.email_contact.as_deref(), Some("contacto@plantanorte.com"));
}

#[test]
fn cleaned_keeps_cleared_fields_as_empty_strings() {
    let cleaned = cleaned(update()).unwrap();
    assert_eq!(cleaned.city.as_deref(), Some(""));
    assert_eq!(cleaned.postal_code, None);
}

#[test]
fn cleaned_requires_a_name() {
    let blank = CompanySettingsUpdate { name: Some("  ".to_owned()), ..update() };
    assert_eq!(cleaned(blank), Err("El nombre de la empresa es obligatorio."));
    let missing = CompanySettingsUpdate { name: None, ..update() };
    assert_eq!(cleaned(missing), Err("El nombre de la empresa es obligatorio."));
}
