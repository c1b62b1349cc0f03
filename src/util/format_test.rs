use super::*;

// =============================================================================
// display_date
// =============================================================================

#[test]
fn display_date_reorders_iso_dates() {
    assert_eq!(display_date(Some("2025-03-09")), "09/03/2025");
}

#[test]
fn display_date_drops_time_component() {
    assert_eq!(display_date(Some("2025-03-09T14:30:00")), "09/03/2025");
}

#[test]
fn display_date_passes_through_unknown_shapes() {
    assert_eq!(display_date(Some("mañana")), "mañana");
    assert_eq!(display_date(None), "");
}

// =============================================================================
// money
// =============================================================================

#[test]
fn money_groups_thousands() {
    assert_eq!(money(1_234_567.5, "ARS"), "ARS 1.234.567,50");
    assert_eq!(money(999.0, "USD"), "USD 999,00");
}

#[test]
fn money_without_currency_uses_dollar_sign() {
    assert_eq!(money(12.5, ""), "$ 12,50");
}

#[test]
fn money_keeps_sign() {
    assert_eq!(money(-1500.0, "ARS"), "ARS -1.500,00");
}

// =============================================================================
// form parsing
// =============================================================================

#[test]
fn optional_text_treats_blank_as_none() {
    assert_eq!(optional_text("   "), None);
    assert_eq!(optional_text(" Planta 2 "), Some("Planta 2".to_owned()));
}

#[test]
fn blank_to_none_trims_present_values() {
    assert_eq!(blank_to_none(Some(" Bosch ".to_owned())), Some("Bosch".to_owned()));
    assert_eq!(blank_to_none(Some(String::new())), None);
    assert_eq!(blank_to_none(None), None);
}

#[test]
fn parse_id_ignores_placeholder_option() {
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("12"), Some(12));
    assert_eq!(parse_id("abc"), None);
}

#[test]
fn parse_amount_accepts_comma_decimals() {
    assert!((parse_amount("12,5") - 12.5).abs() < f64::EPSILON);
    assert!((parse_amount("3.25") - 3.25).abs() < f64::EPSILON);
    assert!(parse_amount("x").abs() < f64::EPSILON);
}
