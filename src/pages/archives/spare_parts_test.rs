use super::*;

fn named(name: &str) -> SparePartInput {
    SparePartInput { name: name.to_owned(), ..SparePartInput::default() }
}

#[test]
fn cleaned_reads_comma_decimal_cost() {
    let input = cleaned(named("Rodamiento 6204"), "1250,75", "12").unwrap();
    assert!((input.cost - 1250.75).abs() < f64::EPSILON);
    assert_eq!(input.stock, 12);
    assert_eq!(input.currency, "ARS");
}

#[test]
fn cleaned_treats_blank_numbers_as_zero() {
    let input = cleaned(named("Correa"), "", " ").unwrap();
    assert!(input.cost.abs() < f64::EPSILON);
    assert_eq!(input.stock, 0);
}

#[test]
fn cleaned_rejects_fractional_stock_and_missing_name() {
    assert_eq!(cleaned(named("Correa"), "10", "1.5"), Err("El stock debe ser un número entero."));
    assert_eq!(cleaned(named("  "), "10", "1"), Err("El nombre del repuesto es obligatorio."));
}

#[test]
fn cleaned_rejects_negative_cost() {
    assert!(cleaned(named("Filtro"), "-3", "1").is_err());
}
