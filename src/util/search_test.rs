use super::*;

#[test]
fn blank_query_matches_everything() {
    assert!(matches("  ", [None]));
    assert!(matches("", [Some("Torno")]));
}

#[test]
fn query_is_case_insensitive() {
    assert!(matches("torno", [Some("Torno CNC"), None]));
    assert!(matches("CNC", [None, Some("torno cnc")]));
}

#[test]
fn absent_fields_never_match() {
    assert!(!matches("bosch", [Some("Torno"), None]));
}
