use super::*;

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_strips_trailing_slash() {
    assert_eq!(normalize("/archives/assets/"), "/archives/assets");
}

#[test]
fn normalize_keeps_root() {
    assert_eq!(normalize("/"), "/");
}

#[test]
fn normalize_treats_empty_as_root() {
    assert_eq!(normalize(""), "/");
}

#[test]
fn normalize_collapses_repeated_trailing_slashes() {
    assert_eq!(normalize("/login//"), "/login");
    assert_eq!(normalize("///"), "/");
}

#[test]
fn normalize_adds_missing_leading_slash() {
    assert_eq!(normalize("pricing"), "/pricing");
}

#[test]
fn normalize_is_idempotent() {
    for raw in ["/", "", "/login/", "/a/b//", "/stock/purchase-orders/7", "x/", "//"] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
    }
}

// =============================================================
// Location
// =============================================================

#[test]
fn location_parse_splits_query_and_drops_fragment() {
    let loc = Location::parse("/billing/?status=approved&mock=true#top");
    assert_eq!(loc.path(), "/billing");
    assert_eq!(loc.query(), "status=approved&mock=true");
}

#[test]
fn location_query_param_finds_first_value() {
    let loc = Location::parse("/billing?status=pending&status=approved&canceled");
    assert_eq!(loc.query_param("status").as_deref(), Some("pending"));
    assert_eq!(loc.query_param("canceled").as_deref(), Some(""));
    assert_eq!(loc.query_param("missing"), None);
}

#[test]
fn location_query_param_reads_plus_as_space() {
    let loc = Location::parse("/x?name=Planta+Norte");
    assert_eq!(loc.query_param("name").as_deref(), Some("Planta Norte"));
}

#[test]
fn location_query_param_expands_percent_escapes() {
    let loc = Location::parse("/billing?external_reference=user%40mail.com&status=approved");
    assert_eq!(loc.query_param("external_reference").as_deref(), Some("user@mail.com"));
    assert_eq!(loc.query_param("status").as_deref(), Some("approved"));
}

#[test]
fn location_query_param_keeps_encoded_plus_literal() {
    let loc = Location::parse("/x?q=a%2Bb+c&bad=%FF");
    assert_eq!(loc.query_param("q").as_deref(), Some("a+b c"));
    assert_eq!(loc.query_param("bad").as_deref(), Some("%FF"));
}

#[test]
fn location_to_url_round_trips_normalized_form() {
    assert_eq!(Location::parse("/pricing/").to_url(), "/pricing");
    assert_eq!(Location::parse("/billing?status=approved").to_url(), "/billing?status=approved");
}
