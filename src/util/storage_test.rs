use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn saved_token_loads_until_cleared() {
    assert_eq!(load_token(), None);
    save_token("abc.def");
    assert_eq!(load_token().as_deref(), Some("abc.def"));
    clear_token();
    assert_eq!(load_token(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn blank_token_reads_as_missing() {
    save_token("");
    assert_eq!(load_token(), None);
    clear_token();
}
