use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn with_query_skips_missing_values() {
    assert_eq!(with_query("/work-orders", &[("status", None), ("asset_id", None)]), "/work-orders");
    assert_eq!(
        with_query("/work-orders", &[("status", Some("PENDIENTE".to_owned())), ("asset_id", None)]),
        "/work-orders?status=PENDIENTE"
    );
    assert_eq!(
        with_query("/x", &[("a", Some("1".to_owned())), ("b", Some("2".to_owned()))]),
        "/x?a=1&b=2"
    );
}

#[test]
fn client_exposes_config() {
    let client = ApiClient::new(ClientConfig::default());
    assert_eq!(client.config().endpoint("/token"), "http://localhost:8000/token");
}

#[cfg(not(feature = "csr"))]
#[test]
fn requests_are_unavailable_outside_the_browser() {
    let client = ApiClient::new(ClientConfig::default());
    let result = futures::executor::block_on(client.get::<serde_json::Value>("/users/me"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
