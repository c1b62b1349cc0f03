use super::*;

#[test]
fn checkout_endpoint_passes_plan_id_as_query() {
    assert_eq!(checkout_endpoint(3), "/payments/create-checkout-session?plan_id=3");
}

#[test]
fn register_request_serializes_backend_field_names() {
    let request = RegisterRequest {
        name: "Planta Norte".to_owned(),
        admin_email: "admin@planta.com".to_owned(),
        admin_password: "secret".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({"name": "Planta Norte", "admin_email": "admin@planta.com", "admin_password": "secret"})
    );
}

#[test]
fn token_parses_access_token() {
    let token: Token = serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
    assert_eq!(token.access_token, "abc");
}
