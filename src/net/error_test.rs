use super::*;

#[test]
fn from_response_uses_string_detail() {
    let err = ApiError::from_response(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn from_response_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required"},{"msg":"value is not a valid integer"}]}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(err.to_string(), "field required; value is not a valid integer");
}

#[test]
fn from_response_falls_back_to_status_text() {
    assert_eq!(ApiError::from_response(500, "Internal Server Error").to_string(), "request failed: 500");
    assert_eq!(ApiError::from_response(404, r#"{"detail":""}"#).to_string(), "request failed: 404");
    assert_eq!(ApiError::from_response(502, r#"{"error":"x"}"#).to_string(), "request failed: 502");
}

#[test]
fn unauthorized_is_detected_from_status() {
    assert!(ApiError::from_response(401, "{}").is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
    assert_eq!(ApiError::Unavailable.status(), None);
}
