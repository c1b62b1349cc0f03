use super::*;

#[test]
fn defaults_apply_when_values_missing() {
    let config = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn api_url_trailing_slash_is_trimmed() {
    let config = ClientConfig::from_values(Some("https://api.example.com/"), None).unwrap();
    assert_eq!(config.api_url, "https://api.example.com");
    assert_eq!(config.endpoint("/users/me"), "https://api.example.com/users/me");
}

#[test]
fn api_url_without_scheme_is_rejected() {
    assert_eq!(
        ClientConfig::from_values(Some("api.example.com"), None),
        Err(ConfigError::InvalidApiUrl("api.example.com".to_owned()))
    );
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = ClientConfig::from_values(None, Some("DEBUG")).unwrap();
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn unknown_log_level_is_rejected() {
    assert_eq!(
        ClientConfig::from_values(None, Some("loud")),
        Err(ConfigError::InvalidLogLevel("loud".to_owned()))
    );
}

#[test]
fn asset_url_keeps_absolute_and_prefixes_relative() {
    let config = ClientConfig::default();
    assert_eq!(config.asset_url("https://cdn.example.com/logo.png"), "https://cdn.example.com/logo.png");
    assert_eq!(
        config.asset_url("/static/uploads/company_1_logo.png"),
        "http://localhost:8000/static/uploads/company_1_logo.png"
    );
}
