use super::*;

fn settings(name: &str, logo: Option<&str>) -> CompanySettings {
    CompanySettings { name: name.to_owned(), logo_url: logo.map(str::to_owned), ..CompanySettings::default() }
}

#[test]
fn default_company_uses_product_name() {
    let state = CompanyState::default();
    assert_eq!(state.name, "MantenPro");
    assert_eq!(state.logo_url, None);
    assert_eq!(state.logo_src(&ClientConfig::default()), None);
}

#[test]
fn apply_takes_name_and_logo() {
    let mut state = CompanyState { loading: true, ..CompanyState::default() };
    state.apply(&settings("Metalúrgica Sur", Some("/static/logos/3.png")));
    assert_eq!(state.name, "Metalúrgica Sur");
    assert_eq!(state.logo_url.as_deref(), Some("/static/logos/3.png"));
    assert!(!state.loading);
}

#[test]
fn apply_blank_name_keeps_default() {
    let mut state = CompanyState::default();
    state.apply(&settings("  ", Some("")));
    assert_eq!(state.name, DEFAULT_COMPANY_NAME);
    assert_eq!(state.logo_url, None);
}

#[test]
fn relative_logo_is_resolved_against_api_and_versioned() {
    let mut state = CompanyState::default();
    state.apply(&settings("Planta", Some("/static/logo.png")));
    let config = ClientConfig::default();
    assert_eq!(state.logo_src(&config).as_deref(), Some("http://localhost:8000/static/logo.png?t=0"));

    state.set_logo("/static/logo.png".to_owned());
    assert_eq!(state.logo_src(&config).as_deref(), Some("http://localhost:8000/static/logo.png?t=1"));
}

#[test]
fn absolute_logo_with_query_appends_version() {
    let mut state = CompanyState::default();
    state.set_logo("https://cdn.example.com/logo.png?sig=abc".to_owned());
    assert_eq!(
        state.logo_src(&ClientConfig::default()).as_deref(),
        Some("https://cdn.example.com/logo.png?sig=abc&t=1")
    );
}

#[test]
fn reset_restores_defaults() {
    let mut state = CompanyState::default();
    state.set_logo("/x.png".to_owned());
    state.reset();
    assert_eq!(state, CompanyState::default());
}
