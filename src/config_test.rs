use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_prefers_api_base() {
    let cfg = ApiConfig::resolve(Some("https://a.example.com"), Some("https://b.example.com"));
    assert_eq!(cfg.base_url.as_deref(), Some("https://a.example.com"));
}

#[test]
fn resolve_falls_back_when_api_base_empty() {
    let cfg = ApiConfig::resolve(Some(""), Some("https://b.example.com"));
    assert_eq!(cfg.base_url.as_deref(), Some("https://b.example.com"));
}

#[test]
fn resolve_falls_back_when_api_base_missing() {
    let cfg = ApiConfig::resolve(None, Some("https://b.example.com/"));
    assert_eq!(cfg.base_url.as_deref(), Some("https://b.example.com"));
}

#[test]
fn resolve_strips_every_trailing_slash() {
    let cfg = ApiConfig::resolve(Some("https://api.example.com///"), None);
    assert_eq!(cfg.base_url.as_deref(), Some("https://api.example.com"));
}

#[test]
fn resolve_keeps_path_segments() {
    let cfg = ApiConfig::resolve(Some("https://api.example.com/v1/"), None);
    assert_eq!(cfg.base_url.as_deref(), Some("https://api.example.com/v1"));
}

#[test]
fn resolve_without_values_is_stub() {
    assert!(ApiConfig::resolve(None, None).is_stub());
    assert!(ApiConfig::resolve(Some(""), Some("")).is_stub());
}

#[test]
fn resolve_slashes_only_is_stub() {
    assert!(ApiConfig::resolve(Some("///"), Some("https://b.example.com")).is_stub());
}

#[test]
fn stub_has_no_base_url() {
    assert_eq!(ApiConfig::stub(), ApiConfig { base_url: None });
}

// =============================================================
// from_env
// =============================================================

/// # Safety
/// Only this test touches these variables.
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var(API_BASE_VAR);
        std::env::remove_var(BACKEND_URL_VAR);
    }
}

#[test]
fn from_env_reads_both_variables_in_order() {
    unsafe {
        clear_api_env();
        std::env::set_var(BACKEND_URL_VAR, "https://backend.example.com/");
    }
    assert_eq!(
        ApiConfig::from_env().base_url.as_deref(),
        Some("https://backend.example.com")
    );

    unsafe { std::env::set_var(API_BASE_VAR, "https://api.example.com") };
    assert_eq!(ApiConfig::from_env().base_url.as_deref(), Some("https://api.example.com"));

    unsafe { clear_api_env() };
    assert!(ApiConfig::from_env().is_stub());
}
