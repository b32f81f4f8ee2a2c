//! API configuration resolved once at startup.
//!
//! The WASM bundle has no process environment, so the browser build bakes
//! the values in at compile time. Native callers (tests, tooling) read the
//! process environment. Both paths go through [`ApiConfig::resolve`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Primary environment variable naming the auth API base URL.
pub const API_BASE_VAR: &str = "REACT_APP_API_BASE";

/// Fallback environment variable consulted when [`API_BASE_VAR`] is empty.
pub const BACKEND_URL_VAR: &str = "REACT_APP_BACKEND_URL";

/// Where login requests go. `base_url: None` means stub mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

impl ApiConfig {
    /// Config that never touches the network.
    pub fn stub() -> Self {
        Self::default()
    }

    /// Pick the first non-empty candidate and strip trailing slashes.
    ///
    /// A value made only of slashes strips down to nothing and yields stub
    /// mode.
    pub fn resolve(api_base: Option<&str>, backend_url: Option<&str>) -> Self {
        let base_url = [api_base, backend_url]
            .into_iter()
            .flatten()
            .find(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        Self { base_url }
    }

    /// Values captured by the compiler when the bundle was built.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("REACT_APP_API_BASE"), option_env!("REACT_APP_BACKEND_URL"))
    }

    /// Values from the running process environment.
    pub fn from_env() -> Self {
        let api_base = std::env::var(API_BASE_VAR).unwrap_or_default();
        let backend_url = std::env::var(BACKEND_URL_VAR).unwrap_or_default();
        Self::resolve(Some(&api_base), Some(&backend_url))
    }

    pub fn is_stub(&self) -> bool {
        self.base_url.is_none()
    }
}
