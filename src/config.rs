//! Backend and frontend origins.
//!
//! Browser builds cannot read the environment at run time, so the origins are
//! baked in through `option_env!` and fall back to the local dev ports.

use once_cell::sync::Lazy;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

const BACKEND_ENV: &str = "SLASH_BACKEND_URL";
const FRONTEND_ENV: &str = "SLASH_FRONTEND_URL";

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub frontend_url: String,
}

impl AppConfig {
    pub fn new(backend_url: impl Into<String>, frontend_url: impl Into<String>) -> Self {
        Self {
            backend_url: trim_origin(backend_url.into()),
            frontend_url: trim_origin(frontend_url.into()),
        }
    }

    /// Compile-time values first, then the process environment on native targets.
    pub fn from_env() -> Self {
        let backend = option_env!("SLASH_BACKEND_URL")
            .map(str::to_string)
            .or_else(|| runtime_env(BACKEND_ENV))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let frontend = option_env!("SLASH_FRONTEND_URL")
            .map(str::to_string)
            .or_else(|| runtime_env(FRONTEND_ENV))
            .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());

        Self::new(backend, frontend)
    }

    /// Process-wide configuration.
    pub fn global() -> &'static AppConfig {
        &CONFIG
    }

    /// Host part of the backend origin, e.g. `localhost:5000`.
    pub fn backend_host(&self) -> &str {
        host_of(&self.backend_url)
    }

    /// Host part of the frontend origin, e.g. `localhost:3000`.
    pub fn frontend_host(&self) -> &str {
        host_of(&self.frontend_url)
    }

    /// Origin the app is actually served from. In the browser this is the
    /// page origin, elsewhere the configured frontend URL.
    pub fn frontend_origin(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                return origin;
            }
        }

        self.frontend_url.clone()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_FRONTEND_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_env(_key: &str) -> Option<String> {
    None
}

fn trim_origin(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Strip the scheme and any path from an origin.
pub fn host_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:5000");
        assert_eq!(config.frontend_url, "http://localhost:3000");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::new("http://api.slash.test/", "https://slash.test/");
        assert_eq!(config.backend_url, "http://api.slash.test");
        assert_eq!(config.frontend_url, "https://slash.test");
    }

    #[test]
    fn test_hosts() {
        let config = AppConfig::default();
        assert_eq!(config.backend_host(), "localhost:5000");
        assert_eq!(config.frontend_host(), "localhost:3000");
        assert_eq!(host_of("https://shop.example.com/path"), "shop.example.com");
        assert_eq!(host_of("localhost:5000"), "localhost:5000");
    }

    #[test]
    fn test_frontend_origin_native_uses_config() {
        let config = AppConfig::new("http://b:1", "http://f:2");
        assert_eq!(config.frontend_origin(), "http://f:2");
    }
}
