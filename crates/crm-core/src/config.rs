//! Client Configuration
//!
//! Resolved at compile time from optional environment variables, since a
//! wasm bundle has no process environment at runtime:
//!
//! - `CRM_API_URL`: versioned API base (default `http://localhost:8000/api/v1`)
//! - `CRM_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error` (default `info`)

use tracing::Level;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";
const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
}

impl ApiConfig {
    pub fn new(api_base: &str) -> Self {
        let trimmed = api_base.trim().trim_end_matches('/');
        let api_base = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { api_base: api_base.to_string() }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("CRM_API_URL").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Absolute URL for an API path such as `/contacts`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Origin serving the public embed scripts (the API base without `/api/v1`)
    pub fn public_origin(&self) -> &str {
        self.api_base.strip_suffix(API_PREFIX).unwrap_or(&self.api_base)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

pub fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("warn") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::INFO,
    }
}

pub fn log_level() -> Level {
    parse_log_level(option_env!("CRM_LOG_LEVEL"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig::new("https://api.example.com/api/v1/");
        assert_eq!(config.api_base(), "https://api.example.com/api/v1");
        assert_eq!(config.endpoint("/contacts"), "https://api.example.com/api/v1/contacts");
        assert_eq!(config.endpoint("websites/"), "https://api.example.com/api/v1/websites/");
    }

    #[test]
    fn test_public_origin() {
        assert_eq!(ApiConfig::default().public_origin(), "http://localhost:8000");
        assert_eq!(ApiConfig::new("https://crm.io/api/v1").public_origin(), "https://crm.io");
        assert_eq!(ApiConfig::new("https://crm.io/v2").public_origin(), "https://crm.io/v2");
        assert_eq!(ApiConfig::new("  ").api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse_log_level(Some("DEBUG")), Level::DEBUG);
        assert_eq!(parse_log_level(Some("bogus")), Level::INFO);
        assert_eq!(parse_log_level(None), Level::INFO);
    }
}
