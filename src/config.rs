//! Process configuration: application constants and environment-driven
//! settings for the HTTP port and the model-server endpoints.

/// Application-level constants
pub const APP_NAME: &str = "textlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Listening port when `PORT` is unset (hosting platforms inject `PORT`).
pub const DEFAULT_PORT: u16 = 10000;

/// Text2text inference server (translation / summarization / rephrasing).
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:8090";

/// Entity parse server (spaCy-style `/parse` contract).
pub const DEFAULT_PARSE_URL: &str = "http://localhost:8091";

/// Per-request timeout for model-server calls.
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 120;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("info,{APP_NAME}=debug")
}

/// Settings resolved once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub inference_url: String,
    pub parse_url: String,
    pub model_timeout_secs: u64,
}

impl ServiceConfig {
    /// Resolve settings from process environment variables:
    /// `PORT`, `INFERENCE_URL`, `PARSE_URL`, `MODEL_TIMEOUT_SECS`.
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary lookup function.
    ///
    /// Factored out from `from_env` so tests can supply values without
    /// mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let inference_url =
            lookup("INFERENCE_URL").unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());
        let parse_url = lookup("PARSE_URL").unwrap_or_else(|| DEFAULT_PARSE_URL.to_string());
        let model_timeout_secs = lookup("MODEL_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MODEL_TIMEOUT_SECS);

        Self {
            port,
            inference_url,
            parse_url,
            model_timeout_secs,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServiceConfig::from_lookup(|_| None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.inference_url, DEFAULT_INFERENCE_URL);
        assert_eq!(config.parse_url, DEFAULT_PARSE_URL);
        assert_eq!(config.model_timeout_secs, DEFAULT_MODEL_TIMEOUT_SECS);
    }

    #[test]
    fn port_and_urls_from_lookup() {
        let config = ServiceConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".into()),
            "INFERENCE_URL" => Some("http://models.internal:9000".into()),
            "PARSE_URL" => Some("http://parse.internal:9001".into()),
            "MODEL_TIMEOUT_SECS" => Some("30".into()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert_eq!(config.inference_url, "http://models.internal:9000");
        assert_eq!(config.parse_url, "http://parse.internal:9001");
        assert_eq!(config.model_timeout_secs, 30);
    }

    #[test]
    fn unparseable_port_falls_back() {
        let config = ServiceConfig::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".into()),
            _ => None,
        });
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn log_filter_names_the_crate() {
        assert!(default_log_filter().contains(APP_NAME));
    }
}
