//! HTTP client for the entity parse server.
//!
//! `POST {base}/parse` with `{"text": ...}`, answered with the parsed
//! document in spaCy's `doc.to_json()` shape (`ents` + `tokens`). The
//! parser model is loaded server-side once; this client is constructed at
//! startup and reused.

use serde::Serialize;

use super::{Document, EntityScanner, ScanError};
use crate::config::ServiceConfig;

pub struct ParseClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl ParseClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.parse_url, config.model_timeout_secs)
    }
}

/// Request body for `POST /parse`.
#[derive(Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
}

impl EntityScanner for ParseClient {
    fn parse(&self, text: &str) -> Result<Document, ScanError> {
        let url = format!("{}/parse", self.base_url);
        let body = ParseRequest { text };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                ScanError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ScanError::Timeout(self.timeout_secs)
            } else {
                ScanError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ScanError::Server {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| ScanError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_trims_trailing_slash() {
        let client = ParseClient::new("http://localhost:8091/", 60);
        assert_eq!(client.base_url, "http://localhost:8091");
        assert_eq!(client.timeout_secs, 60);
    }

    #[test]
    fn from_config_uses_parse_settings() {
        let config = ServiceConfig::default();
        let client = ParseClient::from_config(&config);
        assert_eq!(client.base_url, crate::config::DEFAULT_PARSE_URL);
    }

    #[test]
    fn request_body_shape() {
        let body = ParseRequest { text: "Paris is great." };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Paris is great."}));
    }
}
