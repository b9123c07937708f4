//! HTTP client for the text2text inference server.
//!
//! One blocking client serves the three generative capabilities. The wire
//! contract mirrors the Hugging Face task pipelines: `POST
//! {base}/pipeline/{task}` with `{"inputs": ..., "parameters": {...}}`,
//! answered by an array of task-keyed objects (`translation_text`,
//! `summary_text`, `generated_text`). Models are loaded server-side once;
//! this client is constructed once at startup and reused for every request.

use serde::{Deserialize, Serialize};

use super::{ModelError, Rephrase, RephraseOptions, Summarize, SummarizeOptions, Translate};
use crate::config::ServiceConfig;

pub struct InferenceClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl InferenceClient {
    /// Create a client pointing at an inference server.
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
        Self::new(&config.inference_url, config.model_timeout_secs)
    }

    /// Probe the server's health endpoint. Used for a startup readiness
    /// log only; an unreachable server is not fatal at boot.
    pub fn is_ready(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send() {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn post_task<P: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        task: &str,
        inputs: &str,
        parameters: Option<&P>,
    ) -> Result<Vec<R>, ModelError> {
        let url = format!("{}/pipeline/{}", self.base_url, task);
        let body = TaskRequest { inputs, parameters };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                ModelError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ModelError::Timeout(self.timeout_secs)
            } else {
                ModelError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ModelError::Server {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| ModelError::ResponseParsing(e.to_string()))
    }
}

/// Request body for `POST /pipeline/{task}`.
#[derive(Serialize)]
struct TaskRequest<'a, P: Serialize> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a P>,
}

/// Response item from the translation task.
#[derive(Deserialize)]
struct TranslationItem {
    translation_text: String,
}

/// Response item from the summarization task.
#[derive(Deserialize)]
struct SummaryItem {
    summary_text: String,
}

/// Response item from the text2text-generation task.
#[derive(Deserialize)]
struct GeneratedItem {
    generated_text: String,
}

impl Translate for InferenceClient {
    fn translate(&self, text: &str) -> Result<String, ModelError> {
        let items: Vec<TranslationItem> = self.post_task("translation", text, None::<&()>)?;
        let first = items.into_iter().next().ok_or(ModelError::EmptyResult)?;
        Ok(first.translation_text)
    }
}

impl Summarize for InferenceClient {
    fn summarize(&self, text: &str, options: &SummarizeOptions) -> Result<String, ModelError> {
        let items: Vec<SummaryItem> = self.post_task("summarization", text, Some(options))?;
        let first = items.into_iter().next().ok_or(ModelError::EmptyResult)?;
        Ok(first.summary_text)
    }
}

impl Rephrase for InferenceClient {
    fn rephrase(&self, prompt: &str, options: &RephraseOptions) -> Result<String, ModelError> {
        let items: Vec<GeneratedItem> =
            self.post_task("text2text-generation", prompt, Some(options))?;
        let first = items.into_iter().next().ok_or(ModelError::EmptyResult)?;
        Ok(first.generated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_trims_trailing_slash() {
        let client = InferenceClient::new("http://localhost:8090/", 60);
        assert_eq!(client.base_url, "http://localhost:8090");
        assert_eq!(client.timeout_secs, 60);
    }

    #[test]
    fn from_config_uses_inference_settings() {
        let config = ServiceConfig::default();
        let client = InferenceClient::from_config(&config);
        assert_eq!(client.base_url, crate::config::DEFAULT_INFERENCE_URL);
        assert_eq!(
            client.timeout_secs,
            crate::config::DEFAULT_MODEL_TIMEOUT_SECS
        );
    }

    #[test]
    fn task_request_with_parameters() {
        let options = SummarizeOptions::default();
        let body = TaskRequest {
            inputs: "some text",
            parameters: Some(&options),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["inputs"], "some text");
        assert_eq!(json["parameters"]["max_length"], 60);
        assert_eq!(json["parameters"]["min_length"], 20);
        assert_eq!(json["parameters"]["do_sample"], false);
    }

    #[test]
    fn task_request_without_parameters_omits_field() {
        let body = TaskRequest {
            inputs: "bonjour",
            parameters: None::<&()>,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"inputs": "bonjour"}));
    }

    #[test]
    fn response_items_deserialize() {
        let items: Vec<TranslationItem> =
            serde_json::from_str(r#"[{"translation_text": "hello"}]"#).unwrap();
        assert_eq!(items[0].translation_text, "hello");

        let items: Vec<SummaryItem> =
            serde_json::from_str(r#"[{"summary_text": "short"}]"#).unwrap();
        assert_eq!(items[0].summary_text, "short");

        let items: Vec<GeneratedItem> =
            serde_json::from_str(r#"[{"generated_text": "rewritten"}]"#).unwrap();
        assert_eq!(items[0].generated_text, "rewritten");
    }
}
