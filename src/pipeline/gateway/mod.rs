//! Model gateway — narrow seams over the pre-trained NLP models.
//!
//! Every substantive computation is delegated to an external model treated
//! as a black box. Each capability gets its own one-method trait so the
//! orchestration layer can be exercised against fakes, and so backends can
//! be swapped per capability (the bundled detector is local, the three
//! generative capabilities go over HTTP).

pub mod inference;
pub mod mock;

pub use inference::InferenceClient;
pub use mock::{Capability, GatewayCall, MockModel};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("inference server is not reachable at {0}")]
    Connection(String),

    #[error("inference request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("inference server returned error (status {status}): {body}")]
    Server { status: u16, body: String },

    #[error("malformed model response: {0}")]
    ResponseParsing(String),

    #[error("model returned an empty result")]
    EmptyResult,
}

/// Decoding parameters for the summarization model.
///
/// The request pipeline always calls with the default configuration;
/// greedy decoding keeps summaries deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            max_length: 60,
            min_length: 20,
            do_sample: false,
        }
    }
}

/// Decoding parameters for the rephrasing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseOptions {
    pub max_length: u32,
}

impl Default for RephraseOptions {
    fn default() -> Self {
        Self { max_length: 60 }
    }
}

/// Identify the source language of a text as an ISO 639-1 code.
///
/// Callers guarantee non-empty input; behavior on empty text is
/// backend-defined.
pub trait DetectLanguage: Send + Sync {
    fn detect(&self, text: &str) -> Result<String, ModelError>;
}

/// Translate a text into the backend's pivot language (English).
pub trait Translate: Send + Sync {
    fn translate(&self, text: &str) -> Result<String, ModelError>;
}

/// Condense a text into a short summary.
pub trait Summarize: Send + Sync {
    fn summarize(&self, text: &str, options: &SummarizeOptions) -> Result<String, ModelError>;
}

/// Rewrite text following an instruction prompt (not raw input text).
pub trait Rephrase: Send + Sync {
    fn rephrase(&self, prompt: &str, options: &RephraseOptions) -> Result<String, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_defaults_are_fixed() {
        let options = SummarizeOptions::default();
        assert_eq!(options.max_length, 60);
        assert_eq!(options.min_length, 20);
        assert!(!options.do_sample);
    }

    #[test]
    fn rephrase_default_is_fixed() {
        assert_eq!(RephraseOptions::default().max_length, 60);
    }

    #[test]
    fn summarize_options_serialize_as_parameters_object() {
        let json = serde_json::to_value(SummarizeOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"max_length": 60, "min_length": 20, "do_sample": false})
        );
    }
}
