//! Request pipeline — sequences the model calls for one request.
//!
//! `TextPipeline` owns one implementation per seam, constructed at startup
//! and shared immutably across requests. `process` is synchronous; the API
//! layer runs it on the blocking pool. A stage failure fails the whole
//! request — there are no retries and no partial responses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::gateway::{
    DetectLanguage, ModelError, Rephrase, RephraseOptions, Summarize, SummarizeOptions, Translate,
};
use super::prompt::rephrase_prompt;
use super::scanner::{EntityScanner, ScanError};
use super::tags::{extract_tags, TagBundle};

/// Tone used when the request does not name one.
pub const DEFAULT_TONE: &str = "Professional";

/// Language the non-English path translates into.
pub const PIVOT_LANGUAGE: &str = "en";

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_target_lang() -> String {
    PIVOT_LANGUAGE.to_string()
}

/// Body of `POST /process_text`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default = "default_tone")]
    pub tone: String,
    /// Accepted for API compatibility but not forwarded anywhere: the
    /// translation backend's pivot target is fixed.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl ProcessRequest {
    /// A request carrying only text, with defaults for the rest.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            tone: default_tone(),
            target_lang: default_target_lang(),
        }
    }

    pub fn with_tone(mut self, tone: &str) -> Self {
        self.tone = tone.to_string();
        self
    }
}

/// The annotation bundle returned for one request.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub original_language: String,
    pub translated_input: String,
    pub summary: String,
    pub rephrased_summary: String,
    pub tags: TagBundle,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No text provided")]
    EmptyText,

    #[error("language detection failed: {0}")]
    Detection(#[source] ModelError),

    #[error("translation failed: {0}")]
    Translation(#[source] ModelError),

    #[error("summarization failed: {0}")]
    Summarization(#[source] ModelError),

    #[error("tone rephrasing failed: {0}")]
    Rephrasing(#[source] ModelError),

    #[error("entity scan failed: {0}")]
    Scan(#[from] ScanError),
}

impl PipelineError {
    /// Stable stage name for error responses and logs.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::EmptyText => "validation",
            Self::Detection(_) => "detection",
            Self::Translation(_) => "translation",
            Self::Summarization(_) => "summarization",
            Self::Rephrasing(_) => "rephrasing",
            Self::Scan(_) => "scan",
        }
    }
}

/// The composed pipeline. One instance per process.
pub struct TextPipeline {
    detector: Arc<dyn DetectLanguage>,
    translator: Arc<dyn Translate>,
    summarizer: Arc<dyn Summarize>,
    rephraser: Arc<dyn Rephrase>,
    scanner: Arc<dyn EntityScanner>,
}

impl TextPipeline {
    pub fn new(
        detector: Arc<dyn DetectLanguage>,
        translator: Arc<dyn Translate>,
        summarizer: Arc<dyn Summarize>,
        rephraser: Arc<dyn Rephrase>,
        scanner: Arc<dyn EntityScanner>,
    ) -> Self {
        Self {
            detector,
            translator,
            summarizer,
            rephraser,
            scanner,
        }
    }

    /// Run the full annotation sequence for one request.
    pub fn process(&self, request: ProcessRequest) -> Result<ProcessResponse, PipelineError> {
        let text = match request.text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => return Err(PipelineError::EmptyText),
        };

        let detected = self
            .detector
            .detect(&text)
            .map_err(PipelineError::Detection)?;
        tracing::debug!(language = %detected, "language detected");

        let translated = if detected == PIVOT_LANGUAGE {
            text
        } else {
            self.translator
                .translate(&text)
                .map_err(PipelineError::Translation)?
        };

        let summary = self
            .summarizer
            .summarize(&translated, &SummarizeOptions::default())
            .map_err(PipelineError::Summarization)?;

        let prompt = rephrase_prompt(&request.tone, &summary);
        let rephrased = self
            .rephraser
            .rephrase(&prompt, &RephraseOptions::default())
            .map_err(PipelineError::Rephrasing)?;

        // Tags come from the translated text, not the original or summary.
        let doc = self.scanner.parse(&translated)?;
        let tags = extract_tags(&doc, &translated);
        tracing::debug!(
            entities = doc.entities.len(),
            tokens = doc.tokens.len(),
            tone = %request.tone,
            target_lang = %request.target_lang,
            "annotations assembled"
        );

        Ok(ProcessResponse {
            original_language: detected,
            translated_input: translated,
            summary,
            rephrased_summary: rephrased,
            tags,
        })
    }
}
