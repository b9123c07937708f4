//! Mock model gateway for testing — canned outputs plus call recording.
//!
//! One `MockModel` instance implements all four capability traits so a test
//! can back every seam with a single recording fake (share it via `Arc` and
//! hand clones to the pipeline).

use std::sync::Mutex;

use super::{
    DetectLanguage, ModelError, Rephrase, RephraseOptions, Summarize, SummarizeOptions, Translate,
};

/// Which capability a failure should be injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Detect,
    Translate,
    Summarize,
    Rephrase,
}

/// One recorded gateway invocation, with everything the caller passed.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Detect { text: String },
    Translate { text: String },
    Summarize { text: String, options: SummarizeOptions },
    Rephrase { prompt: String, options: RephraseOptions },
}

pub struct MockModel {
    language: String,
    translation: String,
    summary: String,
    rephrased: String,
    failing: Option<Capability>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockModel {
    /// A model whose detector reports the given language code.
    pub fn detecting(language: &str) -> Self {
        Self {
            language: language.to_string(),
            translation: "translated text".to_string(),
            summary: "a short summary".to_string(),
            rephrased: "a rephrased summary".to_string(),
            failing: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A model that detects English (the translation-skipping path).
    pub fn english() -> Self {
        Self::detecting("en")
    }

    pub fn with_translation(mut self, translation: &str) -> Self {
        self.translation = translation.to_string();
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = summary.to_string();
        self
    }

    pub fn with_rephrased(mut self, rephrased: &str) -> Self {
        self.rephrased = rephrased.to_string();
        self
    }

    /// Make the given capability fail with a server error.
    pub fn failing_at(mut self, capability: Capability) -> Self {
        self.failing = Some(capability);
        self
    }

    /// Everything recorded so far, in call order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, capability: Capability) -> Result<(), ModelError> {
        if self.failing == Some(capability) {
            return Err(ModelError::Server {
                status: 503,
                body: "model backend offline".to_string(),
            });
        }
        Ok(())
    }
}

impl DetectLanguage for MockModel {
    fn detect(&self, text: &str) -> Result<String, ModelError> {
        self.record(GatewayCall::Detect {
            text: text.to_string(),
        });
        self.check(Capability::Detect)?;
        Ok(self.language.clone())
    }
}

impl Translate for MockModel {
    fn translate(&self, text: &str) -> Result<String, ModelError> {
        self.record(GatewayCall::Translate {
            text: text.to_string(),
        });
        self.check(Capability::Translate)?;
        Ok(self.translation.clone())
    }
}

impl Summarize for MockModel {
    fn summarize(&self, text: &str, options: &SummarizeOptions) -> Result<String, ModelError> {
        self.record(GatewayCall::Summarize {
            text: text.to_string(),
            options: *options,
        });
        self.check(Capability::Summarize)?;
        Ok(self.summary.clone())
    }
}

impl Rephrase for MockModel {
    fn rephrase(&self, prompt: &str, options: &RephraseOptions) -> Result<String, ModelError> {
        self.record(GatewayCall::Rephrase {
            prompt: prompt.to_string(),
            options: *options,
        });
        self.check(Capability::Rephrase)?;
        Ok(self.rephrased.clone())
    }
}
