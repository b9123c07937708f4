//! Entity scanner — seam over the pre-trained NLP document parser.
//!
//! The scanner turns text into a [`Document`]: ordered entity spans with
//! labels plus the parser's token sequence. The parse runs on the
//! translated text, per request, and the `Document` is discarded once tags
//! are extracted.

pub mod document;
pub mod mock;
pub mod parse_client;

pub use document::{Document, Entity, EntityLabel, Token};
pub use mock::MockScanner;
pub use parse_client::ParseClient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("parse server is not reachable at {0}")]
    Connection(String),

    #[error("parse request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("parse server returned error (status {status}): {body}")]
    Server { status: u16, body: String },

    #[error("malformed parse response: {0}")]
    MalformedResponse(String),
}

/// Parse text into a [`Document`]. Deterministic, synchronous, no side
/// effects beyond the backend call.
pub trait EntityScanner: Send + Sync {
    fn parse(&self, text: &str) -> Result<Document, ScanError>;
}
