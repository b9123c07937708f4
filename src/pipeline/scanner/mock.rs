//! Mock entity scanner for testing — returns a canned document and records
//! the texts it was asked to parse.

use std::sync::Mutex;

use super::{Document, EntityScanner, ScanError};

pub struct MockScanner {
    document: Document,
    failing: bool,
    seen: Mutex<Vec<String>>,
}

impl MockScanner {
    /// A scanner that answers every parse with the given document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            failing: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// A scanner that finds nothing.
    pub fn empty() -> Self {
        Self::new(Document::default())
    }

    /// A scanner whose backend is down.
    pub fn failing() -> Self {
        Self {
            document: Document::default(),
            failing: true,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Every text passed to `parse`, in call order.
    pub fn seen_texts(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl EntityScanner for MockScanner {
    fn parse(&self, text: &str) -> Result<Document, ScanError> {
        self.seen.lock().unwrap().push(text.to_string());
        if self.failing {
            return Err(ScanError::Server {
                status: 500,
                body: "parse backend offline".to_string(),
            });
        }
        Ok(self.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::scanner::{Entity, EntityLabel, Token};

    #[test]
    fn returns_canned_document_and_records_input() {
        let scanner = MockScanner::new(Document {
            entities: vec![Entity {
                text: "Paris".into(),
                label: EntityLabel::Gpe,
            }],
            tokens: vec![Token { text: "Paris".into() }],
        });

        let doc = scanner.parse("Paris is great.").unwrap();
        assert_eq!(doc.entities.len(), 1);
        assert_eq!(scanner.seen_texts(), vec!["Paris is great.".to_string()]);
    }

    #[test]
    fn failing_scanner_returns_server_error() {
        let scanner = MockScanner::failing();
        assert!(matches!(
            scanner.parse("anything"),
            Err(ScanError::Server { status: 500, .. })
        ));
        // The input is still recorded even when the backend fails.
        assert_eq!(scanner.seen_texts().len(), 1);
    }
}
