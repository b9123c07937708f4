//! Shared state for the API layer.

use std::sync::Arc;

use crate::pipeline::processor::TextPipeline;

/// Shared context for all routes: the pipeline built once at startup,
/// immutable for the process lifetime.
#[derive(Clone)]
pub struct ApiContext {
    pub pipeline: Arc<TextPipeline>,
}

impl ApiContext {
    pub fn new(pipeline: Arc<TextPipeline>) -> Self {
        Self { pipeline }
    }
}
