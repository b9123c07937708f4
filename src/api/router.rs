//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Two routes: liveness at `/` and the annotation pipeline at
//! `/process_text`. Handlers get the shared [`ApiContext`] via state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::pipeline::processor::TextPipeline;

/// Build the service router around a pipeline built at startup.
pub fn service_router(pipeline: Arc<TextPipeline>) -> Router {
    let ctx = ApiContext::new(pipeline);
    Router::new()
        .route("/", get(endpoints::health::check))
        .route("/process_text", post(endpoints::process::handle))
        .with_state(ctx)
}
