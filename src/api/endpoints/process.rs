//! Text processing endpoint.

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::processor::{ProcessRequest, ProcessResponse};

/// `POST /process_text` — run the full annotation pipeline on one text.
///
/// The pipeline is synchronous and blocking (five sequential model calls),
/// so it runs on the blocking pool rather than the async worker.
pub async fn handle(
    State(ctx): State<ApiContext>,
    Json(request): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let chars = request.text.as_deref().map(|t| t.chars().count()).unwrap_or(0);
    tracing::info!(%request_id, chars, tone = %request.tone, "processing text");

    let pipeline = ctx.pipeline.clone();
    let result = tokio::task::spawn_blocking(move || pipeline.process(request))
        .await
        .map_err(|e| ApiError::Internal(format!("pipeline task failed: {e}")))?;

    let response = result?;
    tracing::info!(
        %request_id,
        language = %response.original_language,
        "text processed"
    );
    Ok(Json(response))
}
