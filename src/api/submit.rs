//! Cleaned batch submission endpoint

use crate::error::ApiResult;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

/// Remote path for cleaned batch submission
const REGISTRY_SUBMIT_PATH: &str = "/api/submit";

#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    /// Submitter name; falls back to the configured candidate name
    candidate_name: Option<String>,
    batch_id: Option<String>,
    /// Cleaned records, relayed to the registry verbatim
    #[serde(default)]
    cleaned_items: Vec<Value>,
}

/// POST /api/submit
///
/// Body: `{ "candidate_name": "...", "batch_id": "...", "cleaned_items": [...] }`
/// Forwards the cleaned batch to the registry and relays its response
/// (score, etc.) verbatim.
pub async fn submit_cleaned_batch(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> ApiResult<Json<Value>> {
    let candidate_name = request
        .candidate_name
        .unwrap_or_else(|| state.config.candidate_name.clone());
    let batch_id = request.batch_id.unwrap_or_else(|| "1".to_string());

    tracing::info!(
        batch_id = %batch_id,
        item_count = request.cleaned_items.len(),
        "submitting cleaned batch to registry"
    );

    let body = json!({
        "candidate_name": candidate_name,
        "batch_id": batch_id,
        "cleaned_items": request.cleaned_items,
    });

    let response = state.client.submit(REGISTRY_SUBMIT_PATH, &body).await?;

    Ok(Json(response))
}

/// Build submit routes
pub fn submit_routes() -> Router<AppState> {
    Router::new().route("/api/submit", post(submit_cleaned_batch))
}
