//! Batch normalization endpoint
//!
//! The one endpoint with real logic behind it: normalizes every raw item,
//! flags validity, and removes duplicates. It never fails for per-record
//! reasons; garbage records come back flagged, not rejected.

use crate::models::{RawRecord, ValidatedRecord};
use crate::services::{dedupe, validate};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct NormalizeRequest {
    /// Raw records from the registry; absent means an empty batch
    #[serde(default)]
    items: Vec<RawRecord>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub count_raw: usize,
    pub count_after_dedup: usize,
    pub items: Vec<ValidatedRecord>,
}

/// POST /api/normalize
///
/// Body: `{ "items": [ ...raw records... ] }`
/// Returns the deduplicated batch with per-record validity flags.
pub async fn normalize_batch(
    State(state): State<AppState>,
    Json(request): Json<NormalizeRequest>,
) -> Json<NormalizeResponse> {
    let count_raw = request.items.len();

    let validated: Vec<ValidatedRecord> = request
        .items
        .iter()
        .map(|raw| validate(state.normalizer.normalize(raw)))
        .collect();

    let items = dedupe(validated);

    tracing::info!(
        count_raw,
        count_after_dedup = items.len(),
        "normalized batch"
    );

    Json(NormalizeResponse {
        count_raw,
        count_after_dedup: items.len(),
        items,
    })
}

/// Build normalize routes
pub fn normalize_routes() -> Router<AppState> {
    Router::new().route("/api/normalize", post(normalize_batch))
}
