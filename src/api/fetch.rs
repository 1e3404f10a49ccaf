//! Raw batch retrieval endpoint

use crate::error::ApiResult;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

/// Remote path for raw batch data
const REGISTRY_DATA_PATH: &str = "/api/data";

#[derive(Debug, Deserialize)]
pub struct FetchParams {
    /// Batch identifier; registry default is batch "1"
    batch: Option<String>,
}

/// GET /api/fetch?batch=1
///
/// Fetches a raw batch from the registry and relays its payload untouched.
/// The payload shape is controlled by the remote side; nothing here is
/// normalized yet.
pub async fn fetch_raw_batch(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> ApiResult<Json<Value>> {
    let batch = params.batch.unwrap_or_else(|| "1".to_string());
    tracing::info!(batch = %batch, "fetching raw batch from registry");

    let payload = state
        .client
        .fetch(REGISTRY_DATA_PATH, &[("batch", batch.as_str())])
        .await?;

    Ok(Json(payload))
}

/// Build fetch routes
pub fn fetch_routes() -> Router<AppState> {
    Router::new().route("/api/fetch", get(fetch_raw_batch))
}
