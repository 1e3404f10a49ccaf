//! docnorm library interface
//!
//! Exposes the normalization pipeline and HTTP surface for integration
//! testing.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use crate::config::AppConfig;
use crate::services::{RecordNormalizer, RegistryClient, RegistryError};
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved service configuration
    pub config: AppConfig,
    /// Registry client with retry/backoff
    pub client: Arc<RegistryClient>,
    /// Raw-to-canonical record normalizer
    pub normalizer: RecordNormalizer,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create application state from resolved configuration.
    pub fn new(config: AppConfig) -> Result<Self, RegistryError> {
        let client = Arc::new(RegistryClient::new(config.registry.clone())?);
        Ok(Self {
            config,
            client,
            normalizer: RecordNormalizer::new(),
            startup_time: Utc::now(),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::fetch_routes())
        .merge(api::normalize_routes())
        .merge(api::submit_routes())
        .merge(api::health_routes())
        .with_state(state)
}
