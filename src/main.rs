//! docnorm - Document Registry Normalization Microservice
//!
//! Fetches messy document batches from a remote registry, reconciles them
//! into a canonical schema with validity flags and duplicate removal, and
//! submits cleaned batches back for scoring.

use anyhow::Result;
use tracing::info;

use docnorm::config::AppConfig;
use docnorm::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting docnorm (Document Registry Normalization) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = AppConfig::resolve();
    info!("Registry endpoint: {}", config.registry.base_url);
    info!(
        "Retry policy: {} attempts, {} ms base delay, {} s deadline",
        config.registry.retry.max_attempts,
        config.registry.retry.base_delay.as_millis(),
        config.registry.retry.overall_deadline.as_secs()
    );

    let listen_port = config.listen_port;
    let state = AppState::new(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", listen_port)).await?;
    info!("Listening on http://127.0.0.1:{}", listen_port);
    info!("Health check: http://127.0.0.1:{}/health", listen_port);

    axum::serve(listener, app).await?;

    Ok(())
}
