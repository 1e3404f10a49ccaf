//! Configuration resolution for docnorm
//!
//! Resolves an immutable `AppConfig` once at startup with priority
//! ENV → TOML config file → compiled default, then injects it into the
//! registry client and application state. Nothing reads configuration
//! ambiently after startup.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Default listen port for the service
pub const DEFAULT_LISTEN_PORT: u16 = 5810;

/// Default remote registry base URL
const DEFAULT_REGISTRY_URL: &str = "http://127.0.0.1:9100";

/// Default caller name attached to submissions
const DEFAULT_CANDIDATE_NAME: &str = "docnorm";

/// Retry policy for registry requests
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum request attempts before giving up
    pub max_attempts: u32,
    /// Base backoff delay; attempt `n` waits `base_delay * 2^n`
    pub base_delay: Duration,
    /// Per-attempt request timeout
    pub request_timeout: Duration,
    /// Wall-clock ceiling across the whole retry loop. Bounds retries under
    /// slow-but-not-timing-out responses, which the attempt count alone
    /// does not.
    pub overall_deadline: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(300),
            request_timeout: Duration::from_secs(5),
            overall_deadline: Duration::from_secs(30),
        }
    }
}

/// Connection settings for the remote document registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL, joined with request paths
    pub base_url: String,
    /// Caller identity token sent as `X-Candidate-Id` on every request
    pub candidate_id: String,
    pub retry: RetryPolicy,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_port: u16,
    /// Default `candidate_name` for submissions that omit one
    pub candidate_name: String,
    pub registry: RegistryConfig,
}

/// Optional overrides read from the TOML config file
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    registry_url: Option<String>,
    candidate_id: Option<String>,
    candidate_name: Option<String>,
    listen_port: Option<u16>,
    retry_max_attempts: Option<u32>,
    retry_base_delay_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
    retry_deadline_secs: Option<u64>,
}

/// Platform config file path: `<config_dir>/docnorm/config.toml`
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docnorm").join("config.toml"))
}

fn load_toml_config() -> TomlConfig {
    let Some(path) = config_file_path() else {
        return TomlConfig::default();
    };
    let Ok(content) = std::fs::read_to_string(&path) else {
        debug!(path = %path.display(), "no config file, using ENV and defaults");
        return TomlConfig::default();
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unparseable config file");
            TomlConfig::default()
        }
    }
}

/// Read an environment variable, parsed; unparseable values are ignored
/// with a warning rather than aborting startup.
fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

impl AppConfig {
    /// Resolve configuration from ENV, the TOML config file, and defaults.
    pub fn resolve() -> Self {
        let file = load_toml_config();

        let base_url = std::env::var("DOCNORM_REGISTRY_URL")
            .ok()
            .or(file.registry_url)
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

        let candidate_id = std::env::var("DOCNORM_CANDIDATE_ID")
            .ok()
            .or(file.candidate_id)
            .unwrap_or_default();
        if candidate_id.is_empty() {
            warn!("no candidate id configured; registry requests will carry an empty identity header");
        }

        let candidate_name = std::env::var("DOCNORM_CANDIDATE_NAME")
            .ok()
            .or(file.candidate_name)
            .unwrap_or_else(|| DEFAULT_CANDIDATE_NAME.to_string());

        let listen_port = env_parsed("DOCNORM_PORT")
            .or(file.listen_port)
            .unwrap_or(DEFAULT_LISTEN_PORT);

        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            max_attempts: env_parsed("DOCNORM_RETRY_MAX_ATTEMPTS")
                .or(file.retry_max_attempts)
                .unwrap_or(defaults.max_attempts),
            base_delay: env_parsed("DOCNORM_RETRY_BASE_DELAY_MS")
                .or(file.retry_base_delay_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.base_delay),
            request_timeout: env_parsed("DOCNORM_REQUEST_TIMEOUT_SECS")
                .or(file.request_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            overall_deadline: env_parsed("DOCNORM_RETRY_DEADLINE_SECS")
                .or(file.retry_deadline_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.overall_deadline),
        };

        Self {
            listen_port,
            candidate_name,
            registry: RegistryConfig {
                base_url,
                candidate_id,
                retry,
            },
        }
    }
}
