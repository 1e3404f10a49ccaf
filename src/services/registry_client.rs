//! Remote document registry client
//!
//! All registry traffic goes through this client: GET for raw batches, POST
//! for cleaned submissions. Requests carry a fixed identity header and run
//! under a bounded retry loop with exponential backoff.
//!
//! # Retry policy
//! - 429, 500 and 503 are retriable; any other non-2xx status is terminal
//!   and surfaces immediately.
//! - Transport errors and per-attempt timeouts are retriable under the same
//!   attempt budget.
//! - Attempt `n` (0-based) is followed by a `base_delay * 2^n` sleep; there
//!   is no sleep after the final attempt.
//! - The whole loop is additionally bounded by `overall_deadline` wall-clock
//!   time, so slow-but-responsive failures cannot stretch retries
//!   indefinitely.
//!
//! Backoff sleeps go through `tokio::time::sleep` and suspend only the
//! calling task, never the worker thread.

use crate::config::RegistryConfig;
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use std::time::Instant;
use thiserror::Error;

/// Identity header attached to every registry request
const CANDIDATE_ID_HEADER: &str = "X-Candidate-Id";

/// Cap on the backoff doubling exponent, so a misconfigured attempt budget
/// cannot overflow the delay computation
const MAX_BACKOFF_EXPONENT: u32 = 16;

/// Registry client errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// All retry attempts failed on retriable conditions
    #[error("registry request to {path} failed after {attempts} attempts")]
    TransportExhausted { path: String, attempts: u32 },

    /// Non-retriable HTTP status, surfaced without further attempts
    #[error("registry returned HTTP {status} for {path}")]
    TerminalStatus { status: u16, path: String },

    /// 2xx response whose body is not parseable as JSON
    #[error("registry response for {path} is not valid JSON: {message}")]
    InvalidPayload { path: String, message: String },

    /// HTTP client construction failed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// True for statuses that signal a transient server/gateway problem.
fn is_retriable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}

/// Document registry client with bounded retry
pub struct RegistryClient {
    http: Client,
    config: RegistryConfig,
}

impl RegistryClient {
    /// Build a client for the configured registry.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let http = Client::builder()
            .timeout(config.retry.request_timeout)
            .build()
            .map_err(RegistryError::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// GET `base_url + path` with query parameters; parse the body as JSON.
    pub async fn fetch(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, RegistryError> {
        let response = self
            .request_with_retry(Method::GET, path, Some(query), None)
            .await?;
        Self::decode_json(path, response).await
    }

    /// POST `body` as JSON to `base_url + path`; parse the response as JSON.
    pub async fn submit(&self, path: &str, body: &Value) -> Result<Value, RegistryError> {
        let response = self
            .request_with_retry(Method::POST, path, None, Some(body))
            .await?;
        Self::decode_json(path, response).await
    }

    /// Delay before the next attempt, given how many attempts completed.
    fn backoff_delay(&self, completed_attempts: u32) -> std::time::Duration {
        let exponent = completed_attempts
            .saturating_sub(1)
            .min(MAX_BACKOFF_EXPONENT);
        self.config.retry.base_delay.saturating_mul(1 << exponent)
    }

    /// Execute one logical request under the retry policy.
    ///
    /// Returns the first successful response, or the terminal error. Each
    /// attempt rebuilds the request, so a response consumed by a failed
    /// attempt never leaks into the next one.
    async fn request_with_retry(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
    ) -> Result<Response, RegistryError> {
        let url = format!("{}{}", self.config.base_url, path);
        let max_attempts = self.config.retry.max_attempts.max(1);
        let started = Instant::now();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(CANDIDATE_ID_HEADER, &self.config.candidate_id);
            if let Some(pairs) = query {
                request = request.query(pairs);
            }
            if let Some(json) = body {
                request = request.json(json);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        if attempt > 1 {
                            tracing::debug!(
                                path,
                                attempt,
                                "registry request succeeded after retry"
                            );
                        }
                        return Ok(response);
                    }

                    if !is_retriable(status) {
                        tracing::error!(
                            path,
                            status = status.as_u16(),
                            "registry returned terminal status"
                        );
                        return Err(RegistryError::TerminalStatus {
                            status: status.as_u16(),
                            path: path.to_string(),
                        });
                    }

                    tracing::warn!(
                        path,
                        status = status.as_u16(),
                        attempt,
                        "registry returned retriable status"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        path,
                        attempt,
                        error = %err,
                        "registry request failed in transport"
                    );
                }
            }

            if attempt >= max_attempts {
                tracing::error!(path, attempts = attempt, "registry retries exhausted");
                return Err(RegistryError::TransportExhausted {
                    path: path.to_string(),
                    attempts: attempt,
                });
            }

            if started.elapsed() >= self.config.retry.overall_deadline {
                tracing::error!(
                    path,
                    attempts = attempt,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "retry deadline exceeded before attempt budget"
                );
                return Err(RegistryError::TransportExhausted {
                    path: path.to_string(),
                    attempts: attempt,
                });
            }

            let delay = self.backoff_delay(attempt);
            tracing::debug!(
                path,
                attempt,
                delay_ms = delay.as_millis() as u64,
                "backing off before retry"
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn decode_json(path: &str, response: Response) -> Result<Value, RegistryError> {
        response
            .json::<Value>()
            .await
            .map_err(|err| RegistryError::InvalidPayload {
                path: path.to_string(),
                message: err.to_string(),
            })
    }
}
