//! Client for the upstream statistical API.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, instrument};

use super::error::GatewayError;

/// Thin wrapper over a shared `reqwest::Client` bound to one upstream endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Builds a client whose requests fail after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one GET with the given query pairs and parses the body as JSON.
    ///
    /// Connection failures, timeouts, non-2xx statuses and undecodable bodies are all
    /// reported as [`GatewayError::UpstreamTransport`].
    #[instrument(skip(self, params), fields(base_url = %self.base_url))]
    pub async fn fetch(&self, params: &[(&str, String)]) -> Result<Value, GatewayError> {
        let request = self
            .http_client
            .get(&self.base_url)
            .query(params)
            .build()
            .map_err(|e| GatewayError::internal(format!("Failed to build upstream request: {e}")))?;

        debug!(url = %request.url(), "Calling upstream");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        info!(status = %status, "Upstream request completed");

        let response = response
            .error_for_status()
            .map_err(|e| GatewayError::upstream(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::upstream(format!(
                "request timed out after {} ms: {e}",
                self.timeout.as_millis()
            ))
        } else if e.is_connect() {
            GatewayError::upstream(format!("failed to connect to upstream: {e}"))
        } else if e.is_decode() {
            GatewayError::upstream(format!("invalid JSON from upstream: {e}"))
        } else {
            GatewayError::upstream(e.to_string())
        }
    }
}
