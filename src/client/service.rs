//! Scan service HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;

use super::models::{ErrorResponse, ScanRequest, ScanResult};
use super::ScanApi;
use crate::error::{ApiError, GENERIC_SCAN_FAILURE, Result};

/// Default scan service location
pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:5000";

/// Scan service client
pub struct ScanServiceClient {
    http: HttpClient,
    base_url: String,
}

impl ScanServiceClient {
    /// Create a client for the default host with no request timeout
    #[allow(dead_code)]
    pub fn new() -> Result<Self> {
        Self::with_host(None, None)
    }

    /// Create a client with an optional custom host and request timeout.
    ///
    /// Without a timeout the request waits until the service answers or the
    /// connection fails.
    pub fn with_host(api_host: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let base_url = api_host
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Extract the user-facing message from a non-2xx body.
///
/// Bodies that are not JSON, or JSON without an `error` string, fall back to
/// the generic message.
fn server_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or_else(|| GENERIC_SCAN_FAILURE.to_string())
}

#[async_trait]
impl ScanApi for ScanServiceClient {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResult> {
        let url = format!("{}/scan", self.base_url);
        debug!("POST {} for {}", url, request.domain);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;
        debug!("Scan response: {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(ApiError::ServerReported(server_error_message(&body)).into());
        }

        let result = serde_json::from_str::<ScanResult>(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(result)
    }
}
