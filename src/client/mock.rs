//! Mock scan client for testing
//!
//! Provides a mock implementation of [`ScanApi`] for unit testing the session
//! without making real HTTP calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::ScanApi;
use super::models::{ScanRequest, ScanResult, ScanStats, TestResult};
use crate::error::{ApiError, Result};

/// Mock scan client.
///
/// Configure the next response via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockScanClient::new().with_result(MockScanClient::sample_result()).await;
/// let result = mock.scan(&ScanRequest::new("example.com", "")).await?;
/// ```
#[derive(Default)]
pub struct MockScanClient {
    /// Result returned on success
    result: Arc<Mutex<Option<ScanResult>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<ScanRequest>>>,
}

impl MockScanClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the scan result to return.
    pub async fn with_result(self, result: ScanResult) -> Self {
        *self.result.lock().await = Some(result);
        self
    }

    /// Configure an error to return on the next call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<ScanRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// A representative scan result with one check per status.
    pub fn sample_result() -> ScanResult {
        ScanResult {
            domain: "example.com".to_string(),
            nameserver: "127.0.0.1".to_string(),
            timestamp: "2025-01-15T12:00:00+00:00".to_string(),
            stats: ScanStats {
                score: 66,
                safe: 2,
                warning: 1,
                vulnerable: 0,
                total: Some(3),
            },
            tests: vec![
                sample_test(
                    "Zone Transfer (AXFR)",
                    "safe",
                    Some("critical"),
                    &["Zone transfers properly restricted"],
                ),
                sample_test(
                    "SPF Record",
                    "safe",
                    Some("medium"),
                    &["SPF record found: v=spf1 -all"],
                ),
                sample_test("Wildcard DNS", "warning", None, &[]),
            ],
        }
    }
}

/// Build a test result with the given fields.
pub fn sample_test(
    name: &str,
    status: &str,
    severity: Option<&str>,
    details: &[&str],
) -> TestResult {
    TestResult {
        name: name.to_string(),
        description: format!("{} check", name),
        status: Some(status.to_string()),
        severity: severity.map(str::to_string),
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

#[async_trait]
impl ScanApi for MockScanClient {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResult> {
        self.captured_requests.lock().await.push(request.clone());

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        self.result
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Transport("mock has no result configured".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_result() {
        let mock = MockScanClient::new()
            .with_result(MockScanClient::sample_result())
            .await;

        let result = mock.scan(&ScanRequest::new("example.com", "")).await.unwrap();
        assert_eq!(result.tests.len(), 3);
        assert_eq!(mock.captured_requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockScanClient::new()
            .with_result(MockScanClient::sample_result())
            .await
            .with_error(ApiError::Transport("network down".to_string()))
            .await;

        let request = ScanRequest::new("example.com", "");
        assert!(mock.scan(&request).await.is_err());
        assert!(mock.scan(&request).await.is_ok());
    }
}
