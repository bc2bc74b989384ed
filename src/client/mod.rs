//! Scan service client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod service;

#[cfg(test)]
pub use mock::MockScanClient;
pub use models::{ScanRequest, ScanResult};
pub use service::ScanServiceClient;

/// Scan service trait
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// Request a scan and wait for the result.
    ///
    /// Non-2xx responses surface as `ApiError::ServerReported`; anything that
    /// prevents a decoded result from coming back surfaces as
    /// `ApiError::Transport` or `ApiError::InvalidResponse`.
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResult>;
}
