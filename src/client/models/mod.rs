//! Scan service data models
//!
//! Wire types for the `/scan` endpoint, plus the explicit default-resolution
//! rules for the loosely typed `status` and `severity` fields.

mod scan;

pub use scan::{
    ErrorResponse, ScanRequest, ScanResult, ScanStats, Severity, TestResult, TestStatus,
};
