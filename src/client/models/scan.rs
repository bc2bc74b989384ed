//! Scan models

use serde::{Deserialize, Serialize};

/// Body of `POST /scan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Domain to scan, trimmed
    pub domain: String,

    /// Nameserver to query, trimmed. Empty lets the service pick its default.
    pub nameserver: String,
}

impl ScanRequest {
    /// Build a request from raw form values, trimming both fields.
    pub fn new(domain: &str, nameserver: &str) -> Self {
        Self {
            domain: domain.trim().to_string(),
            nameserver: nameserver.trim().to_string(),
        }
    }
}

/// Successful scan response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Domain that was scanned
    pub domain: String,

    /// Nameserver the service queried
    #[serde(default)]
    pub nameserver: String,

    /// ISO-8601 timestamp, with or without an offset
    pub timestamp: String,

    /// Aggregate counts and score
    pub stats: ScanStats,

    /// Individual checks, in display order
    #[serde(default)]
    pub tests: Vec<TestResult>,
}

/// Aggregate statistics for one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Overall score, 0-100
    pub score: u32,

    #[serde(default)]
    pub safe: u32,

    #[serde(default)]
    pub warning: u32,

    #[serde(default)]
    pub vulnerable: u32,

    /// Number of checks, when the service includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

impl ScanStats {
    /// Whether the per-status counts add up to the number of checks.
    pub fn is_consistent_with(&self, tests: &[TestResult]) -> bool {
        self.counted() == tests.len() as u64
    }

    /// Sum of the per-status counts. Widened so any `u32` inputs fit.
    pub fn counted(&self) -> u64 {
        u64::from(self.safe) + u64::from(self.warning) + u64::from(self.vulnerable)
    }
}

/// One security check within a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Raw status as sent by the service. See [`TestStatus::resolve`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Raw severity as sent by the service. See [`Severity::resolve`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Evidence lines, in display order
    #[serde(default)]
    pub details: Vec<String>,
}

impl TestResult {
    pub fn resolved_status(&self) -> TestStatus {
        TestStatus::resolve(self.status.as_deref())
    }

    pub fn resolved_severity(&self) -> Severity {
        Severity::resolve(self.severity.as_deref())
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Safe,
    Warning,
    Vulnerable,
    Error,
}

impl TestStatus {
    /// Resolve a wire status.
    ///
    /// Anything other than `safe`, `warning` or `vulnerable` (including a
    /// missing status and values like `missing`) resolves to [`TestStatus::Error`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("safe") => TestStatus::Safe,
            Some("warning") => TestStatus::Warning,
            Some("vulnerable") => TestStatus::Vulnerable,
            _ => TestStatus::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Safe => "safe",
            TestStatus::Warning => "warning",
            TestStatus::Vulnerable => "vulnerable",
            TestStatus::Error => "error",
        }
    }
}

/// Impact ranking of a check, independent of its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Resolve a wire severity. Missing or unrecognized values resolve to
    /// [`Severity::Low`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("medium") => Severity::Medium,
            Some("high") => Severity::High,
            Some("critical") => Severity::Critical,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
