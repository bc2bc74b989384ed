//! Check display rows for table output

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::TestResult;
use crate::output::escape::sanitize_terminal;

/// One check as a table row.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TestRowDisplay {
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "CHECK")]
    pub name: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    /// Evidence lines, one per line in the cell
    #[tabled(rename = "DETAILS")]
    pub details: String,
}

impl TestRowDisplay {
    pub fn new(index: usize, test: &TestResult) -> Self {
        let details = if test.details.is_empty() {
            "--".to_string()
        } else {
            test.details
                .iter()
                .map(|d| sanitize_terminal(d))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self {
            index: index + 1,
            name: sanitize_terminal(&test.name),
            status: test.resolved_status().as_str().to_uppercase(),
            severity: test.resolved_severity().as_str().to_uppercase(),
            details,
        }
    }
}
