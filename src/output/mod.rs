//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::TestRowDisplay;
use crate::session::ScanView;

pub mod escape;
pub mod formatters;
pub mod html;
pub mod json;
pub mod pretty;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

impl Formattable for ScanView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::format_report(&self.terminal)),
            OutputFormat::Table => {
                let rows: Vec<TestRowDisplay> = self
                    .result
                    .tests
                    .iter()
                    .enumerate()
                    .map(|(i, t)| TestRowDisplay::new(i, t))
                    .collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Json => Ok(json::format_json(&self.result)?),
            OutputFormat::Html => Ok(html::report_html(&self.report)),
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockScanClient;

    #[test]
    fn test_every_format_renders() {
        let view = ScanView::new(MockScanClient::sample_result());

        for format in [
            OutputFormat::Pretty,
            OutputFormat::Table,
            OutputFormat::Json,
            OutputFormat::Html,
        ] {
            let output = view.format(format).unwrap();
            assert!(output.contains("example.com") || output.contains("Zone Transfer"));
        }
    }

    #[test]
    fn test_html_format_is_escaped() {
        let mut result = MockScanClient::sample_result();
        result.domain = "<evil>".to_string();

        let output = ScanView::new(result).format(OutputFormat::Html).unwrap();
        assert!(output.contains("&lt;evil&gt;"));
        assert!(!output.contains("<evil>"));
    }

    #[test]
    fn test_pretty_format_uses_terminal_report() {
        colored::control::set_override(false);
        let mut result = MockScanClient::sample_result();
        result.domain = "<evil>".to_string();

        let output = ScanView::new(result).format(OutputFormat::Pretty).unwrap();
        assert!(output.contains("Scan: <evil>"));
        assert!(!output.contains("&lt;"));
    }
}
