//! Global CLI options shared across all commands

use std::time::Duration;

use crate::cli::{Cli, OutputFormat};
use crate::client::ScanServiceClient;
use crate::config::Config;
use crate::error::Result;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in by the
/// `resolve_*` helpers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.zonescope/config.yaml)
    pub config: Option<String>,

    /// Scan service URL override
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or(config.preferences.format)
            .unwrap_or_default()
    }

    pub fn resolve_timeout(&self, config: &Config) -> Option<Duration> {
        config.timeout()
    }

    /// Build the scan service client for these options.
    pub fn build_client(&self, config: &Config) -> Result<ScanServiceClient> {
        ScanServiceClient::with_host(
            Some(config.api_host(self.api_host_ref())),
            self.resolve_timeout(config),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/path".to_string()),
            api_host: Some("http://localhost:8080".to_string()),
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_host_ref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_format_precedence() {
        let config = Config {
            preferences: Preferences {
                format: Some(OutputFormat::Table),
                timeout_secs: None,
            },
            ..Config::default()
        };

        let flag = GlobalOptions {
            format: Some(OutputFormat::Json),
            ..GlobalOptions::default()
        };
        assert_eq!(flag.resolve_format(&config), OutputFormat::Json);
        assert_eq!(
            GlobalOptions::default().resolve_format(&config),
            OutputFormat::Table
        );
        assert_eq!(
            GlobalOptions::default().resolve_format(&Config::default()),
            OutputFormat::Pretty
        );
    }

    #[test]
    fn test_build_client_uses_override_host() {
        let opts = GlobalOptions {
            api_host: Some("http://localhost:8080/".to_string()),
            ..GlobalOptions::default()
        };
        let client = opts.build_client(&Config::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
