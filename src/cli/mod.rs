//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod init;
pub mod interactive;
pub mod progress;
pub mod scan;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};

/// zonescope - DNS security scan client
#[derive(Parser, Debug)]
#[command(name = "zonescope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json, html)
    #[arg(
        long,
        global = true,
        env = "ZONESCOPE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "ZONESCOPE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Scan service URL (e.g. http://127.0.0.1:5000)
    #[arg(long, global = true, env = "ZONESCOPE_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ZONESCOPE_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "ZONESCOPE_NO_COLOR", hide_env = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a domain and print the report
    Scan {
        /// Domain to scan
        domain: String,

        /// Nameserver the service should query (defaults to the config value,
        /// then to the service's own default)
        #[arg(long, short = 'n')]
        nameserver: Option<String>,

        /// Also save the report as a standalone HTML page
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Prompt for domains and scan them one after another
    Interactive,

    /// Initialize zonescope configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   zonescope completion bash > /etc/bash_completion.d/zonescope
  zsh:    zonescope completion zsh > \"${fpath[1]}/_zonescope\"
  fish:   zonescope completion fish > ~/.config/fish/completions/zonescope.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
