//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "zonescope Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "○".dimmed());
            println!(
                "  → Run {} to create one, defaults apply until then",
                "zonescope init".cyan()
            );
            Config::default()
        }
        Err(err) => return Err(err),
    };

    println!();

    let host = config.api_host(opts.api_host_ref());
    if opts.api_host.is_some() {
        println!(
            "{} Scan service: {} {}",
            "✓".green(),
            host.cyan(),
            "(via --api-host)".dimmed()
        );
    } else if config.api_host.is_some() {
        println!("{} Scan service: {}", "✓".green(), host.cyan());
    } else {
        println!("{} Scan service: {} {}", "○".dimmed(), host, "(default)".dimmed());
    }

    match &config.default_nameserver {
        Some(ns) => println!("{} Default nameserver: {}", "✓".green(), ns),
        None => println!("{} No default nameserver (service decides)", "○".dimmed()),
    }

    let format = opts.resolve_format(&config);
    println!("{} Output format: {}", "○".dimmed(), format.as_str());

    match config.preferences.timeout_secs {
        Some(secs) => println!("{} Request timeout: {}s", "✓".green(), secs),
        None => println!("{} No request timeout", "○".dimmed()),
    }

    println!();
    Ok(())
}
