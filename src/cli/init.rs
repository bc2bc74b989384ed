//! Init command implementation

use clap::ValueEnum;
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::client::service::DEFAULT_API_HOST;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Existing values are offered as defaults, so re-running init edits the
/// current file rather than starting over.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut config = Config::load_or_default(opts.config_ref())?;

    println!("{}", "Welcome to zonescope!".bold().green());
    println!("Let's point zonescope at your scan service.\n");

    let default_host = opts
        .api_host_ref()
        .map(str::to_string)
        .or_else(|| config.api_host.clone())
        .unwrap_or_else(|| DEFAULT_API_HOST.to_string());
    let api_host: String = Input::with_theme(&theme)
        .with_prompt("Scan service URL")
        .default(default_host)
        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(())
            } else {
                Err("URL must start with http:// or https://")
            }
        })
        .interact_text()?;

    let nameserver: String = Input::with_theme(&theme)
        .with_prompt("Default nameserver (blank for the service default)")
        .with_initial_text(config.default_nameserver.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let formats = OutputFormat::value_variants();
    let current = opts.resolve_format(&config);
    let selected = formats.iter().position(|f| *f == current).unwrap_or(0);
    let names: Vec<&str> = formats.iter().map(OutputFormat::as_str).collect();
    let choice = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&names)
        .default(selected)
        .interact()?;

    config.api_host = Some(api_host.trim_end_matches('/').to_string());
    let nameserver = nameserver.trim();
    config.default_nameserver = (!nameserver.is_empty()).then(|| nameserver.to_string());
    config.preferences.format = Some(formats[choice]);
    config.validate()?;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Scan a domain", "zonescope scan example.com".cyan());
    println!("  {} - Scan several domains", "zonescope interactive".cyan());

    Ok(())
}
