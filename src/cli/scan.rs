//! Scan command

use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::cli::GlobalOptions;
use crate::cli::progress::with_spinner;
use crate::client::ScanApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{self, html};
use crate::session::{FormInput, ScanSession, ScanView};

/// Run one scan session: submit, wait, print.
///
/// Ends with an error (non-zero exit) when the session lands on the error
/// screen.
pub async fn run(
    opts: &GlobalOptions,
    domain: &str,
    nameserver: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;
    let format = opts.resolve_format(&config);
    let client = opts.build_client(&config)?;
    debug!("Using scan service at {}", client.base_url());

    let mut session = ScanSession::new(client);
    session.set_input(FormInput::new(domain, config.nameserver(nameserver)));

    scan_once(&mut session).await?;

    let state = session.state();
    if let Some(view) = state.scan_view() {
        output::print(view, format)?;
        if let Some(path) = output {
            save_report(view, path)?;
        }
        return Ok(());
    }

    match state.error_message() {
        Some(message) => Err(Error::Scan(message.to_string())),
        None => Err(Error::Other(format!(
            "scan session ended in the {:?} view without a result",
            state.kind()
        ))),
    }
}

/// Submit the session's form and dispatch it behind a spinner.
pub async fn scan_once<C: ScanApi>(session: &mut ScanSession<C>) -> Result<()> {
    let request = session.submit()?;
    let label = if request.nameserver.is_empty() {
        format!("Scanning {}", request.domain)
    } else {
        format!("Scanning {} via {}", request.domain, request.nameserver)
    };

    with_spinner(label, session.dispatch()).await?;
    Ok(())
}

/// Write the HTML report for a completed scan.
pub fn save_report(view: &ScanView, path: &Path) -> Result<()> {
    std::fs::write(path, html::standalone_document(&view.report))?;
    eprintln!(
        "{} Report saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
