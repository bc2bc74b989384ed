//! Interactive scanning session
//!
//! The terminal version of the scan page: a form, a loading spinner, then
//! either the report or an error with the form shown again.

use std::path::Path;

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::cli::scan::{save_report, scan_once};
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::session::{
    FormInput, ScanSession, ScanView, ScrollAlign, ScrollIntent, ScrollRegion, ViewState,
};

/// Choices offered under a finished report
const RESULT_ACTIONS: [&str; 3] = ["New scan", "Save HTML report", "Quit"];

/// Run the interactive loop until the user quits.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;
    let format = opts.resolve_format(&config);
    let client = opts.build_client(&config)?;
    let theme = ColorfulTheme::default();

    print_intro(client.base_url());
    let mut session = ScanSession::new(client);
    session.set_input(FormInput::new("", config.nameserver(None)));

    loop {
        let input = prompt_form(&theme, session.form())?;
        session.set_input(input);
        scan_once(&mut session).await?;
        apply_scroll(session.take_scroll());

        match session.state() {
            ViewState::Results(view) => {
                output::print(&**view, format)?;
                println!();

                loop {
                    let choice = Select::with_theme(&theme)
                        .with_prompt("What next?")
                        .items(&RESULT_ACTIONS)
                        .default(0)
                        .interact()?;
                    match choice {
                        0 => break,
                        1 => {
                            let path: String = Input::with_theme(&theme)
                                .with_prompt("Save report to")
                                .default(format!("{}.html", view.result.domain.replace('/', "_")))
                                .interact_text()?;
                            try_save_report(view, Path::new(&path));
                        }
                        _ => return Ok(()),
                    }
                }

                session.reset();
                session.set_input(FormInput::new("", config.nameserver(None)));
                apply_scroll(session.take_scroll());
            }
            ViewState::Error(message) => {
                eprintln!("{} {}\n", "✗".red(), message.red());
                // The form stays up with the previous input for correction
            }
            ViewState::Form | ViewState::Loading => {}
        }
    }
}

fn prompt_form(theme: &ColorfulTheme, previous: &FormInput) -> Result<FormInput> {
    let domain: String = Input::with_theme(theme)
        .with_prompt("Domain")
        .with_initial_text(previous.domain.clone())
        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("Domain is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let nameserver: String = Input::with_theme(theme)
        .with_prompt("Nameserver (optional)")
        .with_initial_text(previous.nameserver.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(FormInput::new(domain, nameserver))
}

/// Save the report, reporting a failure instead of ending the session.
fn try_save_report(view: &ScanView, path: &Path) -> bool {
    match save_report(view, path) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{} Could not save report: {}\n", "✗".red(), err);
            false
        }
    }
}

fn print_intro(api_host: &str) {
    println!("{}", "zonescope".bold().green());
    println!(
        "DNS security checks via {}. Leave the nameserver empty to use the service default.\n",
        api_host.cyan()
    );
}

/// Terminal stand-in for scrolling a region into view.
fn apply_scroll(intent: Option<ScrollIntent>) {
    let Some(intent) = intent else {
        return;
    };
    match (intent.region, intent.align) {
        (ScrollRegion::Intro, _) => println!("{}\n", "─".repeat(52).dimmed()),
        (_, ScrollAlign::Center) => println!("\n"),
        (_, ScrollAlign::Start) => println!(),
    }
}
