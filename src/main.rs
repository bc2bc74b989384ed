//! zonescope - command-line client for a DNS security scan service

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Scan {
            domain,
            nameserver,
            output,
        } => cli::scan::run(&opts, &domain, nameserver.as_deref(), output.as_deref()).await,
        Commands::Interactive => cli::interactive::run(&opts).await,
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("zonescope version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "zonescope",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; `--debug` raises the crate's own default to debug.
fn init_logging(debug: bool) {
    let default_filter = if debug { "zonescope=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
