//! webgme - scaffolding for WebGME projects
//!
//! This is the main entry point for the `webgme` command-line interface.

mod cli;
mod commands;
mod output;
mod utils;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Ls(args) => commands::component::list(args),
        Commands::New(args) => commands::component::create(args),
        Commands::Add(args) => commands::component::add(args, &cli.npm).await,
        Commands::Rm(args) => commands::component::remove(args),
        Commands::Config => commands::config::run(),
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:?}", e);
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // npm output and config updates are logged at info
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
