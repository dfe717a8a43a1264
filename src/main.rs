//! manage-skills - Claude skills and commands manager
//!
//! Installs the skills and commands of this repository into `~/.claude` by
//! creating symbolic links, and keeps those links consistent across repeated
//! installs, uninstalls and status checks.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod catalog;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod link;
mod prompt;
mod reconcile;
mod ui;

use cli::{Cli, Commands};
use config::Settings;
use error::AppError;
use ui::ConsoleReporter;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "warn,manage_skills=debug",
        _ => "debug,manage_skills=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        let _ = Cli::command().print_help();
        std::process::exit(1);
    };

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut reporter = ConsoleReporter::stdout(settings.color);
    let result = match command {
        Commands::Install(args) => commands::install::run(&settings, args, &mut reporter),
        Commands::Uninstall => commands::uninstall::run(&settings, &mut reporter),
        Commands::Status => commands::status::run(&settings, &mut reporter),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

/// 130 mirrors termination by SIGINT
fn exit_code(error: &AppError) -> i32 {
    match error {
        AppError::PromptInterrupted => 130,
        _ => 1,
    }
}
