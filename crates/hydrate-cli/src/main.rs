//! Hydrate CLI - track your daily water intake from the command line
//!
//! This is the command-line interface for Hydrate. It provides a
//! user-friendly front end to the core ledger: logging intake, checking
//! progress, trend insights, onboarding, and reminder management.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::AppContext;
use cli::{Cli, Commands};
use errors::CliError;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx) {
        match err.downcast::<CliError>() {
            Ok(cli_err) => cli_err.exit(),
            Err(err) => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Commands::Drink { amount } => commands::handle_drink(ctx, *amount),
        Commands::Status { json } => commands::handle_status(ctx, *json),
        Commands::Goal { goal } => commands::handle_goal(ctx, *goal),
        Commands::Reset => commands::handle_reset(ctx),
        Commands::Week { json } => commands::handle_week(ctx, *json),
        Commands::Onboard(args) => commands::handle_onboard(ctx, args),
        Commands::Remind { command } => commands::handle_remind(ctx, command),
        Commands::Completions { shell } => commands::handle_completions(*shell),
    }
}

/// Install the tracing subscriber, filtered by HYDRATE_LOG.
///
/// Events go to stderr so `--json` output stays parseable.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("HYDRATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
