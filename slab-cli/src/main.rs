use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod utils;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income tax slab calculator for salaried individuals.
///
/// Computes the annual tax owed on an income, or the income required to
/// owe a given tax, from the published slab table of a fiscal year.
#[derive(Debug, Parser)]
#[command(name = "slab", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate the tax owed on an income
    Tax(cmd::tax::TaxCommand),
    /// Calculate the income required to owe a given tax
    Income(cmd::income::IncomeCommand),
    /// Show the slab table for a fiscal year
    Brackets(cmd::brackets::BracketsCommand),
    /// List the supported fiscal years
    Years(cmd::years::YearsCommand),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Tax(cmd) => cmd.exec(),
        Command::Income(cmd) => cmd.exec(),
        Command::Brackets(cmd) => cmd.exec(),
        Command::Years(cmd) => cmd.exec(),
    }
}
