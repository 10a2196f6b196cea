use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac monthly event calendar.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Monthly event calendar with aggregate queries"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the calendar, months in natural order.
    Show(ShowArgs),
    /// Report per-month counts, busiest months and the longest event.
    Summary(SummaryArgs),
    /// Cancel events falling on a weekday in the given months.
    Cancel(CancelArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the event file path from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `summary` subcommand.
#[derive(clap::Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Month to report a count for (name, abbreviation or number). Repeatable.
    #[arg(short, long = "month")]
    pub months: Vec<String>,

    /// Also write the summary as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `cancel` subcommand.
#[derive(clap::Args)]
pub struct CancelArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Month to cancel events in (name, abbreviation or number). Repeatable.
    #[arg(short, long = "month")]
    pub months: Vec<String>,

    /// Day of week to cancel (1 = Monday ... 7 = Sunday).
    #[arg(short, long)]
    pub weekday: Option<u8>,
}
