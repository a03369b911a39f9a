//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Monthly time ledger.
///
/// Records task hours and time off for the current month through an
/// interactive menu and summarizes them against the month's working hours.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}
