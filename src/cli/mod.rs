pub mod config;
pub mod interpret;
pub mod stats;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scan-interpreter",
    about = "Explain the discrepancies found in a scan report in plain words."
)]
pub struct Cli {
    /// Log classification progress (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpret the comparisons of a report and print a suggested explanation.
    Interpret {
        /// Path to the JSON report
        file: String,
        /// Print the interpretations as JSON instead of prose
        #[arg(long)]
        json: bool,
        /// Also print a table of the interpretations
        #[arg(long)]
        breakdown: bool,
        /// Largest missing received amount considered dust (overrides settings)
        #[arg(long = "dust-threshold")]
        dust_threshold: Option<f64>,
        /// Draw connectives and hedges in a fixed order instead of at random
        #[arg(long = "fixed-wording")]
        fixed_wording: bool,
    },
    /// Show comparison statistics for a report.
    Stats {
        /// Path to the JSON report
        file: String,
    },
    /// Show or change settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current settings.
    Show,
    /// Update settings.
    Set {
        /// Default dust threshold
        #[arg(long = "dust-threshold")]
        dust_threshold: Option<f64>,
        /// Substring expected in the report's `meta.by` field
        #[arg(long)]
        producer: Option<String>,
    },
}
