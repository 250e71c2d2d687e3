use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for calreport
#[derive(Parser)]
#[command(
    name = "calreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn calendar events into a time report with per-event and total durations",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or several setups)
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Do not print per-event diagnostics
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,
    },

    /// List the configured calendars with their selection index
    Calendars,

    /// Fetch events and write the report
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Calendar index or name (asked interactively when missing)
    #[arg(long, short = 'c')]
    pub calendar: Option<String>,

    /// Start as "year,month,day,hour,minute"; missing parts use the defaults
    #[arg(long, value_name = "Y,M,D,H,M", allow_hyphen_values = true)]
    pub from: Option<String>,

    /// End as "year,month,day,hour,minute"; missing parts use the defaults
    #[arg(long, value_name = "Y,M,D,H,M", allow_hyphen_values = true)]
    pub to: Option<String>,

    /// Only keep events whose title contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,

    #[arg(long, value_enum, default_value = "pdf")]
    pub format: ExportFormat,

    /// Directory the report is written to (default: output_dir from config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Read a stored calendar response instead of querying the service
    #[arg(long, value_name = "FILE")]
    pub events_file: Option<PathBuf>,

    /// Overwrite an existing report without asking
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
