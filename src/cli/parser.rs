use crate::export::ExportFormat;
use crate::models::WeekRule;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for tourreport
/// CLI application turning tour assignment sheets into weekly reports
#[derive(Parser)]
#[command(
    name = "tourreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn truck-tour assignment sheets into reports grouped by calendar week",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or validate the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },

    /// Build a report grouped by calendar week
    Report {
        /// Tour sheets (.xlsx, .xls, .ods, .csv)
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output file")]
        out: PathBuf,

        #[arg(
            long,
            short = 'd',
            value_name = "NAME",
            help = "Only entries whose driver name contains NAME (case-insensitive)"
        )]
        driver: Option<String>,

        #[arg(long = "week-rule", value_enum, help = "Calendar week rule (default from config)")]
        week_rule: Option<WeekRule>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the counters and tour breakdown of one driver
    Summary {
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        #[arg(long, short = 'd', value_name = "NAME")]
        driver: String,

        #[arg(long = "week-rule", value_enum)]
        week_rule: Option<WeekRule>,
    },
}
