use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for parkagg
/// CLI application to aggregate parking durations from licence plate exports
#[derive(Parser)]
#[command(
    name = "parkagg",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate parking durations by licence plate based on ENTRY/EXIT events in spreadsheet exports",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the aggregation pipeline on a folder of exports
    Run {
        /// Path to the JSON configuration file
        #[arg(long, default_value = "config.json")]
        config: String,

        /// Override the source folder that contains the CSV exports
        #[arg(long = "source-folder")]
        source_folder: Option<String>,

        /// Override the destination file for aggregated results
        #[arg(long = "output-file")]
        output_file: Option<String>,

        /// Override the timestamp format (chrono strftime syntax)
        #[arg(long = "timestamp-format")]
        timestamp_format: Option<String>,

        /// Recursively search for exports inside the source folder
        #[arg(long)]
        recursive: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write a starter configuration file
    Init {
        #[arg(long, value_name = "FILE", default_value = "config.json")]
        path: String,

        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect or validate the configuration file
    Config {
        #[arg(long, default_value = "config.json")]
        config: String,

        #[arg(long = "print", help = "Print the resolved configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,
    },
}
