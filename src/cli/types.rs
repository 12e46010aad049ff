use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "sectoc")]
#[command(about = "Nested table-of-contents generator for section-marked HTML documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Custom configuration file (defaults to ./sectoc.yml)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate tables of contents into one or more documents
    #[command(alias = "g")]
    Generate {
        /// HTML file, or directory of HTML files, to process
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Write results here instead of updating files in place
        #[arg(short, long, value_name = "DEST")]
        destination: Option<PathBuf>,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// List the section markers discovered in a document
    #[command(alias = "l")]
    List {
        /// HTML file to scan
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Emit the section list as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
