//! CLI argument definitions for colcheck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colcheck",
    version,
    about = "Validate CSV column headers against a YAML schema",
    long_about = "Validate CSV column headers against a YAML schema.\n\n\
                  Headers are normalized (lowercase, punctuation to '_', separators\n\
                  trimmed and collapsed) before comparison, so 'Customer Name ' matches\n\
                  'customer_name'. Column order is ignored."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a CSV file's headers against a table in the schema.
    Check(CheckArgs),

    /// List the tables declared in a schema.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV file whose header row is validated.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    /// YAML schema declaring the expected columns.
    #[arg(long = "config", short = 'c', value_name = "YAML")]
    pub config: PathBuf,

    /// Table record to validate against (optional for single-table schemas).
    #[arg(long = "table", short = 't', value_name = "NAME")]
    pub table: Option<String>,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// YAML schema to inspect.
    #[arg(long = "config", short = 'c', value_name = "YAML")]
    pub config: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
