//! colcheck CLI.

use clap::{ColorChoice, Parser};
use colcheck_cli::commands::{run_check, run_tables};
use colcheck_cli::logging::{LogConfig, LogFormat, init_logging};
use colcheck_cli::types::CheckRequest;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{CheckArgs, Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_check, print_check_json, print_tables};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Check(args) => check(&args),
        Command::Tables(args) => match run_tables(&args.config) {
            Ok(tables) => {
                print_tables(&tables);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn check(args: &CheckArgs) -> i32 {
    let request = CheckRequest {
        config: args.config.clone(),
        data: args.data.clone(),
        table: args.table.clone(),
    };
    let result = match run_check(&request) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    if args.json {
        if let Err(error) = print_check_json(&result) {
            eprintln!("error: {error:#}");
            return 1;
        }
    } else {
        print_check(&result);
    }
    if result.passed() { 0 } else { 1 }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
