//! icmp-specgen: IANA ICMP registry to type table generator.

use clap::{ColorChoice, Parser};
use icmp_cli::logging::{LogConfig, LogFormat, init_logging};
use icmp_cli::pipeline::run;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::commands::run_options_from_cli;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = run_options_from_cli(&cli);
    let exit_code = match run(&options) {
        Ok(outcome) => {
            if !outcome.wrote_to_stdout() {
                print_summary(&outcome);
            }
            if cli.deny_diagnostics && outcome.compiled.has_diagnostics() {
                eprintln!(
                    "error: {} code(s) dropped for missing types",
                    outcome.compiled.diagnostics.len()
                );
                1
            } else {
                0
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
    config = config
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target)
        .with_spans(!cli.no_log_spans);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("icmp-specgen").chain(args.iter().copied()))
            .expect("parse flags")
    }

    #[test]
    fn log_flags_reach_config() {
        let config = log_config_from_cli(&parse(&[
            "--log-timestamps",
            "--log-target",
            "--no-log-spans",
            "--log-level",
            "debug",
        ]));
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert!(!config.with_spans);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn log_defaults_without_flags() {
        let config = log_config_from_cli(&parse(&[]));
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
        assert!(config.with_spans);
        assert!(config.use_env_filter);
    }
}
