//! CLI argument definitions for icmp-specgen.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "icmp-specgen",
    version,
    about = "Generate ICMP/ICMPv6 type tables from IANA registry XML",
    long_about = "Compile an IANA ICMP or ICMPv6 parameters registry into a type table\n\
                  with sub-codes, and render it as a Haskell module or JSON.\n\n\
                  Reads registry XML from --input or stdin."
)]
pub struct Cli {
    /// Read the ICMPv6 registry instead of the ICMP one.
    #[arg(long = "use-v6")]
    pub use_v6: bool,

    /// Registry XML file (default: stdin).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file, or `-` for stdout.
    ///
    /// Defaults to src/Network/Types/ICMP.hs (or ICMPv6.hs) for Haskell
    /// output and stdout for JSON.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long, value_enum, default_value = "haskell")]
    pub format: OutputFormatArg,

    /// Handlebars template replacing the built-in Haskell module.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Expand type ranges without their upper bound, as older ICMP output did.
    #[arg(long = "exclusive-type-ranges")]
    pub exclusive_type_ranges: bool,

    /// Override the delimiter between type number and name in code
    /// sub-registry titles.
    #[arg(long = "title-delimiter", value_name = "TEXT")]
    pub title_delimiter: Option<String>,

    /// Compile and summarize without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any code was dropped for a missing type.
    #[arg(long = "deny-diagnostics")]
    pub deny_diagnostics: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,

    /// Omit span close events from JSON logs.
    #[arg(long = "no-log-spans")]
    pub no_log_spans: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Haskell,
    Json,
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
