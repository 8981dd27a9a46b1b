//! CLI argument definitions for the SPDX comparison report.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "spdx-report",
    version,
    about = "Compare SPDX documents field by field",
    long_about = "Compare SPDX documents field by field.\n\n\
                  Prints one verdict row marking which document-level fields differ,\n\
                  followed by one row per document, or writes the same table as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
    /// Compare SPDX JSON documents and print or export the report.
    Compare(CompareArgs),

    /// Check that a CSV report has the expected column layout.
    Verify(VerifyArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// SPDX JSON documents, in report row order.
    #[arg(value_name = "DOC", required = true)]
    pub documents: Vec<PathBuf>,

    /// Row label for a document; repeat once per document (default: file names).
    #[arg(long = "label", value_name = "NAME")]
    pub labels: Vec<String>,

    /// Write the report as CSV instead of printing it.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report options in TOML.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render documents one after another instead of in parallel.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Exit with status 1 when any field differs.
    #[arg(long = "fail-on-diff")]
    pub fail_on_diff: bool,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// CSV report written by `compare --output`.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,
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
