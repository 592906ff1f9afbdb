//! CLI argument definitions for the schedule normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sched",
    version,
    about = "Schedule Normalizer - Convert vendor schedule exports to a canonical model",
    long_about = "Normalize heterogeneous project-schedule exports (tasks, WBS, \
                  precedence relationships) into one canonical JSON model.\n\n\
                  Field resolution is configurable per vendor via a field-map \
                  override file; validation reports structural issues without \
                  blocking normalization."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Normalize a raw snapshot file into the canonical model.
    Normalize(NormalizeArgs),

    /// Lint a raw snapshot against the configured field map.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the raw snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// JSON file with partial field-map overrides merged onto the defaults.
    #[arg(long = "field-map", value_name = "FILE")]
    pub field_map: Option<PathBuf>,

    /// Hours per working day for hour-to-day duration conversion.
    #[arg(long = "hours-per-day", value_name = "N", default_value_t = 8.0)]
    pub hours_per_day: f64,

    /// Write normalized JSON to a file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the raw snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// JSON file with partial field-map overrides merged onto the defaults.
    #[arg(long = "field-map", value_name = "FILE")]
    pub field_map: Option<PathBuf>,

    /// Also write a JSON validation report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
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
