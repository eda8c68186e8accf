//! CLI argument definitions for tabclean.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabclean_model::CleaningProfile;

#[derive(Parser)]
#[command(
    name = "tabclean",
    version,
    about = "Clean text columns in CSV and XLSX files",
    long_about = "Clean text columns in CSV and XLSX files.\n\n\
                  Repairs mojibake, removes accents and special characters, collapses\n\
                  whitespace, formats price columns and converts numeric text columns\n\
                  to numbers. The output format follows the OUTPUT extension."
)]
pub struct Cli {
    /// Input file (.csv, .xlsx, .xlsm or .xls).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (.csv or .xlsx).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Rule profile. `auto` picks products when the output name contains
    /// "produtos" or "products".
    #[arg(long = "profile", value_enum, default_value = "auto")]
    pub profile: ProfileArg,

    /// CSV delimiter to use instead of sniffing it from the header line.
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Load and clean, print the summary, but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the cleaning report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

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

    /// Allow cell values in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Auto,
    General,
    Products,
}

impl ProfileArg {
    /// The fixed profile, or `None` for `auto`.
    pub fn profile(self) -> Option<CleaningProfile> {
        match self {
            Self::Auto => None,
            Self::General => Some(CleaningProfile::General),
            Self::Products => Some(CleaningProfile::Products),
        }
    }
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

/// Accept a single ASCII character, or `tab` / `\t`.
fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() => Ok(*byte),
            _ => Err(format!(
                "expected a single punctuation character or 'tab', got '{value}'"
            )),
        },
    }
}
