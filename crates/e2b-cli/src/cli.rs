//! CLI argument definitions for the ICSR exporter.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use e2b_vocab::TableKind;

#[derive(Parser)]
#[command(
    name = "e2b-encode",
    version,
    about = "Export pharmacovigilance cases as ICH E2B(R3) ICSR XML",
    long_about = "Export pharmacovigilance case records as ICH E2B(R3) Individual Case \
                  Safety Reports.\n\n\
                  Reads a case record snapshot (JSON) and writes the HL7 v3 batch \
                  document expected by regulatory gateways."
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

    /// Allow patient data (initials, narrative, verbatim terms) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode one case record into an ICSR XML file.
    Encode(EncodeArgs),

    /// List the vocabulary tables, or the labels and codes of one table.
    Vocab(VocabArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Case record snapshot in JSON.
    #[arg(value_name = "CASE_JSON")]
    pub case_json: PathBuf,

    /// Directory for `<case id>_E2B_R3.xml` (default: next to the case file).
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Write the XML to standard output instead of a file.
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Write the document on a single line.
    #[arg(long = "compact")]
    pub compact: bool,

    /// Fixed creation timestamp (RFC 3339), for reproducible output.
    #[arg(long = "creation-time", value_name = "RFC3339")]
    pub creation_time: Option<DateTime<Utc>>,

    /// Organization named as the sender.
    #[arg(long = "sender-organization", value_name = "NAME")]
    pub sender_organization: Option<String>,
}

#[derive(Args)]
pub struct VocabArgs {
    /// Table to print, e.g. `outcome` or `action-taken`.
    #[arg(value_name = "TABLE")]
    pub table: Option<TableKind>,
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
