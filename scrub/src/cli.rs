// scrub/src/cli.rs
//! This file defines the command-line interface (CLI) for the scrub
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scrub",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Redact sensitive identifiers from files",
    long_about = "Scrub is a command-line utility for redacting sensitive identifiers from text files. It scans for US Social Security Numbers and payment card numbers, validates candidates against format and checksum rules, and writes redacted copies while preserving the surrounding document structure.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `scrub` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redacts sensitive identifiers in files, writing redacted copies.
    #[command(about = "Redacts sensitive identifiers in files, writing redacted copies.")]
    Sanitize(SanitizeCommand),

    /// Scans files and reports detection counts without writing anything.
    #[command(about = "Scans files and reports detection counts without writing anything.")]
    Scan(ScanCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Args, Debug)]
pub struct SanitizeCommand {
    /// Input file(s) or directory(ies); directories are walked recursively.
    #[arg(value_name = "PATH", required = true, help = "Input file(s) or directory(ies).")]
    pub input: Vec<PathBuf>,

    /// Write redacted copies into this directory instead of alongside each source.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", help = "Write redacted copies into this directory, preserving relative paths.")]
    pub output_dir: Option<PathBuf>,

    /// Suffix inserted before the file extension when naming output files.
    #[arg(long, value_name = "SUFFIX", default_value = scrub_core::DEFAULT_SUFFIX, help = "Suffix inserted before the file extension.")]
    pub suffix: String,

    /// Disable Social Security Number redaction.
    #[arg(long = "no-ssn", help = "Disable SSN redaction.")]
    pub no_ssn: bool,

    /// Disable payment card number redaction.
    #[arg(long = "no-pan", help = "Disable payment card number redaction.")]
    pub no_pan: bool,

    /// Text encoding used to decode inputs and encode outputs.
    #[arg(long, value_name = "ENCODING", default_value = scrub_core::DEFAULT_ENCODING, help = "Text encoding for both decode and encode.")]
    pub encoding: String,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Input file(s) or directory(ies); directories are walked recursively.
    #[arg(value_name = "PATH", required = true, help = "Input file(s) or directory(ies).")]
    pub input: Vec<PathBuf>,

    /// Disable Social Security Number detection.
    #[arg(long = "no-ssn", help = "Disable SSN detection.")]
    pub no_ssn: bool,

    /// Disable payment card number detection.
    #[arg(long = "no-pan", help = "Disable payment card number detection.")]
    pub no_pan: bool,

    /// Text encoding used to decode inputs.
    #[arg(long, value_name = "ENCODING", default_value = scrub_core::DEFAULT_ENCODING, help = "Text encoding used to decode inputs.")]
    pub encoding: String,

    /// Exit with a non-zero code if the total number of detections exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of detections exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export the scan summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan summary to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the scan summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the scan summary to stdout as JSON.")]
    pub json_stdout: bool,
}
