// scrub/src/commands/sanitize.rs
//! Sanitize command implementation: the redacting pipeline run.

use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use scrub_core::{sanitize_paths, PipelineOptions, RedactionFlags};

use crate::cli::SanitizeCommand;

/// Runs the redaction pipeline over the requested paths and prints the
/// terminal summary to stderr.
pub fn run(cmd: SanitizeCommand) -> Result<ExitCode> {
    info!("Starting sanitize run over {} input path(s).", cmd.input.len());

    let opts = PipelineOptions {
        flags: RedactionFlags {
            ssn_enabled: !cmd.no_ssn,
            pan_enabled: !cmd.no_pan,
        },
        output_dir: cmd.output_dir,
        suffix: cmd.suffix,
        encoding: cmd.encoding,
    };

    let summary = sanitize_paths(&cmd.input, &opts).context("Sanitization run failed")?;

    eprintln!(
        "Done. Files written: {}. SSNs redacted: {}. PANs redacted: {}.",
        summary.files_written, summary.stats.ssn_redactions, summary.stats.pan_redactions
    );
    Ok(ExitCode::SUCCESS)
}
