// scrub/src/commands/scan.rs
//! Scan command implementation: detection counts without redaction.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use scrub_core::{scan_paths, PipelineOptions, RedactionFlags};

use crate::cli::ScanCommand;

/// Runs a detection-only pass and reports counts, optionally as JSON.
/// Exits non-zero when detections exceed the configured threshold.
pub fn run(cmd: ScanCommand) -> Result<ExitCode> {
    info!("Starting scan run over {} input path(s).", cmd.input.len());

    let opts = PipelineOptions {
        flags: RedactionFlags {
            ssn_enabled: !cmd.no_ssn,
            pan_enabled: !cmd.no_pan,
        },
        output_dir: None,
        suffix: scrub_core::DEFAULT_SUFFIX.to_string(),
        encoding: cmd.encoding.clone(),
    };

    let summary = scan_paths(&cmd.input, &opts).context("Scan run failed")?;

    if cmd.json_stdout {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if let Some(path) = &cmd.json_file {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write JSON summary to {}", path.display()))?;
    }

    eprintln!(
        "Scan complete. Files scanned: {}. SSNs detected: {}. PANs detected: {}.",
        summary.files_scanned, summary.stats.ssn_redactions, summary.stats.pan_redactions
    );

    if let Some(threshold) = cmd.fail_over_threshold {
        if summary.stats.total() > threshold {
            eprintln!(
                "Detections ({}) exceed the failure threshold ({}).",
                summary.stats.total(),
                threshold
            );
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
