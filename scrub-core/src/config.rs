// File: scrub-core/src/config.rs
//! Configuration management for `scrub-core`.
//!
//! This module defines the per-invocation options consumed by the file
//! pipeline. There is deliberately no persistent configuration: every option
//! lives for exactly one run and arrives from the caller (normally the CLI).
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::engine::RedactionFlags;
use crate::errors::ScrubError;

/// Suffix inserted before the file extension when naming output files.
pub const DEFAULT_SUFFIX: &str = ".redacted";

/// Encoding label used for both decode and encode unless overridden.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Options for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Category toggles forwarded to the redaction engine.
    pub flags: RedactionFlags,
    /// If set, redacted copies are written under this directory, mirroring
    /// each input's relative path from whichever root contains it. If unset,
    /// each redacted file is written alongside its source.
    pub output_dir: Option<PathBuf>,
    /// Suffix inserted before the file extension, e.g. `statement.txt`
    /// becomes `statement.redacted.txt`.
    pub suffix: String,
    /// Text encoding label for both decode and encode.
    pub encoding: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            flags: RedactionFlags::default(),
            output_dir: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Resolves an encoding label (e.g. `utf-8`, `windows-1252`) to a codec.
///
/// Fails with [`ScrubError::UnknownEncoding`] when the label is not a
/// registered encoding name; this is a configuration error and is reported
/// before any file processing begins.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, ScrubError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ScrubError::UnknownEncoding(label.to_string()))
}
