// File: scrub-core/src/pipeline.rs
//! The file pipeline: walks input paths, filters out binary files, decodes
//! bytes, runs the redaction engine, and writes redacted copies preserving
//! the input's relative layout.
//!
//! The pipeline is best-effort, not transactional: a file that cannot be
//! read is skipped and the run continues. Only configuration problems
//! (missing roots, unknown encoding) abort before processing starts.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::config::{resolve_encoding, PipelineOptions};
use crate::engine::{RedactionEngine, RedactionStats};
use crate::errors::ScrubError;

/// Extensions skipped outright: binary document and image formats whose
/// bytes would produce garbage if rewritten as text. This is a coarse
/// denylist, not a content-type classifier; the NUL-byte heuristic below
/// catches the rest.
const BINARY_EXTENSIONS: &[&str] = &["docx", "pdf", "png", "jpg", "jpeg", "gif", "webp"];

/// An input file paired with its resolved output path. Computed once before
/// the file is read, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileTask {
    /// Computes the output path for `input` under the configured strategy.
    ///
    /// With an output directory, the file's relative path from whichever
    /// input root contains it is preserved beneath that directory (falling
    /// back to the bare file name); otherwise the output sits alongside the
    /// source. Either way the suffix lands before the extension.
    pub fn resolve(input: &Path, roots: &[PathBuf], opts: &PipelineOptions) -> Self {
        let output = match &opts.output_dir {
            Some(dir) => {
                let rel = roots
                    .iter()
                    .find_map(|root| {
                        let base = if root.is_file() {
                            root.parent().unwrap_or_else(|| Path::new(""))
                        } else {
                            root.as_path()
                        };
                        input.strip_prefix(base).ok()
                    })
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(input.file_name().unwrap_or_default()));
                apply_suffix(&dir.join(rel), &opts.suffix)
            }
            None => apply_suffix(input, &opts.suffix),
        };
        Self {
            input: input.to_path_buf(),
            output,
        }
    }
}

/// Aggregate result of one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Files that were decoded and passed through the engine.
    pub files_scanned: usize,
    /// Files whose redacted copy was actually written. No-op files do not
    /// count.
    pub files_written: usize,
    #[serde(flatten)]
    pub stats: RedactionStats,
}

/// Walks the input roots, redacts every eligible file, and writes redacted
/// copies per the configured output strategy.
///
/// # Arguments
///
/// * `roots` - Input files or directories; directories are walked
///   recursively.
/// * `opts` - Per-invocation options (category flags, output layout,
///   encoding).
///
/// # Returns
///
/// The run-wide [`RunSummary`], or a [`ScrubError`] when the configuration
/// itself is invalid. Per-file failures are skipped, never fatal.
pub fn sanitize_paths(roots: &[PathBuf], opts: &PipelineOptions) -> Result<RunSummary, ScrubError> {
    run_pipeline(roots, opts, true)
}

/// Same traversal, decoding, and detection as [`sanitize_paths`], but no
/// file is ever written. Used for reporting-only scans.
pub fn scan_paths(roots: &[PathBuf], opts: &PipelineOptions) -> Result<RunSummary, ScrubError> {
    run_pipeline(roots, opts, false)
}

fn run_pipeline(
    roots: &[PathBuf],
    opts: &PipelineOptions,
    write_outputs: bool,
) -> Result<RunSummary, ScrubError> {
    validate_roots(roots)?;
    let encoding = resolve_encoding(&opts.encoding)?;
    let engine = RedactionEngine::new(opts.flags);

    let files = collect_files(roots);
    info!("Processing {} candidate file(s).", files.len());

    let mut summary = RunSummary::default();
    for path in &files {
        let Some((stats, wrote)) =
            process_file(path, roots, opts, encoding, &engine, write_outputs)
        else {
            continue;
        };
        summary.files_scanned += 1;
        summary.stats += stats;
        if wrote {
            summary.files_written += 1;
        }
    }

    info!(
        "Run complete: {} scanned, {} written, {} SSN, {} PAN.",
        summary.files_scanned,
        summary.files_written,
        summary.stats.ssn_redactions,
        summary.stats.pan_redactions
    );
    Ok(summary)
}

/// Fails fast on configuration errors before any file is touched.
fn validate_roots(roots: &[PathBuf]) -> Result<(), ScrubError> {
    for root in roots {
        if !root.exists() {
            return Err(ScrubError::InputNotFound(root.clone()));
        }
    }
    Ok(())
}

/// Enumerates regular files reachable from the roots. The list is collected
/// and sorted up front so a run never re-visits files it just wrote and the
/// processing order is reproducible.
fn collect_files(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        if root.is_dir() {
            for entry in WalkDir::new(root) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!("Traversal error under {}: {}", root.display(), err);
                        continue;
                    }
                };
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else if root.is_file() {
            files.push(root.clone());
        }
    }
    files.sort();
    files
}

/// Reads, redacts, and (in sanitize mode) writes one file.
///
/// Returns `None` when the file was skipped: denylisted extension, NUL byte
/// in the content, or an unreadable file. Otherwise returns the per-file
/// stats and whether an output file was written.
fn process_file(
    path: &Path,
    roots: &[PathBuf],
    opts: &PipelineOptions,
    encoding: &'static Encoding,
    engine: &RedactionEngine,
    write_outputs: bool,
) -> Option<(RedactionStats, bool)> {
    if is_denylisted(path) {
        debug!("Skipping binary-document extension: {}", path.display());
        return None;
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("Skipping unreadable file {}: {}", path.display(), err);
            return None;
        }
    };

    // Quick binary heuristic: NUL bytes.
    if bytes.contains(&0) {
        debug!("Skipping binary file (NUL byte): {}", path.display());
        return None;
    }

    // Malformed sequences decode to U+FFFD instead of aborting the file.
    // BOM sniffing is off: the configured encoding is authoritative.
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes);
    if had_errors {
        debug!(
            "Decoded {} with replacement characters.",
            path.display()
        );
    }

    let (redacted, stats) = engine.redact(&text);
    if redacted == text {
        return Some((stats, false));
    }
    if !write_outputs {
        return Some((stats, false));
    }

    let task = FileTask::resolve(path, roots, opts);
    if let Err(err) = write_redacted(&task, &redacted, encoding) {
        warn!("Failed to write {}: {}", task.output.display(), err);
        return Some((stats, false));
    }
    debug!("Wrote {}", task.output.display());
    Some((stats, true))
}

fn is_denylisted(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .map_or(false, |ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Inserts the suffix before the file extension:
/// `statement.txt` becomes `statement.redacted.txt`, and an extensionless
/// `notes` becomes `notes.redacted`.
fn apply_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

/// Encodes and writes the redacted text. The output handle is scoped to this
/// function and closed on every exit path. Unencodable characters are
/// replaced rather than failing the file.
fn write_redacted(
    task: &FileTask,
    redacted: &str,
    encoding: &'static Encoding,
) -> Result<(), ScrubError> {
    if let Some(parent) = task.output.parent() {
        fs::create_dir_all(parent)?;
    }
    let (encoded, _, _) = encoding.encode(redacted);
    let mut file = fs::File::create(&task.output)?;
    file.write_all(&encoded)?;
    Ok(())
}
