// scrub-core/src/lib.rs
//! # Scrub Core Library
//!
//! `scrub-core` provides the platform-independent logic for finding and
//! redacting sensitive identifiers — US Social Security Numbers and payment
//! card numbers — in text, plus the file pipeline that applies the engine to
//! files on disk.
//!
//! The engine balances recall (catch real identifiers in varied formatting)
//! against precision (avoid false positives on plain digit sequences) using
//! only pattern matching and the Luhn checksum, with no external validation
//! service.
//!
//! ## Modules
//!
//! * `config`: per-invocation pipeline options and encoding resolution.
//! * `validators`: digit normalization and the Luhn checksum gate.
//! * `matchers`: SSN and PAN candidate recognizers producing non-overlapping
//!   spans.
//! * `engine`: the two-pass redaction engine and its counters.
//! * `pipeline`: traversal, binary filtering, decode/encode, output layout.
//! * `errors`: the structured error type for configuration failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use scrub_core::{RedactionEngine, RedactionFlags};
//!
//! let engine = RedactionEngine::new(RedactionFlags::default());
//! let (redacted, stats) = engine.redact("SSN: 123-45-6789");
//! assert_eq!(redacted, "SSN: [REDACTED_SSN]");
//! assert_eq!(stats.ssn_redactions, 1);
//! ```
//!
//! ## Design Principles
//!
//! * **Pure engine:** redaction is a total function over text; all error
//!   handling lives at the pipeline boundary.
//! * **Best-effort pipeline:** unreadable and binary files are skipped, the
//!   run always completes, and only invalid configuration is fatal.
//! * **Stateless:** nothing persists across files beyond summed counters.
//!
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod matchers;
pub mod pipeline;
pub mod validators;

/// Re-exports the per-invocation options and encoding resolution.
pub use config::{resolve_encoding, PipelineOptions, DEFAULT_ENCODING, DEFAULT_SUFFIX};

/// Re-exports the redaction engine, its category toggles, counters, and the
/// fixed replacement tokens.
pub use engine::{RedactionEngine, RedactionFlags, RedactionStats, PAN_TOKEN, SSN_TOKEN};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScrubError;

/// Re-exports the candidate span types and matcher scans.
pub use matchers::{pan_candidates, ssn_candidates, CandidateSpan, SpanKind};

/// Re-exports the file pipeline entry points and run-wide summary.
pub use pipeline::{sanitize_paths, scan_paths, FileTask, RunSummary};

/// Re-exports digit normalization and checksum validation.
pub use validators::{is_valid_luhn, is_valid_pan, normalize_digits};
