// File: scrub-core/src/errors.rs
//! Custom error types for the scrub-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Only configuration problems are fatal; per-file failures inside the
//! pipeline are recovered locally and never surface here.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `scrub-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Unknown text encoding label: '{0}'")]
    UnknownEncoding(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
