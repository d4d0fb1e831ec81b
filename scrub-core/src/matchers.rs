// File: scrub-core/src/matchers.rs
//! Pattern recognizers for SSN and payment card candidate spans.
//!
//! Matching is non-overlapping, greedy, and leftmost-first: once a maximal
//! candidate is matched at a position, scanning resumes after its end, so a
//! single long digit run is evaluated once as one candidate rather than as
//! several overlapping shorter ones. Word boundaries on both ends keep
//! matches away from adjacent digits or word characters.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// The logical kind of a candidate span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Ssn,
    Pan,
}

/// A contiguous region of the input matched by a recognizer, pending
/// validation. Byte offsets index into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSpan<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
    pub kind: SpanKind,
}

// Three digits, optional single hyphen or space, two digits, optional
// separator, four digits. Nine digits total.
static SSN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[- ]?\d{2}[- ]?\d{4}\b").expect("SSN pattern compiles"));

// Candidate PANs are 13-19 digits, possibly separated by single spaces or
// hyphens. The Luhn gate runs afterwards; the pattern alone is not a verdict.
static PAN_CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:\d[- ]?){13,19}\b").expect("PAN candidate pattern compiles"));

/// Scans `text` for Social Security Number shaped spans.
///
/// Every syntactic match is a finished candidate: SSNs have no public
/// checksum, so no further validation applies.
pub fn ssn_candidates(text: &str) -> impl Iterator<Item = CandidateSpan<'_>> {
    SSN_RE.find_iter(text).map(|m| CandidateSpan {
        start: m.start(),
        end: m.end(),
        text: m.as_str(),
        kind: SpanKind::Ssn,
    })
}

/// Scans `text` for payment card shaped candidate spans.
///
/// Candidates still have to pass digit-count and Luhn validation before they
/// count as card numbers; see [`crate::validators::is_valid_pan`].
pub fn pan_candidates(text: &str) -> impl Iterator<Item = CandidateSpan<'_>> {
    PAN_CANDIDATE_RE.find_iter(text).map(|m| CandidateSpan {
        start: m.start(),
        end: m.end(),
        text: m.as_str(),
        kind: SpanKind::Pan,
    })
}
