// File: scrub-core/src/engine.rs
//! The two-pass redaction engine.
//!
//! Orchestrates the matchers over a text buffer, replaces validated spans
//! with fixed tokens, and accumulates per-category counters. The engine is
//! pure: it never touches the filesystem and has no error paths.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Serialize};

use crate::matchers;
use crate::validators;

/// Replacement token for Social Security Number spans.
pub const SSN_TOKEN: &str = "[REDACTED_SSN]";
/// Replacement token for payment card number spans.
pub const PAN_TOKEN: &str = "[REDACTED_PAN]";

/// Toggles for the two redaction categories. Both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionFlags {
    pub ssn_enabled: bool,
    pub pan_enabled: bool,
}

impl Default for RedactionFlags {
    fn default() -> Self {
        Self {
            ssn_enabled: true,
            pan_enabled: true,
        }
    }
}

/// Counters for one engine invocation. Mutable while a scan runs, finalized
/// when the engine returns; run-wide totals are formed by summation, which is
/// associative and order-independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionStats {
    pub ssn_redactions: usize,
    pub pan_redactions: usize,
}

impl RedactionStats {
    /// Total replacements across both categories.
    pub fn total(&self) -> usize {
        self.ssn_redactions + self.pan_redactions
    }
}

impl std::ops::AddAssign for RedactionStats {
    fn add_assign(&mut self, other: Self) {
        self.ssn_redactions += other.ssn_redactions;
        self.pan_redactions += other.pan_redactions;
    }
}

/// Applies the enabled matchers to text and substitutes validated spans with
/// the fixed redaction tokens.
#[derive(Debug, Clone, Copy)]
pub struct RedactionEngine {
    flags: RedactionFlags,
}

impl RedactionEngine {
    pub fn new(flags: RedactionFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> RedactionFlags {
        self.flags
    }

    /// Produces redacted text and the per-invocation counters.
    ///
    /// Runs as two sequential transform stages over an owned buffer, never as
    /// one merged pattern. The SSN pass runs first so that an SSN-shaped span
    /// is gone before the PAN pass scans: with the token in place of the
    /// digits, it cannot merge with adjacent digit runs into a longer PAN
    /// candidate. Reordering the passes changes output on inputs where SSN-
    /// and PAN-shaped runs sit next to each other.
    pub fn redact(&self, content: &str) -> (String, RedactionStats) {
        let mut stats = RedactionStats::default();
        let mut text = content.to_string();

        if self.flags.ssn_enabled {
            let (next, count) = redact_ssns(&text);
            text = next;
            stats.ssn_redactions = count;
        }
        if self.flags.pan_enabled {
            let (next, count) = redact_pans(&text);
            text = next;
            stats.pan_redactions = count;
        }

        debug!(
            "Redaction pass complete: {} SSN, {} PAN replacement(s).",
            stats.ssn_redactions, stats.pan_redactions
        );
        (text, stats)
    }
}

/// Replaces every SSN-shaped span with [`SSN_TOKEN`]. No checksum applies:
/// over-redaction is preferred to under-redaction for SSNs.
fn redact_ssns(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0usize;
    let mut count = 0usize;

    for span in matchers::ssn_candidates(text) {
        out.push_str(&text[last_end..span.start]);
        out.push_str(SSN_TOKEN);
        last_end = span.end;
        count += 1;
    }
    out.push_str(&text[last_end..]);
    (out, count)
}

/// Replaces Luhn-valid PAN candidates with [`PAN_TOKEN`]; candidates that
/// fail the digit-count or checksum gate are copied through verbatim.
fn redact_pans(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0usize;
    let mut count = 0usize;

    for span in matchers::pan_candidates(text) {
        out.push_str(&text[last_end..span.start]);
        if validators::is_valid_pan(span.text) {
            out.push_str(PAN_TOKEN);
            count += 1;
        } else {
            out.push_str(span.text);
        }
        last_end = span.end;
    }
    out.push_str(&text[last_end..]);
    (out, count)
}
