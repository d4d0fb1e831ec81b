// scrub-core/tests/redaction_tests.rs
//! Integration tests exercising the public redaction API: matcher formats,
//! the Luhn gate, substitution tokens, and pass ordering.

use scrub_core::{
    is_valid_luhn, normalize_digits, pan_candidates, ssn_candidates, RedactionEngine,
    RedactionFlags, PAN_TOKEN, SSN_TOKEN,
};

#[test]
fn test_luhn_agrees_with_reference_vectors() {
    // Known-valid test card number and a copy differing by one digit.
    assert!(is_valid_luhn("4111111111111111"));
    assert!(!is_valid_luhn("4111111111111112"));
    // 13- and 15-digit card lengths.
    assert!(is_valid_luhn("4222222222222"));
    assert!(is_valid_luhn("378282246310005"));
}

#[test]
fn test_every_ssn_format_redacts() {
    let engine = RedactionEngine::new(RedactionFlags::default());
    for input in ["123-45-6789", "123 45 6789", "123456789"] {
        let (out, stats) = engine.redact(input);
        assert_eq!(out, SSN_TOKEN, "input: {input}");
        assert_eq!(stats.ssn_redactions, 1, "input: {input}");
    }
}

#[test]
fn test_pan_formats_and_luhn_gate() {
    let engine = RedactionEngine::new(RedactionFlags::default());

    let (out, stats) = engine.redact("4111-1111-1111-1111");
    assert_eq!(out, PAN_TOKEN);
    assert_eq!(stats.pan_redactions, 1);

    // Thirteen digits that fail the checksum stay untouched.
    let (out, stats) = engine.redact("1234567890123");
    assert_eq!(out, "1234567890123");
    assert_eq!(stats.pan_redactions, 0);
}

#[test]
fn test_tokens_survive_a_second_pass() {
    let engine = RedactionEngine::new(RedactionFlags::default());
    let already = format!("a {SSN_TOKEN} b {PAN_TOKEN} c");
    let (out, stats) = engine.redact(&already);
    assert_eq!(out, already);
    assert_eq!(stats.ssn_redactions, 0);
    assert_eq!(stats.pan_redactions, 0);
}

#[test]
fn test_candidate_spans_are_non_overlapping_and_ordered() {
    let text = "123-45-6789 then 987654321";
    let spans: Vec<_> = ssn_candidates(text).collect();
    assert_eq!(spans.len(), 2);
    assert!(spans[0].end <= spans[1].start);

    // A single long run yields one maximal PAN candidate, not several
    // shorter overlapping ones.
    let candidates: Vec<_> = pan_candidates("4111111111111111").collect();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].text, "4111111111111111");
}

#[test]
fn test_normalize_digits_preserves_order() {
    assert_eq!(normalize_digits("1a2b3-4 5"), "12345");
}

#[test]
fn test_surrounding_structure_is_preserved() {
    let engine = RedactionEngine::new(RedactionFlags::default());
    let input = "name,ssn,card\nalice,123-45-6789,4111111111111111\n";
    let (out, _) = engine.redact(input);
    assert_eq!(out, "name,ssn,card\nalice,[REDACTED_SSN],[REDACTED_PAN]\n");
}
