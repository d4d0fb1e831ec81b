// scrub-core/tests/pipeline_integration_tests.rs
//! End-to-end tests for the file pipeline: traversal, binary filtering,
//! decode/encode behavior, output layout, and run-wide aggregation.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use scrub_core::{sanitize_paths, scan_paths, PipelineOptions, RedactionFlags, ScrubError};

fn default_opts() -> PipelineOptions {
    PipelineOptions::default()
}

#[test_log::test]
fn test_sanitize_writes_redacted_copy_alongside_source() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("statement.txt");
    fs::write(&input, "SSN: 123-45-6789 and card 4111111111111111\n")?;

    let summary = sanitize_paths(&[dir.path().to_path_buf()], &default_opts())?;

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.stats.ssn_redactions, 1);
    assert_eq!(summary.stats.pan_redactions, 1);

    let output = dir.path().join("statement.redacted.txt");
    let redacted = fs::read_to_string(&output)?;
    assert_eq!(redacted, "SSN: [REDACTED_SSN] and card [REDACTED_PAN]\n");
    // The source file is never rewritten in place.
    assert!(fs::read_to_string(&input)?.contains("123-45-6789"));
    Ok(())
}

#[test_log::test]
fn test_output_dir_mirrors_relative_layout() -> Result<()> {
    let dir = tempdir()?;
    let out = tempdir()?;
    fs::create_dir_all(dir.path().join("sub/deep"))?;
    fs::write(dir.path().join("sub/deep/a.txt"), "123-45-6789")?;

    let opts = PipelineOptions {
        output_dir: Some(out.path().to_path_buf()),
        ..default_opts()
    };
    let summary = sanitize_paths(&[dir.path().to_path_buf()], &opts)?;

    assert_eq!(summary.files_written, 1);
    let mirrored = out.path().join("sub/deep/a.redacted.txt");
    assert_eq!(fs::read_to_string(mirrored)?, "[REDACTED_SSN]");
    Ok(())
}

#[test_log::test]
fn test_single_file_root_with_output_dir() -> Result<()> {
    let dir = tempdir()?;
    let out = tempdir()?;
    let input = dir.path().join("doc.txt");
    fs::write(&input, "123-45-6789")?;

    let opts = PipelineOptions {
        output_dir: Some(out.path().to_path_buf()),
        ..default_opts()
    };
    sanitize_paths(&[input], &opts)?;

    assert!(out.path().join("doc.redacted.txt").is_file());
    Ok(())
}

#[test_log::test]
fn test_custom_suffix() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "123-45-6789")?;

    let opts = PipelineOptions {
        suffix: ".clean".to_string(),
        ..default_opts()
    };
    sanitize_paths(&[dir.path().to_path_buf()], &opts)?;

    assert!(dir.path().join("a.clean.txt").is_file());
    Ok(())
}

#[test_log::test]
fn test_nul_byte_file_is_skipped_entirely() -> Result<()> {
    let dir = tempdir()?;
    // Readable SSN before the NUL: the file is still treated as binary.
    fs::write(dir.path().join("blob.bin"), b"SSN 123-45-6789\x00rest")?;

    let summary = sanitize_paths(&[dir.path().to_path_buf()], &default_opts())?;

    assert_eq!(summary.files_scanned, 0);
    assert_eq!(summary.files_written, 0);
    assert_eq!(summary.stats.ssn_redactions, 0);
    assert!(!dir.path().join("blob.redacted.bin").exists());
    Ok(())
}

#[test_log::test]
fn test_denylisted_extensions_are_skipped() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("scan.pdf"), "123-45-6789")?;
    fs::write(dir.path().join("photo.JPG"), "123-45-6789")?;

    let summary = sanitize_paths(&[dir.path().to_path_buf()], &default_opts())?;

    assert_eq!(summary.files_scanned, 0);
    assert_eq!(summary.files_written, 0);
    Ok(())
}

#[test_log::test]
fn test_no_op_file_is_not_written() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("plain.txt"), "nothing sensitive here\n")?;

    let summary = sanitize_paths(&[dir.path().to_path_buf()], &default_opts())?;

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_written, 0);
    assert_eq!(summary.stats.ssn_redactions, 0);
    assert_eq!(summary.stats.pan_redactions, 0);
    assert!(!dir.path().join("plain.redacted.txt").exists());
    Ok(())
}

#[test_log::test]
fn test_totals_aggregate_across_files() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "123-45-6789 and 987 65 4321")?;
    fs::write(dir.path().join("b.txt"), "4111111111111111")?;
    fs::write(dir.path().join("c.txt"), "no identifiers")?;

    let summary = sanitize_paths(&[dir.path().to_path_buf()], &default_opts())?;

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.stats.ssn_redactions, 2);
    assert_eq!(summary.stats.pan_redactions, 1);
    Ok(())
}

#[test_log::test]
fn test_scan_counts_without_writing() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "123-45-6789 card 4111111111111111")?;

    let summary = scan_paths(&[dir.path().to_path_buf()], &default_opts())?;

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_written, 0);
    assert_eq!(summary.stats.ssn_redactions, 1);
    assert_eq!(summary.stats.pan_redactions, 1);
    assert!(!dir.path().join("a.redacted.txt").exists());
    Ok(())
}

#[test_log::test]
fn test_disabled_pan_leaves_valid_cards_alone() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "card 4111111111111111")?;

    let opts = PipelineOptions {
        flags: RedactionFlags {
            ssn_enabled: true,
            pan_enabled: false,
        },
        ..default_opts()
    };
    let summary = sanitize_paths(&[dir.path().to_path_buf()], &opts)?;

    assert_eq!(summary.files_written, 0);
    assert_eq!(summary.stats.pan_redactions, 0);
    assert!(!dir.path().join("a.redacted.txt").exists());
    Ok(())
}

#[test_log::test]
fn test_invalid_utf8_decodes_with_replacement_and_still_redacts() -> Result<()> {
    let dir = tempdir()?;
    let mut bytes = b"\xff\xfe SSN 123-45-6789\n".to_vec();
    bytes.extend_from_slice(b"tail");
    fs::write(dir.path().join("weird.txt"), &bytes)?;

    let summary = sanitize_paths(&[dir.path().to_path_buf()], &default_opts())?;

    assert_eq!(summary.files_written, 1);
    let redacted = fs::read_to_string(dir.path().join("weird.redacted.txt"))?;
    assert!(redacted.contains("[REDACTED_SSN]"));
    assert!(redacted.contains('\u{FFFD}'));
    Ok(())
}

#[test_log::test]
fn test_windows_1252_roundtrip() -> Result<()> {
    let dir = tempdir()?;
    // "résumé 123-45-6789" in windows-1252: 0xE9 is é.
    let bytes: Vec<u8> = b"r\xe9sum\xe9 123-45-6789".to_vec();
    fs::write(dir.path().join("cv.txt"), &bytes)?;

    let opts = PipelineOptions {
        encoding: "windows-1252".to_string(),
        ..default_opts()
    };
    let summary = sanitize_paths(&[dir.path().to_path_buf()], &opts)?;
    assert_eq!(summary.files_written, 1);

    let out = fs::read(dir.path().join("cv.redacted.txt"))?;
    // Output is re-encoded in the configured encoding, not UTF-8.
    assert!(out.starts_with(b"r\xe9sum\xe9 "));
    assert!(out.ends_with(b"[REDACTED_SSN]"));
    Ok(())
}

#[test_log::test]
fn test_missing_input_root_is_fatal() {
    let err = sanitize_paths(&[PathBuf::from("/no/such/path")], &default_opts()).unwrap_err();
    assert!(matches!(err, ScrubError::InputNotFound(_)));
}

#[test_log::test]
fn test_unknown_encoding_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let opts = PipelineOptions {
        encoding: "klingon-8".to_string(),
        ..default_opts()
    };
    let err = sanitize_paths(&[dir.path().to_path_buf()], &opts).unwrap_err();
    assert!(matches!(err, ScrubError::UnknownEncoding(_)));
    Ok(())
}
