use asciidupe::cli::{Cli, Commands};
use asciidupe::duplicates::{
    self_test_input, DuplicateFinder, ScanError, ALPHABET_SIZE, VISIBLE_MAX, VISIBLE_MIN,
};
use asciidupe::error::ExitCode;
use clap::Parser;
use std::io::Write;
use tempfile::tempdir;

fn scan_to_vec(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    DuplicateFinder::with_defaults().scan(input, &mut out).unwrap();
    out
}

#[test]
fn test_known_inputs() {
    assert_eq!(scan_to_vec(b"aba"), b"{a}\n");
    assert_eq!(scan_to_vec(b"caiopa"), b"{a}\n");
    assert_eq!(scan_to_vec(b"abc"), b"{}\n");
    assert_eq!(scan_to_vec(b"aaa"), b"{a}\n");
}

#[test]
fn test_full_pair_harness_reports_whole_alphabet_in_order() {
    let out = scan_to_vec(&self_test_input());

    // Expected: every visible character once, ascending, comma separated.
    let mut expected = vec![b'{'];
    for cp in VISIBLE_MIN..=VISIBLE_MAX {
        if cp > VISIBLE_MIN {
            expected.extend_from_slice(b", ");
        }
        expected.push(cp);
    }
    expected.extend_from_slice(b"}\n");

    assert_eq!(out, expected);
    assert!(out.starts_with(b"{ , !, \""));
    assert!(out.ends_with(b"~}\n"));
    // 95 characters + 94 separators + delimiters + newline.
    assert_eq!(out.len(), ALPHABET_SIZE + 94 * 2 + 3);
}

#[test]
fn test_harness_forces_intermediate_flush_with_default_capacity() {
    // The full report (286 bytes) exceeds the 256-byte staging buffer, so
    // the scan must flush mid-report and still produce intact output.
    let mut out = Vec::new();
    let summary = DuplicateFinder::with_defaults()
        .scan(&self_test_input(), &mut out)
        .unwrap();
    assert!(summary.flushes >= 2, "expected >= 2 flushes, got {}", summary.flushes);
    assert_eq!(summary.duplicates_reported, ALPHABET_SIZE);
}

#[test]
fn test_output_identical_across_buffer_capacities() {
    let input = self_test_input();
    let mut reference = Vec::new();
    DuplicateFinder::with_defaults()
        .with_buffer_capacity(4096)
        .scan(&input, &mut reference)
        .unwrap();

    for capacity in [4, 5, 7, 8, 16, 64, 256] {
        let mut out = Vec::new();
        DuplicateFinder::with_defaults()
            .with_buffer_capacity(capacity)
            .scan(&input, &mut out)
            .unwrap();
        assert_eq!(out, reference, "capacity {capacity} changed the output");
    }
}

#[test]
fn test_scan_is_idempotent() {
    let input = b"to be, or not to be, that is the question";
    assert_eq!(scan_to_vec(input), scan_to_vec(input));
}

#[test]
fn test_empty_input_is_invalid() {
    let mut out = Vec::new();
    let err = DuplicateFinder::with_defaults().scan(b"", &mut out).unwrap_err();
    assert!(matches!(err, ScanError::InvalidInput));
    assert_eq!(out, b"Input string is null or empty\n");
}

#[test]
fn test_run_app_scans_file_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"mississippi")
        .unwrap();

    let cli = Cli::try_parse_from([
        "asciidupe",
        "-q",
        "scan",
        "--file",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let code = asciidupe::run_app(cli).unwrap();
    assert_eq!(code, ExitCode::Success);
}

#[test]
fn test_run_app_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-file.txt");

    let cli = Cli::try_parse_from([
        "asciidupe",
        "-q",
        "scan",
        "--file",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let err = asciidupe::run_app(cli).unwrap_err();
    // Not a scan failure: the input could not even be resolved.
    assert!(err.downcast_ref::<ScanError>().is_none());
}

#[test]
fn test_run_app_self_test_succeeds() {
    let cli = Cli::try_parse_from(["asciidupe", "-q", "self-test"]).unwrap();
    let code = asciidupe::run_app(cli).unwrap();
    assert_eq!(code, ExitCode::Success);
}

#[test]
fn test_self_test_parses_as_subcommand() {
    let cli = Cli::try_parse_from(["asciidupe", "self-test", "--buffer-size", "8"]).unwrap();
    match cli.command {
        Commands::SelfTest(args) => assert_eq!(args.buffer_size, 8),
        _ => panic!("Expected SelfTest command"),
    }
}
