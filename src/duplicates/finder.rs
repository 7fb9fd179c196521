//! Duplicate scanner implementation.
//!
//! # Overview
//!
//! A single forward pass over the input: every byte is classified by the
//! [`CharTable`] state machine, and each character's second occurrence is
//! streamed straight into the bounded [`ReportWriter`]. Time is O(n) with
//! O(1) work per byte; auxiliary space is the fixed 64-byte table plus the
//! fixed staging buffer, independent of input length.
//!
//! # Example
//!
//! ```
//! use asciidupe::duplicates::DuplicateFinder;
//!
//! let mut out = Vec::new();
//! let summary = DuplicateFinder::with_defaults()
//!     .scan(b"abca", &mut out)
//!     .unwrap();
//!
//! assert_eq!(out, b"{a}\n");
//! assert_eq!(summary.duplicates_reported, 1);
//! ```

use std::io::Write;

use thiserror::Error;

use crate::duplicates::table::{CharTable, Occurrence};
use crate::output::{ReportWriter, DEFAULT_CAPACITY};

/// Diagnostic emitted on the output channel for a missing or empty input.
pub const EMPTY_INPUT_DIAGNOSTIC: &[u8] = b"Input string is null or empty\n";

/// Errors produced by a scan.
///
/// There are exactly two failure conditions; out-of-range bytes are not an
/// error, and table or buffer overflow cannot occur by construction.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input sequence was absent or empty. The diagnostic message has
    /// been written to the output channel (unless that write itself failed).
    #[error("input string is null or empty")]
    InvalidInput,

    /// A write to the output channel failed. The scan aborted at the failing
    /// flush; earlier flushed bytes remain on the channel.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Statistics from a completed scan.
///
/// Informational only; the formatted report on the output channel is the
/// behavioral contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total bytes consumed from the input.
    pub bytes_consumed: usize,
    /// Bytes outside the visible range [32,126], skipped without state.
    pub bytes_ignored: usize,
    /// Distinct characters reported as duplicates (at most 95).
    pub duplicates_reported: usize,
    /// Number of `write` batches issued to the output channel.
    pub flushes: usize,
}

/// Scans a byte sequence for duplicated visible-ASCII characters.
///
/// Construction is cheap; the per-scan state table is freshly initialized
/// inside every [`scan`](Self::scan) call, so one finder can run any number
/// of scans and each is independent of the last.
#[derive(Debug, Clone)]
pub struct DuplicateFinder {
    buffer_capacity: usize,
}

impl Default for DuplicateFinder {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DuplicateFinder {
    /// Create a finder with the default report buffer capacity.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the report staging buffer capacity in bytes.
    ///
    /// Values below [`crate::output::MIN_CAPACITY`] are clamped up. The
    /// report bytes are identical for every capacity; only the number of
    /// underlying writes changes.
    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Scan `input` and write the duplicate report to `out`.
    ///
    /// Reports each character that occurs at least twice exactly once, in
    /// the order each character's second occurrence appears in the input.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidInput`] if `input` is empty (the fixed diagnostic
    /// is written to `out` first); [`ScanError::Io`] if any write to `out`
    /// fails.
    pub fn scan<W: Write>(&self, input: &[u8], out: &mut W) -> Result<ScanSummary, ScanError> {
        if input.is_empty() {
            out.write_all(EMPTY_INPUT_DIAGNOSTIC)?;
            return Err(ScanError::InvalidInput);
        }

        log::debug!(
            "scanning {} bytes (report capacity {})",
            input.len(),
            self.buffer_capacity
        );

        let mut table = CharTable::new();
        let mut report = ReportWriter::with_capacity(out, self.buffer_capacity)?;
        let mut summary = ScanSummary::default();

        for &byte in input {
            summary.bytes_consumed += 1;
            match table.visit(byte) {
                Occurrence::Ignored => summary.bytes_ignored += 1,
                Occurrence::First | Occurrence::KnownDuplicate => {}
                Occurrence::NewDuplicate => {
                    report.push(byte)?;
                    summary.duplicates_reported += 1;
                }
            }
        }

        summary.flushes = report.finish()?;

        log::debug!(
            "scan complete: {} duplicates, {} bytes ignored, {} flushes",
            summary.duplicates_reported,
            summary.bytes_ignored,
            summary.flushes
        );
        Ok(summary)
    }
}

/// The built-in harness input: every visible ASCII character twice, pairs
/// in ascending code point order.
#[must_use]
pub fn self_test_input() -> Vec<u8> {
    let mut input = Vec::with_capacity(2 * crate::duplicates::ALPHABET_SIZE);
    for cp in crate::duplicates::VISIBLE_MIN..=crate::duplicates::VISIBLE_MAX {
        input.push(cp);
        input.push(cp);
    }
    input
}
