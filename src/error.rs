//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the AsciiDupe application.
///
/// - 0: Success (scan completed, report emitted)
/// - 1: General error (unexpected failure)
/// - 2: Invalid input (missing or empty input sequence)
/// - 3: I/O error (a write to the output channel failed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: The scan completed and the report was emitted.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// Invalid input: The input sequence was missing or empty.
    InvalidInput = 2,
    /// I/O error: A write to the output channel failed mid-report.
    IoError = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "AD000",
            Self::GeneralError => "AD001",
            Self::InvalidInput => "AD002",
            Self::IoError => "AD003",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "AD002")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
