//! Command-line interface definitions for AsciiDupe.
//!
//! This module defines all CLI arguments, subcommands, and options using the
//! clap derive API. The CLI follows standard conventions with global options
//! (verbosity, structured errors) and subcommands for different operations.
//!
//! # Example
//!
//! ```bash
//! # Scan a string given on the command line
//! asciidupe scan "hello world"
//!
//! # Scan the contents of a file
//! asciidupe scan --file notes.txt
//!
//! # Scan stdin
//! echo -n "abracadabra" | asciidupe scan
//!
//! # Run the built-in harness (every visible character duplicated)
//! asciidupe self-test
//!
//! # Shrink the report buffer to exercise intermediate flushes
//! asciidupe -v scan --buffer-size 8 "aabbcc"
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::{DEFAULT_CAPACITY, MIN_CAPACITY};

/// Single-pass duplicate character scanner for visible ASCII.
///
/// AsciiDupe scans a byte sequence once and reports every visible ASCII
/// character (code points 32-126) that occurs more than once, in the order
/// each character's second occurrence appears.
#[derive(Debug, Parser)]
#[command(name = "asciidupe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report errors as JSON on stderr (for scripting)
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for AsciiDupe.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a byte sequence for duplicated visible characters
    Scan(ScanArgs),
    /// Scan the built-in harness input (all 95 characters duplicated)
    SelfTest(SelfTestArgs),
}

/// Arguments for the scan subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Text to scan; reads stdin when neither TEXT nor --file is given
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the input sequence from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Report staging buffer capacity in bytes
    ///
    /// Smaller capacities force more intermediate flushes; the report bytes
    /// are identical either way.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    pub buffer_size: usize,
}

/// Arguments for the self-test subcommand.
#[derive(Debug, Args)]
pub struct SelfTestArgs {
    /// Report staging buffer capacity in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    pub buffer_size: usize,
}

/// Parse a report buffer capacity.
///
/// # Errors
///
/// Returns an error if the value is not a number or is below the minimum
/// usable capacity.
pub fn parse_capacity(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid buffer size: '{s}'"))?;
    if n < MIN_CAPACITY {
        return Err(format!(
            "Buffer size must be at least {MIN_CAPACITY} bytes, got {n}"
        ));
    }
    Ok(n)
}
