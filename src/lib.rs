//! AsciiDupe - Visible-ASCII Duplicate Character Scanner
//!
//! A Rust CLI application that scans a byte sequence in a single pass and
//! reports every visible ASCII character (code points 32-126) occurring more
//! than once, using a constant-size bit table and a bounded report buffer.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands, ScanArgs};
use crate::duplicates::{self_test_input, DuplicateFinder};
use crate::error::ExitCode;

/// Run the application logic for an already-parsed command line.
///
/// Resolves the input sequence, scans it against locked stdout, and maps the
/// outcome to an [`ExitCode`]. Scan failures propagate as errors so the
/// binary entry point can pick the exit code and render them.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let (input, buffer_size) = match cli.command {
        Commands::Scan(args) => {
            let buffer_size = args.buffer_size;
            (resolve_scan_input(args)?, buffer_size)
        }
        Commands::SelfTest(args) => {
            log::debug!("using built-in harness input");
            (self_test_input(), args.buffer_size)
        }
    };

    let finder = DuplicateFinder::with_defaults().with_buffer_capacity(buffer_size);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    finder.scan(&input, &mut out).context("scan failed")?;
    out.flush().context("flush stdout")?;

    Ok(ExitCode::Success)
}

/// Resolve the input sequence for the scan subcommand: inline text, file
/// contents, or stdin when neither is given.
fn resolve_scan_input(args: ScanArgs) -> Result<Vec<u8>> {
    if let Some(text) = args.text {
        return Ok(text.into_bytes());
    }
    if let Some(path) = args.file {
        return std::fs::read(&path)
            .with_context(|| format!("read input file {}", path.display()));
    }
    log::debug!("no TEXT or --file given, reading stdin");
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("read input from stdin")?;
    Ok(input)
}
