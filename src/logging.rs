//! Logging infrastructure for AsciiDupe.
//!
//! Structured logging via the `log` facade with the `env_logger` backend.
//! The duplicate report itself goes to stdout; all logging stays on stderr
//! so the two streams never interleave. Log level is determined by (in
//! priority order):
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. CLI flags: `--quiet` (error only) or `-v`/`-vv` (debug/trace)
//! 3. Default: warn level (the report is the program's output, not the log)

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize the logging subsystem based on CLI verbosity flags.
///
/// Call at startup, before any logging calls. `RUST_LOG` overrides the CLI
/// flags when set. Repeat calls are no-ops: only the first installation of
/// the global logger wins.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    // Compact format: the log is a side channel here, keep it short.
    builder.format(|buf, record| {
        let level = record.level();
        let level_style = buf.default_level_style(level);
        writeln!(
            buf,
            "{level_style}{:<5}{level_style:#} {}",
            level,
            record.args()
        )
    });

    // A second installation attempt (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

/// Determine the log level from CLI flags.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
