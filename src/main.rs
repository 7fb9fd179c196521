//! AsciiDupe - Visible-ASCII Duplicate Character Scanner
//!
//! Entry point for the AsciiDupe CLI application.

use asciidupe::{
    cli::Cli,
    duplicates::ScanError,
    error::{ExitCode, StructuredError},
};
use clap::Parser;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    // Run the application logic
    match asciidupe::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            // Determine appropriate exit code for errors
            let exit_code = match err.downcast_ref::<ScanError>() {
                Some(ScanError::InvalidInput) => ExitCode::InvalidInput,
                Some(ScanError::Io(_)) => ExitCode::IoError,
                None => ExitCode::GeneralError,
            };

            // Report the error
            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{}", json);
                } else {
                    eprintln!("[{}] Error: {}", exit_code.code_prefix(), err);
                }
            } else {
                eprintln!("[{}] Error: {}", exit_code.code_prefix(), err);
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
