//! CLI entry point for the puzzle solver

use clap::Parser;
use std::process::ExitCode;
use tilefit::io::cli::{Cli, PuzzleProcessor};

// Usage text and fatal errors are reported before a nonzero exit
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(parse_error) => {
            // Help and version requests arrive through the same error path
            let _ = parse_error.print();
            return if parse_error.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let mut processor = PuzzleProcessor::new(cli);
    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_error) => {
            eprintln!("{run_error}");
            ExitCode::from(1)
        }
    }
}
