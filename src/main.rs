//! Sprc - command-line sprite sheet compiler for the C64 VIC-II

use std::process::ExitCode;

use sprc::cli;

fn main() -> ExitCode {
    cli::run()
}
