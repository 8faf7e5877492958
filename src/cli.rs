//! Command-line interface implementation

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::compile;
use crate::emit::{asm, c, OutputFormat};
use crate::output::write_atomic;
use crate::parser::load_sheet;

/// Exit codes: 1 for bad input, 2 for bad invocation
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Sprc - compile .spm sprite sheets into linkable VIC-II sprite data
#[derive(Parser)]
#[command(name = "sprc")]
#[command(about = "Sprc - compile .spm sprite sheets into linkable VIC-II sprite data")]
#[command(version)]
pub struct Cli {
    /// Input .spm sprite sheet
    pub input: PathBuf,

    /// Output file: C source for the c format, assembly for gas/ca65
    pub output: PathBuf,

    /// Companion header file (c format only)
    pub header: Option<PathBuf>,

    /// Output format: c (frame table + header), gas or ca65 (one section
    /// per frame)
    #[arg(short, long, default_value = "c")]
    pub format: OutputFormat,

    /// Symbol prefix for the generated code (default: input file stem)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// How the requested format maps onto output artifacts.
enum Form {
    Aggregated { header: PathBuf },
    Segmented { dialect: asm::Dialect },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // The c format writes two artifacts, the assembly formats one; make
    // sure the argument list matches before reading anything.
    let form = match (cli.format, cli.header) {
        (OutputFormat::C, Some(header)) => Form::Aggregated { header },
        (OutputFormat::C, None) => {
            eprintln!("Error: the c format writes a code file and a header file; pass both paths");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        (OutputFormat::Gas | OutputFormat::Ca65, Some(_)) => {
            eprintln!("Error: a header file only applies to the c format");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        (OutputFormat::Gas, None) => Form::Segmented {
            dialect: asm::Dialect::Gas,
        },
        (OutputFormat::Ca65, None) => Form::Segmented {
            dialect: asm::Dialect::Ca65,
        },
    };

    let sheet = match load_sheet(&cli.input, cli.name.as_deref()) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let compiled = match compile::compile_sheet(&sheet) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Render every artifact before writing any, so a failed run leaves
    // nothing half-produced on disk.
    let mut artifacts: Vec<(PathBuf, String)> = Vec::new();
    match form {
        Form::Aggregated { header } => {
            let header_name = header
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("sprite.h")
                .to_string();
            match c::emit(&compiled, &header_name) {
                Ok(source) => {
                    artifacts.push((cli.output, source.code));
                    artifacts.push((header, source.header));
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
        Form::Segmented { dialect } => match asm::emit(&compiled, dialect) {
            Ok(listing) => artifacts.push((cli.output, listing)),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    for (path, contents) in &artifacts {
        if let Err(e) = write_atomic(path, contents) {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
