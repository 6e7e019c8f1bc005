//! rjson CLI.
//!
//! Small demonstration front-end for the codec: validate a document,
//! re-encode it compactly, or dump the debug rendering.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rjson")]
#[command(about = "Strict RFC 8259 JSON codec", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the input is valid JSON
    Check {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Re-encode the input in compact wire form
    Compact {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print an indented debug rendering of the input
    Pretty {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(command: &Commands) -> Result<(), String> {
    let file = match command {
        Commands::Check { file } | Commands::Compact { file } | Commands::Pretty { file } => {
            file.as_ref()
        }
    };

    let input = read_input(file).map_err(|e| e.to_string())?;
    let value = rjson::parse(&input).map_err(|e| e.to_string())?;

    match command {
        Commands::Check { .. } => println!("valid JSON ({})", value.type_name()),
        Commands::Compact { .. } => {
            let output = rjson::encode(&value).map_err(|e| e.to_string())?;
            println!("{output}");
        }
        Commands::Pretty { .. } => println!("{}", rjson::pretty(&value, 0)),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("rjson: {message}");
            ExitCode::FAILURE
        }
    }
}
