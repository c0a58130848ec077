//! The `myrpal` CLI: lexes, parses, and (depending on the flag) prints
//! the AST, prints the standardized tree, or evaluates an RPAL program.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use myrpal::driver::{self, Mode};

mod diagnostics;

/// Command-line interface for the RPAL compiler/evaluator.
#[derive(Parser)]
#[command(name = "myrpal")]
#[command(about = "Compile and evaluate RPAL programs", long_about = None)]
struct Cli {
    /// The RPAL source file to run (e.g., `fact.rpal`).
    file: PathBuf,

    /// Which output to produce: print the AST, print the standardized
    /// tree, or evaluate with sorted tuple printing.
    #[arg(value_enum, allow_hyphen_values = true)]
    mode: Option<CliMode>,
}

/// The CLI's single-dash flag spellings (spec §6), mapped onto
/// [`driver::Mode`].
#[derive(Clone, Copy, ValueEnum)]
enum CliMode {
    #[value(name = "-ast")]
    Ast,
    #[value(name = "-sast")]
    Sast,
    #[value(name = "-pretty")]
    Pretty,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Ast => Mode::Ast,
            CliMode::Sast => Mode::Sast,
            CliMode::Pretty => Mode::Pretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = cli.mode.map(Mode::from).unwrap_or(Mode::Evaluate);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match driver::run(&cli.file, mode, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            diagnostics::report(&error);
            ExitCode::FAILURE
        }
    }
}
