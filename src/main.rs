//! # twosat
//!
//! `twosat` is a command-line 2-SAT solver. A formula in 2-CNF is turned into
//! its implication graph, where every clause `(a ∨ b)` contributes the edges
//! `¬a → b` and `¬b → a`. The strongly connected components of that graph are
//! computed with Kosaraju's algorithm, and the formula is unsatisfiable exactly
//! when a literal and its negation share a component.
//!
//! ## Input Formats
//!
//! -   Clause lists: a first line holding the clause count, then one clause per
//!     line as two signed integers (`1 -2`).
//! -   DIMACS CNF files (`.cnf`) whose clauses have one or two literals.
//!
//! ## Usage
//!
//! ```sh
//! twosat [OPTIONS] [PATH] [SUBCOMMAND]
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`file`**: Solve an instance file.
//!     ```sh
//!     twosat file --path data/sat.txt
//!     ```
//!
//! 2.  **`text`**: Solve DIMACS text given on the command line.
//!     ```sh
//!     twosat text --input "1 -2 0\n2 3 0"
//!     ```
//!
//! 3.  **`dir`**: Solve every instance under a directory.
//!     ```sh
//!     twosat dir --path data/
//!     ```
//!
//! 4.  **`generate`**: Write a random instance.
//!     ```sh
//!     twosat generate --vars 1000 --clauses 1000 --seed 7 -o random.txt
//!     ```
//!
//! 5.  **`completions`**: Print shell completions.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Enable debug logging (default: `false`).
//! -   `--verify <BOOL>`: Check a found model against the formula (default: `true`).
//! -   `--stats <BOOL>`: Print statistics (default: `true`).
//! -   `-p, --print-solution`: Print the model (default: `false`).
//! -   `--top <K>`: Number of largest component sizes to show (default: `5`).
//!
//! Logging goes through `env_logger`; `RUST_LOG` overrides the level chosen
//! by `--debug`.

use crate::command_line::cli::{
    Cli, Commands, CommonOptions, generate, parse_text, solve_and_report, solve_dir, solve_file,
};
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use std::time::Instant;

mod command_line;

/// Global allocator using `tikv-jemallocator` for memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Sets up `env_logger`. `--debug` raises the default level from `info` to
/// `debug`.
fn init_logging(common: &CommonOptions) {
    let level = if common.debug { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Main entry point.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and maps parse failures to a non-zero exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::File { path, common }) => {
            init_logging(&common);
            solve_file(&path, &common).map(|_| ())
        }
        Some(Commands::Text { input, common }) => {
            init_logging(&common);
            let time = Instant::now();
            parse_text(&input).map(|formula| {
                solve_and_report(&formula, &common, None, time.elapsed());
            })
        }
        Some(Commands::Dir { path, common }) => {
            init_logging(&common);
            solve_dir(&path, &common)
        }
        Some(Commands::Generate {
            vars,
            clauses,
            seed,
            dimacs,
            output,
        }) => {
            init_logging(&cli.common);
            generate(vars, clauses, seed, dimacs, output.as_deref())
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            init_logging(&cli.common);
            match cli.instance {
                Some(path) => solve_file(&path, &cli.common).map(|_| ()),
                None => {
                    eprintln!("No command provided. Use --help for more information.");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
