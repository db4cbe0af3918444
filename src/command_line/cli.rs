#![allow(clippy::cast_precision_loss)]

use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};
use twosat::sat::assignment::Solutions;
use twosat::sat::cnf::Formula;
use twosat::sat::dimacs::parse_dimacs;
use twosat::sat::error::ParseError;
use twosat::sat::generator::random_formula;
use twosat::sat::input::{find_instances, parse_file};
use twosat::sat::pairs::to_pairs_string;
use twosat::sat::two_sat::{SolutionStats, TwoSat};

/// Largest variable count a generated instance may use.
const MAX_VARS: i64 = i32::MAX as i64;

/// Defines the command-line interface for the 2-SAT solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "twosat", version, about = "A 2-SAT solver using strongly connected components")]
pub(crate) struct Cli {
    /// An optional path argument. If provided without a subcommand, it's
    /// treated as the path to an instance file to solve.
    #[arg(value_name = "PATH")]
    pub instance: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve an instance file. Files ending in `.cnf` are read as DIMACS,
    /// anything else as a clause count followed by one pair per line.
    File {
        /// Path to the instance file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a formula provided as DIMACS text (e.g. "1 -2 0\n2 3 0").
    Text {
        /// Each line is a clause of one or two literals terminated by 0.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.txt` and `.cnf` instance under a directory.
    Dir {
        /// Path to the directory.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate a random instance.
    Generate {
        /// Number of variables. Literals are `i32`, so at most `i32::MAX`.
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(..=MAX_VARS))]
        vars: u32,

        /// Number of clauses.
        #[arg(long, default_value_t = 100)]
        clauses: usize,

        /// Random seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Write DIMACS instead of the clause-list format.
        #[arg(long, default_value_t = false)]
        dimacs: bool,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the solving process.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check a found model against the formula.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub(crate) verify: bool,

    /// Print graph and timing statistics after solving.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub(crate) stats: bool,

    /// Print the satisfying assignment if the formula is satisfiable.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,

    /// Number of largest component sizes to show with the statistics.
    #[arg(long, default_value_t = 5)]
    pub(crate) top: usize,
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            debug: false,
            verify: true,
            stats: true,
            print_solution: false,
            top: 5,
        }
    }
}

/// The outcome of one solve.
#[derive(Debug, Clone)]
pub(crate) struct Report {
    pub solutions: Option<Solutions>,
    pub elapsed: Duration,
    pub stats: SolutionStats,
    pub largest: Vec<usize>,
}

/// Parses a DIMACS string given on the command line.
pub(crate) fn parse_text(input: &str) -> Result<Formula, ParseError> {
    // Shells pass "\n" through literally.
    let input = input.replace("\\n", "\n");
    parse_dimacs(Cursor::new(input))
}

/// Parses and solves the file at `path`, then reports.
///
/// # Errors
///
/// If the file cannot be read or parsed.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<bool, ParseError> {
    let time = Instant::now();
    let formula = parse_file(path)?;
    let parse_time = time.elapsed();

    Ok(solve_and_report(&formula, common, Some(path), parse_time))
}

/// Solves a directory of instances.
///
/// Every `.txt` or `.cnf` file under `path` is parsed, solved and reported in
/// path order. Stops at the first file that fails to parse.
///
/// # Errors
///
/// If the directory cannot be walked or a file cannot be parsed.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), ParseError> {
    if !path.is_dir() {
        return Err(ParseError::NotADirectory(path.to_path_buf()));
    }

    let files = find_instances(path)?;
    log::info!("found {} instances in {}", files.len(), path.display());

    let mut satisfiable = 0;
    for file in &files {
        if solve_file(file, common)? {
            satisfiable += 1;
        }
    }

    println!(
        "\n{satisfiable} of {} instances satisfiable",
        files.len()
    );
    Ok(())
}

/// Writes a random instance to `output`, or stdout when `None`.
///
/// # Errors
///
/// If the output file cannot be written, or if no formula of the requested
/// size exists.
pub(crate) fn generate(
    vars: u32,
    clauses: usize,
    seed: u64,
    dimacs: bool,
    output: Option<&Path>,
) -> Result<(), ParseError> {
    if (vars == 0 && clauses > 0) || i64::from(vars) > MAX_VARS {
        return Err(ParseError::InvalidGeneratorSize { vars, clauses });
    }

    let formula = random_formula(vars, clauses, seed);
    let text = if dimacs {
        formula.to_string()
    } else {
        to_pairs_string(&formula)
    };

    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            log::info!("wrote {} clauses to {}", formula.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Verifies a given solution (`sol`) against a formula.
///
/// Prints whether the verification was successful. If verification fails, it panics.
/// If `sol` is `None` (indicating UNSAT), it prints "UNSAT".
pub(crate) fn verify_solution(formula: &Formula, sol: Option<&Solutions>) {
    if let Some(sol_values) = sol {
        let ok = formula.verify(sol_values);
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    } else {
        println!("UNSAT");
    }
}

/// Solves `formula`, timing the decomposition.
pub(crate) fn solve(formula: &Formula, label: Option<&Path>, common: &CommonOptions) -> Report {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    log::debug!(
        "formula: {} clauses over {} variables",
        formula.len(),
        formula.num_vars
    );

    let time = Instant::now();
    let mut solver = TwoSat::new(formula.clone());
    let solutions = solver.solve();
    let elapsed = time.elapsed();

    let largest = solver
        .partition()
        .map(|p| p.largest(common.top))
        .unwrap_or_default();

    if common.debug {
        let conflicts = solver.conflicts();
        if !conflicts.is_empty() {
            log::debug!("variables forced both ways: {conflicts:?}");
        }
        log::debug!("solution: {solutions:?}");
        log::debug!("time: {elapsed:?}");
    }

    Report {
        solutions,
        elapsed,
        stats: solver.stats(),
        largest,
    }
}

/// Solves and reports results including stats and verification.
///
/// Returns whether the formula is satisfiable.
pub(crate) fn solve_and_report(
    formula: &Formula,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> bool {
    let _ = epoch::advance();

    let report = solve(formula, label, common);

    if common.verify {
        verify_solution(formula, report.solutions.as_ref());
    }

    if common.stats {
        let (allocated, resident) = memory_usage().unwrap_or_default();
        print_stats(parse_time, formula, &report, allocated, resident);
    }

    if let Some(solutions) = report.solutions.as_ref().filter(|_| common.print_solution) {
        println!("Solutions: {solutions:?}");
    }

    let satisfiable = report.solutions.is_some();
    if satisfiable {
        println!("\nSATISFIABLE");
    } else {
        println!("\nUNSATISFIABLE");
    }
    satisfiable
}

/// Allocated and resident memory in MiB, as reported by jemalloc.
fn memory_usage() -> Option<(f64, f64)> {
    epoch::advance().ok()?;

    let allocated_bytes = stats::allocated::mib().ok()?.read().ok()?;
    let resident_bytes = stats::resident::mib().ok()?.read().ok()?;

    Some((
        allocated_bytes as f64 / (1024.0 * 1024.0),
        resident_bytes as f64 / (1024.0 * 1024.0),
    ))
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and graph statistics.
pub(crate) fn print_stats(
    parse_time: Duration,
    formula: &Formula,
    report: &Report,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = report.elapsed.as_secs_f64();
    let s = &report.stats;

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Variables", formula.num_vars);
    stat_line("Clauses", formula.len());

    println!("=====================[ Implication Graph Statistics ]================");
    stat_line_with_rate("Vertices", s.vertices, elapsed_secs);
    stat_line_with_rate("Edges", s.edges, elapsed_secs);
    stat_line("Components", s.components);
    stat_line("Largest component", s.largest_component);
    stat_line(
        "Largest components",
        format!("{:?}", report.largest),
    );
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_file_subcommand() {
        let cli = Cli::try_parse_from(["twosat", "file", "--path", "a.txt", "--top", "3"]).unwrap();
        match cli.command {
            Some(Commands::File { path, common }) => {
                assert_eq!(path, PathBuf::from("a.txt"));
                assert_eq!(common.top, 3);
                assert!(common.verify);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verify_can_be_disabled() {
        let cli = Cli::try_parse_from(["twosat", "text", "-i", "1 2 0", "--verify", "false"]).unwrap();
        match cli.command {
            Some(Commands::Text { input, common }) => {
                assert_eq!(input, "1 2 0");
                assert!(!common.verify);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_text_accepts_escaped_newlines() {
        let formula = parse_text("1 -2 0\\n2 3 0").unwrap();
        assert_eq!(formula.len(), 2);
    }

    #[test]
    fn test_generate_rejects_too_many_variables() {
        let max = i32::MAX.to_string();
        assert!(Cli::try_parse_from(["twosat", "generate", "--vars", &max]).is_ok());

        let too_many = (i64::from(i32::MAX) + 1).to_string();
        assert!(Cli::try_parse_from(["twosat", "generate", "--vars", &too_many]).is_err());

        let err = generate(u32::MAX, 1, 0, false, None).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidGeneratorSize { vars: u32::MAX, clauses: 1 }
        ));
    }

    #[test]
    fn test_generate_rejects_clauses_without_variables() {
        let err = generate(0, 3, 0, false, None).unwrap_err();
        assert_eq!(err.to_string(), "cannot generate 3 clauses over 0 variables");
    }

    #[test]
    fn test_solve_dir_rejects_files() {
        let file = std::env::temp_dir().join(format!("twosat-not-a-dir-{}.txt", std::process::id()));
        std::fs::write(&file, "0\n").unwrap();

        let err = solve_dir(&file, &CommonOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::NotADirectory(ref p) if *p == file));

        std::fs::remove_file(&file).unwrap();
    }

    #[test]
    fn test_solve_reports_largest_components() {
        let formula = Formula::new([(1, 2), (-1, 2), (1, -2), (-1, -2)]);
        let common = CommonOptions {
            top: 2,
            ..CommonOptions::default()
        };
        let report = solve(&formula, None, &common);
        assert!(report.solutions.is_none());
        assert_eq!(report.largest, vec![4]);
        assert_eq!(report.stats.components, 1);
    }
}
