#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! 2-CNF formulas, their input formats, and the implication-graph solver.

/// Truth assignments and models.
pub mod assignment;
/// Two-literal clauses.
pub mod clause;
/// Formulas as lists of clauses.
pub mod cnf;
/// DIMACS 2-CNF parser.
pub mod dimacs;
/// Errors raised while loading instances.
pub mod error;
/// Random instance generation.
pub mod generator;
/// Loading instances from files and directories.
pub mod input;
/// Signed integer literals.
pub mod literal;
/// The clause-list input format.
pub mod pairs;
/// The 2-SAT solver.
pub mod two_sat;
