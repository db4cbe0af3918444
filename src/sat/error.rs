//! Errors raised while reading a 2-SAT instance.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load an instance. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Walking an instance directory failed.
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// A token is not a representable literal.
    #[error("line {line}: failed to parse literal '{token}' as i32")]
    InvalidLiteral {
        /// Line of the token.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A `0` where the clause-list format expects a literal.
    #[error("line {line}: 0 is not a literal")]
    ZeroLiteral {
        /// Line of the clause.
        line: usize,
    },

    /// A clause with the wrong number of literals.
    #[error("line {line}: expected 2 literals, found {found}")]
    WrongArity {
        /// Line of the clause.
        line: usize,
        /// Number of literals read.
        found: usize,
    },

    /// A DIMACS clause with no literals. No assignment satisfies it.
    #[error("line {line}: empty clause")]
    EmptyClause {
        /// Line of the terminating `0`.
        line: usize,
    },

    /// The clause-list input has no clause count line.
    #[error("missing clause count header")]
    MissingHeader,

    /// The clause count line is not a non-negative integer.
    #[error("line {line}: invalid header '{header}'")]
    InvalidHeader {
        /// Line of the header.
        line: usize,
        /// The header text.
        header: String,
    },

    /// The clause count differs from the clauses present.
    #[error("header declares {declared} clauses, found {found}")]
    ClauseCount {
        /// Count from the header.
        declared: usize,
        /// Clauses read.
        found: usize,
    },

    /// An instance directory path that is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A generator request that no formula can satisfy, such as clauses over
    /// 0 variables or more variables than a literal can name.
    #[error("cannot generate {clauses} clauses over {vars} variables")]
    InvalidGeneratorSize {
        /// Requested variable count.
        vars: u32,
        /// Requested clause count.
        clauses: usize,
    },
}

/// Result of loading an instance.
pub type ParseResult<T> = Result<T, ParseError>;
