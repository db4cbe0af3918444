//! The plain clause-list format: a first line holding the clause count,
//! followed by one clause per line as two signed integers.
//!
//! ```text
//! 3
//! 1 2
//! -1 2
//! 1 -2
//! ```

use crate::sat::clause::Clause;
use crate::sat::cnf::Formula;
use crate::sat::dimacs::parse_literal;
use crate::sat::error::{ParseError, ParseResult};
use itertools::Itertools;
use std::fmt::Write;
use std::io::BufRead;

/// Parses a clause list from `reader`. Blank lines are ignored.
///
/// # Errors
///
/// - [`ParseError::MissingHeader`] / [`ParseError::InvalidHeader`] if the
///   first line is absent or not a count.
/// - [`ParseError::InvalidLiteral`], [`ParseError::ZeroLiteral`] or
///   [`ParseError::WrongArity`] on a malformed clause line.
/// - [`ParseError::ClauseCount`] if the number of clauses read differs from
///   the header.
pub fn parse_pairs<R: BufRead>(reader: R) -> ParseResult<Formula> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|l| (idx + 1, l)));

    let declared = loop {
        let Some(next) = lines.next() else {
            return Err(ParseError::MissingHeader);
        };
        let (line_no, line) = next?;
        let header = line.trim();
        if header.is_empty() {
            continue;
        }
        break header
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidHeader {
                line: line_no,
                header: header.to_string(),
            })?;
    };

    let mut formula = Formula::default();
    formula.clauses.reserve(declared);

    for next in lines {
        let (line_no, line) = next?;
        let tokens = line.split_whitespace().collect_vec();
        match tokens.as_slice() {
            [] => {}
            [a, b] => {
                let a = parse_literal(a, line_no)?;
                let b = parse_literal(b, line_no)?;
                if a == 0 || b == 0 {
                    return Err(ParseError::ZeroLiteral { line: line_no });
                }
                if a == i32::MIN || b == i32::MIN {
                    let token = if a == i32::MIN { a } else { b };
                    return Err(ParseError::InvalidLiteral {
                        line: line_no,
                        token: token.to_string(),
                    });
                }
                formula.add_clause(Clause::from((a, b)));
            }
            _ => {
                return Err(ParseError::WrongArity {
                    line: line_no,
                    found: tokens.len(),
                });
            }
        }
    }

    if formula.len() != declared {
        return Err(ParseError::ClauseCount {
            declared,
            found: formula.len(),
        });
    }

    log::debug!(
        "parsed {} clauses over {} variables",
        formula.len(),
        formula.num_vars
    );
    Ok(formula)
}

/// Renders `formula` in the clause-list format. Unit clauses are written
/// with the literal repeated.
#[must_use]
pub fn to_pairs_string(formula: &Formula) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", formula.len());
    for clause in formula.iter() {
        let _ = writeln!(out, "{} {}", clause.first(), clause.second());
    }
    out
}
