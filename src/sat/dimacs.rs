#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for 2-CNF formulas in DIMACS format.
//!
//! The format typically includes:
//! - Comment lines starting with 'c'.
//! - A problem line 'p cnf <`num_variables`> <`num_clauses`>'. Its counts are
//!   not trusted; they are derived from the clauses found.
//! - Clause lines of signed integer literals, each clause terminated by a '0'.
//!   A line may hold several clauses.
//! - An optional '%' line to indicate end-of-data.
//!
//! Every clause must have one or two literals. Unit clauses become `(a ∨ a)`.

use crate::sat::clause::Clause;
use crate::sat::cnf::Formula;
use crate::sat::error::{ParseError, ParseResult};
use crate::sat::literal::Lit;
use smallvec::SmallVec;
use std::io::BufRead;

/// Parses a single whitespace-separated literal token.
pub(crate) fn parse_literal(token: &str, line: usize) -> ParseResult<i32> {
    token.parse::<i32>().map_err(|_| ParseError::InvalidLiteral {
        line,
        token: token.to_string(),
    })
}

/// Turns the literals of one 0-terminated group into a clause.
fn to_clause(literals: &[Lit], line: usize) -> ParseResult<Clause> {
    match *literals {
        [] => Err(ParseError::EmptyClause { line }),
        [a] => Ok(Clause::unit(a)),
        [a, b] => Ok(Clause::new(a, b)),
        _ => Err(ParseError::WrongArity {
            line,
            found: literals.len(),
        }),
    }
}

/// Parses DIMACS data from `reader` into a [`Formula`].
///
/// # Errors
///
/// - [`ParseError::Io`] if reading fails.
/// - [`ParseError::InvalidLiteral`] on a non-integer token.
/// - [`ParseError::WrongArity`] on a clause with more than two literals.
/// - [`ParseError::EmptyClause`] on a lone `0`, which no assignment satisfies.
pub fn parse_dimacs<R: BufRead>(reader: R) -> ParseResult<Formula> {
    let mut formula = Formula::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut parts = line.split_whitespace().peekable();

        match parts.peek() {
            Some(&"%") => break,
            None | Some(&"c" | &"p") => {}
            Some(_) => {
                let mut literals: SmallVec<[Lit; 2]> = SmallVec::new();
                for token in parts {
                    let value = parse_literal(token, line_no)?;
                    match value {
                        0 => {
                            formula.add_clause(to_clause(&literals, line_no)?);
                            literals.clear();
                        }
                        i32::MIN => {
                            return Err(ParseError::InvalidLiteral {
                                line: line_no,
                                token: token.to_string(),
                            });
                        }
                        _ => literals.push(Lit::from_i32(value)),
                    }
                }

                // A trailing clause without its terminating 0.
                if !literals.is_empty() {
                    formula.add_clause(to_clause(&literals, line_no)?);
                }
            }
        }
    }

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_simple_dimacs() {
        let dimacs_content = "c This is a comment\n\
                              p cnf 3 2\n\
                              1 -2 0\n\
                              2 3 0\n";
        let formula = parse_dimacs(Cursor::new(dimacs_content)).unwrap();

        assert_eq!(formula.len(), 2, "Should parse 2 clauses");
        assert_eq!(formula.num_vars, 3, "Number of variables mismatch");
        assert_eq!(formula.clauses[0], Clause::from((1, -2)));
        assert_eq!(formula.clauses[1], Clause::from((2, 3)));
    }

    #[test]
    fn test_parse_dimacs_with_empty_lines_and_end_marker() {
        let dimacs_content = "p cnf 2 2\n\
                              \n\
                              1 0\n\
                              \n\
                              -2 0\n\
                              %\n\
                              c this should be ignored";
        let formula = parse_dimacs(Cursor::new(dimacs_content)).unwrap();

        assert_eq!(formula.len(), 2);
        assert_eq!(formula.num_vars, 2);
        assert!(formula.clauses[0].is_unit());
        assert_eq!(formula.clauses[1], Clause::unit(Lit::from(-2)));
    }

    #[test]
    fn test_parse_dimacs_rejects_empty_clause() {
        let err = parse_dimacs(Cursor::new("p cnf 1 2\n1 0\n0\n")).unwrap_err();
        assert!(matches!(err, ParseError::EmptyClause { line: 3 }));
        assert_eq!(err.to_string(), "line 3: empty clause");
    }

    #[test]
    fn test_parse_dimacs_several_clauses_on_one_line() {
        let formula = parse_dimacs(Cursor::new("1 0 -1 0")).unwrap();
        assert_eq!(
            formula.clauses,
            vec![Clause::unit(Lit::from(1)), Clause::unit(Lit::from(-1))]
        );
        assert!(!crate::sat::two_sat::TwoSat::new(formula).is_satisfiable());

        let formula = parse_dimacs(Cursor::new("1 -2 0 2 3 0\n-3 0\n")).unwrap();
        assert_eq!(formula.len(), 3);
        assert_eq!(formula.clauses[1], Clause::from((2, 3)));
    }

    #[test]
    fn test_parse_dimacs_missing_terminator() {
        let formula = parse_dimacs(Cursor::new("1 -2 0 3\n")).unwrap();
        assert_eq!(formula.clauses, vec![Clause::from((1, -2)), Clause::unit(Lit::from(3))]);
    }

    #[test]
    fn test_parse_dimacs_double_terminator_is_empty_clause() {
        let err = parse_dimacs(Cursor::new("1 2 0 0\n")).unwrap_err();
        assert!(matches!(err, ParseError::EmptyClause { line: 1 }));
    }

    #[test]
    fn test_parse_dimacs_malformed_literal() {
        let err = parse_dimacs(Cursor::new("1 abc 0\n")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLiteral { line: 1, ref token } if token == "abc"));
        assert_eq!(err.to_string(), "line 1: failed to parse literal 'abc' as i32");
    }

    #[test]
    fn test_parse_dimacs_rejects_long_clause() {
        let err = parse_dimacs(Cursor::new("p cnf 3 1\n1 2 3 0\n")).unwrap_err();
        assert!(matches!(err, ParseError::WrongArity { line: 2, found: 3 }));
    }

    #[test]
    fn test_parse_dimacs_round_trips_display() {
        let formula = parse_dimacs(Cursor::new("1 -2 0\n3 0\n")).unwrap();
        let reparsed = parse_dimacs(Cursor::new(formula.to_string())).unwrap();
        assert_eq!(formula, reparsed);
    }
}
