#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A 2-CNF formula: a conjunction of two-literal clauses.

use crate::sat::assignment::{Solutions, true_literals};
use crate::sat::clause::Clause;
use crate::sat::literal::Lit;
use std::fmt;

/// A conjunction of [`Clause`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formula {
    /// The clauses, in input order.
    pub clauses: Vec<Clause>,
    /// Largest variable index mentioned by any clause.
    pub num_vars: usize,
}

impl Formula {
    /// Builds a formula from signed literal pairs.
    ///
    /// # Panics
    ///
    /// If any literal is 0.
    pub fn new<I: IntoIterator<Item = (i32, i32)>>(pairs: I) -> Self {
        pairs.into_iter().map(Clause::from).collect()
    }

    /// Number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether there are no clauses. The empty formula is satisfiable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates over the clauses.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Appends `clause`, widening `num_vars` to cover it.
    pub fn add_clause(&mut self, clause: Clause) {
        let var = clause.iter().map(|l| l.variable() as usize).max().unwrap_or(0);
        self.num_vars = self.num_vars.max(var);
        self.clauses.push(clause);
    }

    /// All literals mentioned by the formula, with repeats.
    pub fn literals(&self) -> impl Iterator<Item = Lit> + '_ {
        self.clauses.iter().flat_map(|c| c.literals)
    }

    /// Checks that every clause has a true literal under `solutions`.
    #[must_use]
    pub fn verify(&self, solutions: &Solutions) -> bool {
        let model = true_literals(solutions);
        self.clauses.iter().all(|c| c.is_satisfied_by(&model))
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        let mut formula = Self::default();
        for clause in iter {
            formula.add_clause(clause);
        }
        formula
    }
}

impl From<Vec<Clause>> for Formula {
    fn from(clauses: Vec<Clause>) -> Self {
        clauses.into_iter().collect()
    }
}

/// Renders the formula in DIMACS CNF.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}
