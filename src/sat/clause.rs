#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Two-literal clauses.

use crate::sat::literal::Lit;
use core::ops::Index;
use rustc_hash::FxHashSet;
use std::fmt;

/// A disjunction `(a ∨ b)` of exactly two literals.
///
/// Unit clauses are stored as `(a ∨ a)`, which yields the single implication
/// `¬a → a` and forces `a` to be true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    /// The two disjuncts.
    pub literals: [Lit; 2],
}

impl Clause {
    /// The clause `(a ∨ b)`.
    #[must_use]
    pub const fn new(a: Lit, b: Lit) -> Self {
        Self { literals: [a, b] }
    }

    /// The unit clause `(a)`, stored as `(a ∨ a)`.
    #[must_use]
    pub const fn unit(a: Lit) -> Self {
        Self::new(a, a)
    }

    /// The first literal.
    #[must_use]
    pub const fn first(&self) -> Lit {
        self.literals[0]
    }

    /// The second literal.
    #[must_use]
    pub const fn second(&self) -> Lit {
        self.literals[1]
    }

    /// Iterates over both literals.
    pub fn iter(&self) -> impl Iterator<Item = &Lit> {
        self.literals.iter()
    }

    /// Whether both literals are the same.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.literals[0] == self.literals[1]
    }

    /// A clause `(a ∨ ¬a)` is always satisfied.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.literals[0] == self.literals[1].negated()
    }

    /// The implication edges `¬a → b` and `¬b → a` of this clause.
    #[must_use]
    pub fn implications(&self) -> [(Lit, Lit); 2] {
        let [a, b] = self.literals;
        [(-a, b), (-b, a)]
    }

    /// Whether one of the literals is true in `model`, given as the set of
    /// literals assigned true.
    #[must_use]
    pub fn is_satisfied_by(&self, model: &FxHashSet<i32>) -> bool {
        self.iter().any(|lit| model.contains(&lit.to_i32()))
    }
}

impl From<(i32, i32)> for Clause {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(Lit::from(a), Lit::from(b))
    }
}

impl From<[i32; 2]> for Clause {
    fn from([a, b]: [i32; 2]) -> Self {
        Self::new(Lit::from(a), Lit::from(b))
    }
}

impl Index<usize> for Clause {
    type Output = Lit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.literals[index]
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            write!(f, "{} 0", self.literals[0])
        } else {
            write!(f, "{} {} 0", self.literals[0], self.literals[1])
        }
    }
}
