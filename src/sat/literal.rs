#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Signed integer literals.
//!
//! Variable `x` is represented by two literals, `x` (true) and `-x` (false).
//! Negation is a sign flip, and literals compare and hash by their identifier,
//! so they can be used directly as vertices of an implication graph.

use core::ops::{Neg, Not};
use std::fmt;

/// Index of a boolean variable. Variables are numbered from 1.
pub type Variable = u32;

/// A literal encoded as a non-zero `i32`: the magnitude is the variable and
/// the sign is the polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit(i32);

impl Lit {
    /// Creates the literal of `var` with the given polarity.
    ///
    /// # Panics
    ///
    /// If `var` is 0 or does not fit in an `i32`.
    #[must_use]
    pub fn new(var: Variable, polarity: bool) -> Self {
        assert!(var != 0, "variable 0 has no literal");
        let var = i32::try_from(var).expect("literal variable overflowed");

        if polarity { Self(var) } else { Self(-var) }
    }

    /// Wraps a signed DIMACS-style literal.
    ///
    /// # Panics
    ///
    /// If `value` is 0 or `i32::MIN` (which has no negation).
    #[must_use]
    pub fn from_i32(value: i32) -> Self {
        assert!(value != 0, "0 is not a literal");
        assert!(value != i32::MIN, "literal {value} cannot be negated");
        Self(value)
    }

    /// The signed identifier of this literal.
    #[must_use]
    pub const fn to_i32(self) -> i32 {
        self.0
    }

    /// The variable of this literal.
    #[must_use]
    pub const fn variable(self) -> Variable {
        self.0.unsigned_abs()
    }

    /// `true` for the positive literal `x`, `false` for `-x`.
    #[must_use]
    pub const fn polarity(self) -> bool {
        self.0.is_positive()
    }

    /// `true` for `-x`.
    #[must_use]
    pub const fn is_negated(self) -> bool {
        !self.polarity()
    }

    /// The complementary literal.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self(-self.0)
    }
}

impl From<i32> for Lit {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<Lit> for i32 {
    fn from(lit: Lit) -> Self {
        lit.0
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Not for Lit {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &Lit {
    type Output = Lit;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Not for &Lit {
    type Output = Lit;

    fn not(self) -> Self::Output {
        self.negated()
    }
}
