#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Truth assignments over the variables of a formula.

use crate::sat::literal::{Lit, Variable};
use core::ops::Index;
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// The value of one variable.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default, Hash, PartialOrd, Ord)]
pub enum VarState {
    /// No value yet.
    #[default]
    Unassigned,
    /// Set to the given value.
    Assigned(bool),
}

impl VarState {
    /// Whether the variable has a value.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    /// Whether the variable is set to true.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Assigned(true))
    }
}

/// A model: the signed literals that are true, one per variable, in
/// ascending variable order.
pub type Solutions = Vec<i32>;

/// Dense assignment indexed by variable. Index 0 is unused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment(Vec<VarState>);

impl Index<Variable> for Assignment {
    type Output = VarState;

    fn index(&self, index: Variable) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl Assignment {
    /// All of `1..=num_vars` unassigned.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self(vec![VarState::Unassigned; num_vars + 1])
    }

    /// Assigns `b` to `var`.
    ///
    /// # Panics
    ///
    /// If `var` is out of range.
    pub fn set(&mut self, var: Variable, b: bool) {
        self.0[var as usize] = VarState::Assigned(b);
    }

    /// The value of `var`, or `None` if unassigned or out of range.
    #[must_use]
    pub fn var_value(&self, var: Variable) -> Option<bool> {
        match self.0.get(var as usize) {
            Some(VarState::Assigned(b)) => Some(*b),
            _ => None,
        }
    }

    /// Whether `lit` is true, or `None` if its variable is unassigned.
    #[must_use]
    pub fn literal_value(&self, lit: Lit) -> Option<bool> {
        self.var_value(lit.variable())
            .map(|b| if lit.polarity() { b } else { !b })
    }

    /// Every assigned variable as the literal that is true under it.
    #[must_use]
    pub fn get_solutions(&self) -> Solutions {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                let i = i32::try_from(i).ok()?;
                match s {
                    VarState::Assigned(true) => Some(i),
                    VarState::Assigned(false) => Some(-i),
                    VarState::Unassigned => None,
                }
            })
            .collect_vec()
    }
}

/// The set view of a model, for clause checks.
#[must_use]
pub fn true_literals(solutions: &Solutions) -> FxHashSet<i32> {
    solutions.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_by_default() {
        let assignment = Assignment::new(3);
        assert_eq!(assignment[2], VarState::Unassigned);
        assert!(!assignment[2].is_assigned());
        assert_eq!(assignment.var_value(2), None);
        assert!(assignment.get_solutions().is_empty());
    }

    #[test]
    fn test_literal_value() {
        let mut assignment = Assignment::new(2);
        assignment.set(1, false);
        assignment.set(2, true);
        assert!(assignment[2].is_true());
        assert_eq!(assignment.literal_value(Lit::from(-1)), Some(true));
        assert_eq!(assignment.literal_value(Lit::from(1)), Some(false));
        assert_eq!(assignment.get_solutions(), vec![-1, 2]);
    }
}
