//! Random 2-CNF instances.

use crate::sat::clause::Clause;
use crate::sat::cnf::Formula;
use crate::sat::literal::{Lit, Variable};

/// Generates `num_clauses` clauses over variables `1..=num_vars`, with
/// literals and signs drawn uniformly. The same seed gives the same formula.
///
/// # Panics
///
/// If `num_vars` is 0 and `num_clauses` is not.
#[must_use]
pub fn random_formula(num_vars: Variable, num_clauses: usize, seed: u64) -> Formula {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut random_lit = || Lit::new(rng.u32(1..=num_vars), rng.bool());

    (0..num_clauses)
        .map(|_| {
            let a = random_lit();
            let b = random_lit();
            Clause::new(a, b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(random_formula(20, 50, 7), random_formula(20, 50, 7));
        assert_ne!(random_formula(20, 50, 7), random_formula(20, 50, 8));
    }

    #[test]
    fn test_bounds() {
        let formula = random_formula(5, 100, 1);
        assert_eq!(formula.len(), 100);
        assert!(formula.num_vars <= 5);
        assert!(formula.literals().all(|l| (1..=5).contains(&l.variable())));
    }

    #[test]
    fn test_no_clauses() {
        assert!(random_formula(0, 0, 0).is_empty());
    }
}
