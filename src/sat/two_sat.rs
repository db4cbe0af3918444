#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! 2-SAT by strongly connected components of the implication graph.
//!
//! Every clause `(a ∨ b)` contributes the implications `¬a → b` and `¬b → a`.
//! The formula is unsatisfiable exactly when some literal and its negation
//! lie in the same strongly connected component, since each would then force
//! the other.
//!
//! When the formula is satisfiable a model is read off the component order:
//! components are discovered sinks first, and a variable is set so that its
//! true literal is the one whose component comes first.

use crate::graph::directed::DirectedGraph;
use crate::graph::kosaraju::{Kosaraju, SccPartition};
use crate::sat::assignment::{Assignment, Solutions};
use crate::sat::clause::Clause;
use crate::sat::cnf::Formula;
use crate::sat::literal::{Lit, Variable};

/// Builds the implication graph of `clauses`.
pub fn build<'a, I: IntoIterator<Item = &'a Clause>>(clauses: I) -> DirectedGraph<Lit> {
    let mut graph = DirectedGraph::new();

    for clause in clauses {
        for &lit in clause.iter() {
            graph.add_vertex(lit);
            graph.add_vertex(-lit);
        }
        for (tail, head) in clause.implications() {
            graph.add_edge(tail, head);
        }
    }

    graph
}

/// Returns `false` if any literal of `graph` shares a component with its
/// negation.
#[must_use]
pub fn is_satisfiable(graph: &DirectedGraph<Lit>, partition: &SccPartition<Lit>) -> bool {
    graph
        .vertices()
        .filter(|lit| lit.polarity())
        .all(|lit| !partition.same_component(lit, -lit))
}

/// Size figures of the last solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolutionStats {
    /// Literals in the implication graph.
    pub vertices: usize,
    /// Distinct implications.
    pub edges: usize,
    /// Strongly connected components.
    pub components: usize,
    /// Size of the largest component.
    pub largest_component: usize,
}

/// Solver owning a formula and the state of its last decomposition.
#[derive(Debug, Clone)]
pub struct TwoSat {
    /// The formula being solved.
    pub formula: Formula,
    graph: DirectedGraph<Lit>,
    partition: Option<SccPartition<Lit>>,
    kosaraju: Kosaraju<Lit>,
    stats: SolutionStats,
}

impl TwoSat {
    /// Builds the implication graph of `formula`. Nothing is decomposed yet.
    #[must_use]
    pub fn new(formula: Formula) -> Self {
        let graph = build(&formula.clauses);
        Self {
            formula,
            graph,
            partition: None,
            kosaraju: Kosaraju::new(),
            stats: SolutionStats::default(),
        }
    }

    /// The implication graph.
    #[must_use]
    pub const fn graph(&self) -> &DirectedGraph<Lit> {
        &self.graph
    }

    /// The partition from the last call to [`decompose`](Self::decompose) or
    /// [`solve`](Self::solve).
    #[must_use]
    pub const fn partition(&self) -> Option<&SccPartition<Lit>> {
        self.partition.as_ref()
    }

    /// Figures from the last decomposition, zero before the first.
    #[must_use]
    pub const fn stats(&self) -> SolutionStats {
        self.stats
    }

    /// Decomposes the implication graph and records stats.
    pub fn decompose(&mut self) -> &SccPartition<Lit> {
        let partition = self.kosaraju.decompose(&mut self.graph);

        self.stats = SolutionStats {
            vertices: self.graph.num_vertices(),
            edges: self.graph.num_edges(),
            components: partition.len(),
            largest_component: partition.largest(1).first().copied().unwrap_or(0),
        };

        self.partition.insert(partition)
    }

    /// Whether the formula has a model.
    pub fn is_satisfiable(&mut self) -> bool {
        self.decompose();
        self.partition
            .as_ref()
            .is_some_and(|partition| is_satisfiable(&self.graph, partition))
    }

    /// Finds a model, or `None` if the formula is unsatisfiable.
    ///
    /// Variables up to `num_vars` that no clause mentions are set false.
    pub fn solve(&mut self) -> Option<Solutions> {
        if !self.is_satisfiable() {
            log::debug!("two_sat: a literal shares a component with its negation");
            return None;
        }
        let partition = self.partition.as_ref()?;

        let mut assignment = Assignment::new(self.formula.num_vars);
        for var in 1..=self.formula.num_vars {
            let var = Variable::try_from(var).ok()?;
            let lit = Lit::new(var, true);
            let value = match (partition.rank(lit), partition.rank(-lit)) {
                (Some(pos), Some(neg)) => pos < neg,
                _ => false,
            };
            assignment.set(var, value);
        }

        Some(assignment.get_solutions())
    }

    /// The pairs of complementary literals that share a component, by
    /// variable. Empty when the formula is satisfiable.
    pub fn conflicts(&mut self) -> Vec<Variable> {
        if self.partition.is_none() {
            self.decompose();
        }
        let Some(partition) = self.partition.as_ref() else {
            return Vec::new();
        };

        let mut vars: Vec<Variable> = self
            .graph
            .vertices()
            .filter(|lit| lit.polarity() && partition.same_component(*lit, -*lit))
            .map(Lit::variable)
            .collect();
        vars.sort_unstable();
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn brute_force(formula: &Formula) -> bool {
        let n = formula.num_vars;
        (0..1_u32 << n).any(|bits| {
            let model = (1..=n)
                .map(|v| {
                    let v = i32::try_from(v).unwrap();
                    if bits >> (v - 1) & 1 == 1 { v } else { -v }
                })
                .collect_vec();
            formula.verify(&model)
        })
    }

    #[test]
    fn test_build_adds_both_polarities() {
        let formula = Formula::new([(1, -2)]);
        let graph = build(&formula.clauses);

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.has_edge(Lit::from(-1), Lit::from(-2)));
        assert!(graph.has_edge(Lit::from(2), Lit::from(1)));
    }

    #[test]
    fn test_satisfiable_instance() {
        let formula = Formula::new([(1, 2), (-1, 2), (1, -2)]);
        let mut graph = build(&formula.clauses);
        let partition = Kosaraju::new().decompose(&mut graph);
        assert!(is_satisfiable(&graph, &partition));

        let mut solver = TwoSat::new(formula);
        let model = solver.solve().unwrap();
        assert_eq!(model, vec![1, 2]);
        assert!(solver.formula.verify(&model));
        assert!(solver.conflicts().is_empty());
    }

    #[test]
    fn test_unsatisfiable_instance() {
        let formula = Formula::new([(1, 2), (-1, 2), (1, -2), (-1, -2)]);
        let mut graph = build(&formula.clauses);
        let partition = Kosaraju::new().decompose(&mut graph);

        assert!(!is_satisfiable(&graph, &partition));
        assert!(partition.same_component(Lit::from(1), Lit::from(-1)));

        let mut solver = TwoSat::new(formula);
        assert_eq!(solver.solve(), None);
        assert_eq!(solver.conflicts(), vec![1, 2]);
    }

    #[test]
    fn test_unit_clauses() {
        let mut formula = Formula::new([(1, 2)]);
        formula.add_clause(Clause::unit(Lit::from(-1)));
        let mut solver = TwoSat::new(formula.clone());
        assert_eq!(solver.solve(), Some(vec![-1, 2]));

        formula.add_clause(Clause::unit(Lit::from(-2)));
        let mut solver = TwoSat::new(formula);
        assert_eq!(solver.solve(), None);
    }

    #[test]
    fn test_tautology_only() {
        let mut solver = TwoSat::new(Formula::new([(3, -3)]));
        let model = solver.solve().unwrap();
        assert_eq!(model.len(), 3);
        assert!(solver.formula.verify(&model));
    }

    #[test]
    fn test_empty_formula() {
        let mut solver = TwoSat::new(Formula::default());
        assert_eq!(solver.solve(), Some(vec![]));
        assert_eq!(solver.stats(), SolutionStats::default());
    }

    #[test]
    fn test_stats() {
        let mut solver = TwoSat::new(Formula::new([(1, 2), (-1, 2), (1, -2), (-1, -2)]));
        assert!(!solver.is_satisfiable());

        let stats = solver.stats();
        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.edges, 8);
        assert_eq!(stats.components, 1);
        assert_eq!(stats.largest_component, 4);
    }

    #[test]
    fn test_random_formulas_match_brute_force() {
        let mut rng = fastrand::Rng::with_seed(2);
        for _ in 0..300 {
            let vars = rng.i32(1..=6);
            let clauses = rng.usize(1..=14);
            let formula: Formula = (0..clauses)
                .map(|_| {
                    let a = rng.i32(1..=vars) * if rng.bool() { 1 } else { -1 };
                    let b = rng.i32(1..=vars) * if rng.bool() { 1 } else { -1 };
                    Clause::from((a, b))
                })
                .collect();

            let expected = brute_force(&formula);
            let mut solver = TwoSat::new(formula.clone());
            match solver.solve() {
                Some(model) => {
                    assert!(expected, "found a model for an unsatisfiable formula");
                    assert!(formula.verify(&model), "model {model:?} fails {formula}");
                }
                None => assert!(!expected, "missed a model of {formula}"),
            }
        }
    }
}
