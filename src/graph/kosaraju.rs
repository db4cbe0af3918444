#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strongly connected components by Kosaraju's two-pass algorithm.
//!
//! The first pass runs a depth-first search over the transposed graph and
//! records vertices by decreasing finish time. The second pass searches the
//! original graph, taking roots in that order; every vertex reached from a
//! root that has no leader yet joins the root's component.
//!
//! Both passes use an explicit stack, so graph depth is bounded by memory
//! rather than by the call stack.
//!
//! The leader of a component is the first of its vertices to appear in the
//! finish order. Pass 1 roots are taken in descending vertex order, and for a
//! fixed graph the result is the same on every run.

use crate::graph::directed::{DirectedGraph, Vertex};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-vertex state during the first pass. Transitions only go forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Entered, with successors still on the stack.
    Discovered,
    /// Every successor is finished.
    Finished,
}

/// A frame of the iterative search. `Exit` is pushed beneath a vertex's
/// successors and popped once all of them are finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame<V> {
    Enter(V),
    Exit(V),
}

/// A partition of the vertices of a graph into strongly connected
/// components, each named by its leader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccPartition<V: Vertex> {
    leader_of: FxHashMap<V, V>,
    members_of: FxHashMap<V, FxHashSet<V>>,
    /// Leaders in the order their components were found. Components of the
    /// original graph are found sinks first, so this is a reverse topological
    /// order of the condensation.
    leaders: Vec<V>,
    rank_of: FxHashMap<V, usize>,
}

impl<V: Vertex> Default for SccPartition<V> {
    fn default() -> Self {
        Self {
            leader_of: FxHashMap::default(),
            members_of: FxHashMap::default(),
            leaders: Vec::new(),
            rank_of: FxHashMap::default(),
        }
    }
}

impl<V: Vertex> SccPartition<V> {
    fn open(&mut self, leader: V) {
        self.rank_of.insert(leader, self.leaders.len());
        self.leaders.push(leader);
        self.members_of.insert(leader, FxHashSet::default());
    }

    fn assign(&mut self, v: V, leader: V) {
        self.leader_of.insert(v, leader);
        self.members_of.entry(leader).or_default().insert(v);
    }

    fn is_assigned(&self, v: V) -> bool {
        self.leader_of.contains_key(&v)
    }

    /// The leader of `v`'s component, or `None` if `v` was not in the graph.
    #[must_use]
    pub fn leader(&self, v: V) -> Option<V> {
        self.leader_of.get(&v).copied()
    }

    /// The members of the component led by `leader`.
    #[must_use]
    pub fn members(&self, leader: V) -> Option<&FxHashSet<V>> {
        self.members_of.get(&leader)
    }

    /// Leaders in discovery order.
    #[must_use]
    pub fn leaders(&self) -> &[V] {
        &self.leaders
    }

    /// Position of `v`'s component in discovery order. A component can only
    /// reach components of lower rank.
    #[must_use]
    pub fn rank(&self, v: V) -> Option<usize> {
        self.leader(v).and_then(|l| self.rank_of.get(&l).copied())
    }

    /// Whether `u` and `v` are mutually reachable.
    #[must_use]
    pub fn same_component(&self, u: V, v: V) -> bool {
        matches!((self.leader(u), self.leader(v)), (Some(a), Some(b)) if a == b)
    }

    /// Iterates over `(leader, members)` in discovery order.
    pub fn components(&self) -> impl Iterator<Item = (V, &FxHashSet<V>)> + '_ {
        self.leaders.iter().map(|l| (*l, &self.members_of[l]))
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaders.len()
    }

    /// Whether the partition has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaders.is_empty()
    }

    /// Number of vertices covered.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.leader_of.len()
    }

    /// Component sizes, largest first.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        self.members_of
            .values()
            .map(|members| members.len())
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect_vec()
    }

    /// The `k` largest component sizes.
    #[must_use]
    pub fn largest(&self, k: usize) -> Vec<usize> {
        let mut sizes = self.component_sizes();
        sizes.truncate(k);
        sizes
    }
}

/// Kosaraju decomposer. Holds the working state of the last run, which is
/// reset at the start of every call to [`decompose`](Self::decompose).
#[derive(Debug, Clone)]
pub struct Kosaraju<V: Vertex> {
    visited: FxHashMap<V, VisitState>,
    stack: Vec<Frame<V>>,
    finish_order: Vec<V>,
}

impl<V: Vertex> Default for Kosaraju<V> {
    fn default() -> Self {
        Self {
            visited: FxHashMap::default(),
            stack: Vec::new(),
            finish_order: Vec::new(),
        }
    }
}

impl<V: Vertex> Kosaraju<V> {
    /// A decomposer with empty working state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last run by decreasing finish time in the transposed
    /// graph.
    #[must_use]
    pub fn finish_order(&self) -> &[V] {
        &self.finish_order
    }

    /// Partitions `graph` into strongly connected components.
    ///
    /// The graph is transposed for the first pass and restored before the
    /// second, so it is unchanged when this returns.
    ///
    /// # Panics
    ///
    /// If the graph is already viewed transposed, or if a vertex is left
    /// without a leader (which means the adjacency maps are inconsistent).
    pub fn decompose(&mut self, graph: &mut DirectedGraph<V>) -> SccPartition<V> {
        assert!(!graph.is_reversed(), "graph must be in its original orientation");

        self.visited.clear();
        self.stack.clear();
        self.finish_order.clear();
        self.finish_order.reserve(graph.num_vertices());

        log::debug!(
            "kosaraju: {} vertices, {} edges",
            graph.num_vertices(),
            graph.num_edges()
        );

        graph.toggle_view();
        self.first_loop(graph);
        graph.toggle_view();

        let partition = self.second_loop(graph);

        assert_eq!(
            partition.num_vertices(),
            graph.num_vertices(),
            "every vertex must have a leader"
        );
        log::debug!("kosaraju: {} components", partition.len());

        partition
    }

    fn first_loop(&mut self, graph: &DirectedGraph<V>) {
        for root in graph.vertices().sorted_unstable_by(|a, b| b.cmp(a)) {
            if self.state(root) == VisitState::Unvisited {
                self.first_dfs(graph, root);
            }
        }

        // Vertices were pushed as they finished; the last to finish leads.
        self.finish_order.reverse();
        log::trace!("kosaraju: finish order {:?}", self.finish_order);
    }

    fn first_dfs(&mut self, graph: &DirectedGraph<V>, root: V) {
        self.stack.push(Frame::Enter(root));

        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Enter(v) => {
                    if self.state(v) != VisitState::Unvisited {
                        continue;
                    }
                    self.visited.insert(v, VisitState::Discovered);
                    self.stack.push(Frame::Exit(v));

                    for head in graph.successors(v) {
                        if self.state(head) == VisitState::Unvisited {
                            self.stack.push(Frame::Enter(head));
                        }
                    }
                }
                Frame::Exit(v) => {
                    debug_assert_eq!(self.state(v), VisitState::Discovered);
                    self.visited.insert(v, VisitState::Finished);
                    self.finish_order.push(v);
                }
            }
        }
    }

    fn second_loop(&self, graph: &DirectedGraph<V>) -> SccPartition<V> {
        let mut partition = SccPartition::default();
        let mut stack = Vec::new();

        for &leader in &self.finish_order {
            if partition.is_assigned(leader) {
                continue;
            }

            partition.open(leader);
            partition.assign(leader, leader);
            stack.push(leader);

            while let Some(v) = stack.pop() {
                for head in graph.successors(v) {
                    if !partition.is_assigned(head) {
                        partition.assign(head, leader);
                        stack.push(head);
                    }
                }
            }
        }

        partition
    }

    fn state(&self, v: V) -> VisitState {
        self.visited.get(&v).copied().unwrap_or_default()
    }
}

/// Decomposes `graph` with a fresh [`Kosaraju`].
pub fn strongly_connected_components<V: Vertex>(graph: &mut DirectedGraph<V>) -> SccPartition<V> {
    Kosaraju::new().decompose(graph)
}
