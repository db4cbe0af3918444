#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A directed graph with forward and reverse adjacency.
//!
//! Both adjacency maps are kept in sync on every insertion, so
//! `head ∈ forward[tail]` exactly when `tail ∈ reverse[head]`. The view can be
//! toggled in O(1) by swapping the two maps, which lets a traversal run over
//! the transposed graph without building a second graph.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Bounds for a graph vertex: a cheap, totally ordered identifier.
pub trait Vertex: Copy + Debug + Eq + Hash + Ord {}

impl<T: Copy + Debug + Eq + Hash + Ord> Vertex for T {}

/// A directed graph over vertices of type `V`, with a toggleable transposed
/// view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<V: Vertex> {
    vertices: FxHashSet<V>,
    forward: FxHashMap<V, FxHashSet<V>>,
    reverse: FxHashMap<V, FxHashSet<V>>,
    reversed: bool,
    num_edges: usize,
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            vertices: FxHashSet::default(),
            forward: FxHashMap::default(),
            reverse: FxHashMap::default(),
            reversed: false,
            num_edges: 0,
        }
    }
}

impl<V: Vertex> DirectedGraph<V> {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(tail, head)` pairs, adding endpoints as needed.
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (tail, head) in edges {
            graph.connect(tail, head);
        }
        graph
    }

    /// Inserts `v` with empty adjacency. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, v: V) {
        if self.vertices.insert(v) {
            self.forward.insert(v, FxHashSet::default());
            self.reverse.insert(v, FxHashSet::default());
        }
    }

    /// Inserts the edge `tail → head` in the current view. Repeated edges are
    /// absorbed.
    ///
    /// # Panics
    ///
    /// If either endpoint has not been added.
    pub fn add_edge(&mut self, tail: V, head: V) {
        assert!(self.contains(tail), "edge tail {tail:?} is not a vertex");
        assert!(self.contains(head), "edge head {head:?} is not a vertex");

        if self.outgoing_mut(tail).insert(head) {
            self.incoming_mut(head).insert(tail);
            self.num_edges += 1;
        }
    }

    /// Like [`add_edge`](Self::add_edge), but adds missing endpoints first.
    pub fn connect(&mut self, tail: V, head: V) {
        self.add_vertex(tail);
        self.add_vertex(head);
        self.add_edge(tail, head);
    }

    /// Swaps the roles of the forward and reverse maps. Toggling twice
    /// restores the original orientation.
    pub fn toggle_view(&mut self) {
        std::mem::swap(&mut self.forward, &mut self.reverse);
        self.reversed = !self.reversed;
    }

    /// Whether the graph is currently viewed transposed.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Whether `v` has been added.
    #[must_use]
    pub fn contains(&self, v: V) -> bool {
        self.vertices.contains(&v)
    }

    /// Heads of the edges leaving `v` in the current view.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex.
    pub fn successors(&self, v: V) -> impl Iterator<Item = V> + '_ {
        self.forward
            .get(&v)
            .unwrap_or_else(|| panic!("{v:?} is not a vertex"))
            .iter()
            .copied()
    }

    /// Tails of the edges entering `v` in the current view.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex.
    pub fn predecessors(&self, v: V) -> impl Iterator<Item = V> + '_ {
        self.reverse
            .get(&v)
            .unwrap_or_else(|| panic!("{v:?} is not a vertex"))
            .iter()
            .copied()
    }

    /// Whether `tail → head` is an edge in the current view.
    #[must_use]
    pub fn has_edge(&self, tail: V, head: V) -> bool {
        self.forward.get(&tail).is_some_and(|heads| heads.contains(&head))
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.iter().copied()
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn outgoing_mut(&mut self, v: V) -> &mut FxHashSet<V> {
        self.forward.entry(v).or_default()
    }

    fn incoming_mut(&mut self, v: V) -> &mut FxHashSet<V> {
        self.reverse.entry(v).or_default()
    }
}
