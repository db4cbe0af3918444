#![deny(missing_docs)]
//! This crate decides 2-SAT formulas through the strongly connected components
//! of their implication graph, computed with Kosaraju's algorithm.

/// The `graph` module implements directed graphs and their decomposition into
/// strongly connected components.
pub mod graph;

/// The `sat` module implements 2-CNF formulas, their parsers, and the 2-SAT
/// solver built on the `graph` module.
pub mod sat;
