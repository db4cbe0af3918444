#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Directed graphs and their strongly connected components.

/// Directed graph with a toggleable transposed view.
pub mod directed;

/// Kosaraju's strongly connected components algorithm.
pub mod kosaraju;
