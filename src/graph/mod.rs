//! Weighted undirected graph with opaque string labels.
//!
//! The graph provider boundary for the Orchard Algorithm: node labels are
//! interned to dense `usize` ids, edges carry non-negative `f64` weights,
//! and the adjacency lists back both cost evaluation and the baseline
//! shortest-path primitive used to seed candidate paths.
//!
//! Everything hangs off [`WeightedGraph`]: storage, edge lookup, and path
//! cost summation in `weighted`, line-oriented edge-list parsing
//! (`node1 node2 weight`) in `loader`, and Dijkstra shortest path over
//! the adjacency lists in `shortest`.

mod loader;
mod shortest;
mod weighted;

pub use weighted::WeightedGraph;
