//! Orchard Algorithm path search.
//!
//! Approximates a low-cost path between two fixed endpoints of a weighted
//! undirected graph using the Orchard Algorithm (OA), a population-based
//! metaheuristic. A pool of candidate paths ("trees") is perturbed, ranked,
//! and partially replaced over a fixed number of generations ("growth
//! years"), converging toward a low-cost candidate.
//!
//! # Modules
//!
//! - [`graph`] — Weighted undirected graph with string labels, an edge-list
//!   loader, and the baseline shortest-path primitive used to seed trees.
//! - [`oa`] — The generational search loop: configuration, growth
//!   operators, screening, grafting, replenishment, and reporting.
//!
//! # Example
//!
//! ```
//! use orchard_path::graph::WeightedGraph;
//! use orchard_path::oa::{OaConfig, OaRunner};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("A", "B", 1.0);
//! graph.add_edge("B", "C", 1.0);
//! graph.add_edge("A", "C", 5.0);
//!
//! let config = OaConfig::default()
//!     .with_population_size(8)
//!     .with_growth_years(5)
//!     .with_seed(42);
//!
//! let result = OaRunner::run(&graph, "A", "C", &config).expect("A reaches C");
//! assert!(result.best_cost <= 5.0);
//! ```
//!
//! # Reference
//!
//! Kaveh, Mesgari & Saeidian (2023), *Orchard Algorithm (OA): A new
//! meta-heuristic algorithm for solving discrete and continuous
//! optimization problems*, Mathematics and Computers in Simulation 208.

pub mod graph;
pub mod oa;
