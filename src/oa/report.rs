//! Consumer-facing run reporting.

use std::fmt;

use crate::graph::WeightedGraph;

use super::runner::OaResult;

/// Formats a finished run as an evaluation block: execution time, path
/// cost, visited-node count, and the path as an arrow-joined label
/// sequence.
///
/// # Examples
///
/// ```
/// use orchard_path::graph::WeightedGraph;
/// use orchard_path::oa::{OaConfig, OaRunner, RunReport};
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 1.0);
/// g.add_edge("B", "C", 1.0);
///
/// let config = OaConfig::default().with_population_size(4).with_seed(42);
/// let result = OaRunner::run(&g, "A", "C", &config).unwrap();
/// let report = RunReport::new(&g, &result, "A", "C");
/// assert!(report.to_string().contains("Path Cost"));
/// ```
pub struct RunReport<'a> {
    graph: &'a WeightedGraph,
    result: &'a OaResult,
    source: &'a str,
    target: &'a str,
}

impl<'a> RunReport<'a> {
    /// Creates a report over a finished run.
    pub fn new(
        graph: &'a WeightedGraph,
        result: &'a OaResult,
        source: &'a str,
        target: &'a str,
    ) -> Self {
        Self {
            graph,
            result,
            source,
            target,
        }
    }
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .result
            .best
            .path
            .iter()
            .map(|&id| self.graph.label(id))
            .collect::<Vec<_>>()
            .join(" -> ");

        writeln!(f, "=== Orchard Algorithm Evaluation ===")?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f, "Target: {}", self.target)?;
        writeln!(
            f,
            "→ Execution Time: {:.6} seconds",
            self.result.elapsed.as_secs_f64()
        )?;
        writeln!(f, "→ Path Cost: {}", self.result.best_cost)?;
        writeln!(f, "→ Visited Nodes: {}", self.result.visited_nodes())?;
        write!(f, "→ Path: {path}")
    }
}
