//! Cost evaluation and the disconnected-path policy.
//!
//! Two surfaces over [`WeightedGraph::path_cost`]:
//!
//! - [`evaluate_path`] raises a typed [`OaError::DisconnectedPath`] and is
//!   the one-shot evaluator for callers that need an exact answer.
//! - [`cost_or_infinity`] is the policy applied uniformly inside the
//!   generation loop: a disconnected path costs `f64::INFINITY`, ranks
//!   last at screening, and is overwritten by grafting or dropped at
//!   replenishment. The run never aborts mid-generation.

use crate::graph::WeightedGraph;

use super::error::OaError;

/// Sums the edge weights along `path`, failing on the first consecutive
/// pair without an edge.
///
/// # Examples
///
/// ```
/// use orchard_path::graph::WeightedGraph;
/// use orchard_path::oa::evaluate_path;
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 1.5);
/// let a = g.node("A").unwrap();
/// let b = g.node("B").unwrap();
///
/// assert_eq!(evaluate_path(&g, &[a, b]), Ok(1.5));
/// ```
pub fn evaluate_path(graph: &WeightedGraph, path: &[usize]) -> Result<f64, OaError> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        match graph.edge_weight(pair[0], pair[1]) {
            Some(weight) => total += weight,
            None => {
                return Err(OaError::DisconnectedPath {
                    from: graph.label(pair[0]).to_string(),
                    to: graph.label(pair[1]).to_string(),
                })
            }
        }
    }
    Ok(total)
}

/// Path cost under the generation-loop policy: disconnected paths cost
/// `f64::INFINITY` instead of raising.
pub fn cost_or_infinity(graph: &WeightedGraph, path: &[usize]) -> f64 {
    graph.path_cost(path).unwrap_or(f64::INFINITY)
}
