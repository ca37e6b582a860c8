//! Adjacency-list graph storage and path cost evaluation.

use std::collections::HashMap;

/// A weighted undirected graph over opaque string labels.
///
/// Labels are interned to dense `usize` ids on first use; all algorithm
/// code works on ids and resolves labels only at the reporting boundary.
/// Edge weights must be non-negative for path cost to be a valid ordering
/// key.
///
/// # Examples
///
/// ```
/// use orchard_path::graph::WeightedGraph;
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 2.5);
/// let a = g.node("A").unwrap();
/// let b = g.node("B").unwrap();
/// assert_eq!(g.edge_weight(a, b), Some(2.5));
/// assert_eq!(g.edge_weight(b, a), Some(2.5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl WeightedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, interning it if unseen.
    pub fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Looks up the id of an already-interned label.
    pub fn node(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the label for a node id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn label(&self, id: usize) -> &str {
        &self.labels[id]
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Adds an undirected edge between `a` and `b`, interning both labels.
    ///
    /// Re-adding an existing edge replaces its weight.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) {
        let ia = self.intern(a);
        let ib = self.intern(b);
        self.set_directed(ia, ib, weight);
        self.set_directed(ib, ia, weight);
    }

    fn set_directed(&mut self, from: usize, to: usize, weight: f64) {
        if let Some(entry) = self.adjacency[from].iter_mut().find(|(n, _)| *n == to) {
            entry.1 = weight;
        } else {
            self.adjacency[from].push((to, weight));
        }
    }

    /// Returns the weight of the edge between `a` and `b`, if present.
    pub fn edge_weight(&self, a: usize, b: usize) -> Option<f64> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|(n, _)| *n == b)
            .map(|&(_, w)| w)
    }

    /// Neighbors of `id` as `(node, weight)` pairs.
    pub fn neighbors(&self, id: usize) -> &[(usize, f64)] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sums the weights of consecutive edges along `path`.
    ///
    /// Returns `None` when a consecutive pair has no edge in the graph
    /// (a disconnected path), or when the path references an unknown
    /// node id. Paths with fewer than two nodes cost `0.0`.
    ///
    /// Evaluation is pure: the same path always yields the same cost.
    pub fn path_cost(&self, path: &[usize]) -> Option<f64> {
        if let Some(&first) = path.first() {
            if first >= self.node_count() {
                return None;
            }
        }
        let mut total = 0.0;
        for pair in path.windows(2) {
            total += self.edge_weight(pair[0], pair[1])?;
        }
        Some(total)
    }
}
