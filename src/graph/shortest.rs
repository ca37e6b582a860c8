//! Baseline shortest path (Dijkstra).
//!
//! Seeds for the Orchard Algorithm come from this primitive: a standard
//! binary-heap Dijkstra over the adjacency lists. Non-negative edge
//! weights are an invariant of [`WeightedGraph`], so no negative-cycle
//! handling exists here.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::weighted::WeightedGraph;

/// Heap entry ordered so that the smallest tentative cost pops first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Visit {
    cost: f64,
    node: usize,
}

impl Eq for Visit {}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on cost to turn the max-heap into a min-heap.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl WeightedGraph {
    /// Returns a minimum-weight path from `source` to `target`, inclusive
    /// of both endpoints, or `None` when `target` is unreachable.
    ///
    /// # Examples
    ///
    /// ```
    /// use orchard_path::graph::WeightedGraph;
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_edge("A", "B", 1.0);
    /// g.add_edge("B", "C", 1.0);
    /// g.add_edge("A", "C", 5.0);
    /// let a = g.node("A").unwrap();
    /// let c = g.node("C").unwrap();
    /// let path = g.shortest_path(a, c).unwrap();
    /// assert_eq!(g.path_cost(&path), Some(2.0));
    /// ```
    pub fn shortest_path(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        let n = self.node_count();
        if source >= n || target >= n {
            return None;
        }

        let mut dist = vec![f64::INFINITY; n];
        let mut prev = vec![usize::MAX; n];
        let mut heap = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(Visit {
            cost: 0.0,
            node: source,
        });

        while let Some(Visit { cost, node }) = heap.pop() {
            if node == target {
                break;
            }
            if cost > dist[node] {
                continue; // stale entry
            }
            for &(next, weight) in self.neighbors(node) {
                let candidate = cost + weight;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    prev[next] = node;
                    heap.push(Visit {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }

        if dist[target].is_infinite() {
            return None;
        }

        let mut path = vec![target];
        let mut node = target;
        while node != source {
            node = prev[node];
            path.push(node);
        }
        path.reverse();
        Some(path)
    }
}
