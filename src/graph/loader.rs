//! Line-oriented edge-list loading.
//!
//! Input format: one undirected weighted edge per line, three
//! whitespace-delimited fields (`node1 node2 weight`). Records that do not
//! parse to exactly three fields, or whose weight is not a finite
//! non-negative number, are skipped and counted rather than failing the
//! load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::weighted::WeightedGraph;

impl WeightedGraph {
    /// Reads an edge list from `reader`.
    ///
    /// Returns the graph together with the number of skipped records.
    ///
    /// # Examples
    ///
    /// ```
    /// use orchard_path::graph::WeightedGraph;
    ///
    /// let input = "A B 1.0\nB C 2.0\nnot an edge record\n";
    /// let (g, skipped) = WeightedGraph::from_edge_list(input.as_bytes()).unwrap();
    /// assert_eq!(g.edge_count(), 2);
    /// assert_eq!(skipped, 1);
    /// ```
    pub fn from_edge_list<R: BufRead>(reader: R) -> io::Result<(Self, usize)> {
        let mut graph = Self::new();
        let mut skipped = 0usize;

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                if !line.trim().is_empty() {
                    log::warn!("skipping malformed edge record at line {}", lineno + 1);
                    skipped += 1;
                }
                continue;
            }
            match fields[2].parse::<f64>() {
                Ok(weight) if weight.is_finite() && weight >= 0.0 => {
                    graph.add_edge(fields[0], fields[1], weight);
                }
                _ => {
                    log::warn!("skipping edge record with bad weight at line {}", lineno + 1);
                    skipped += 1;
                }
            }
        }

        Ok((graph, skipped))
    }

    /// Reads an edge list from the file at `path`.
    pub fn from_edge_list_path<P: AsRef<Path>>(path: P) -> io::Result<(Self, usize)> {
        Self::from_edge_list(BufReader::new(File::open(path)?))
    }
}
