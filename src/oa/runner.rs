//! Orchard Algorithm loop execution.
//!
//! [`OaRunner`] drives the full generational process: seed the orchard,
//! then for each growth year apply growth → screening → grafting →
//! replenishment, returning the elite of the final year's grafting step.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::WeightedGraph;

use super::config::OaConfig;
use super::cost::cost_or_infinity;
use super::error::OaError;
use super::growth::Growth;
use super::types::Tree;

/// Result of an Orchard Algorithm run.
#[derive(Debug, Clone)]
pub struct OaResult {
    /// The tree ranked first after the final generation's grafting step.
    pub best: Tree,

    /// Cost of the best tree (same as `best.cost`).
    pub best_cost: f64,

    /// Number of completed generations.
    pub generations: usize,

    /// Wall-clock time of the run, initialization included.
    pub elapsed: Duration,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost observed at each generation's grafting step.
    pub cost_history: Vec<f64>,
}

impl OaResult {
    /// Number of nodes on the returned path.
    pub fn visited_nodes(&self) -> usize {
        self.best.path.len()
    }
}

/// Executes the Orchard Algorithm.
///
/// # Usage
///
/// ```
/// use orchard_path::graph::WeightedGraph;
/// use orchard_path::oa::{OaConfig, OaRunner};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("A", "B", 1.0);
/// graph.add_edge("B", "C", 1.0);
///
/// let config = OaConfig::default().with_population_size(4).with_seed(42);
/// let result = OaRunner::run(&graph, "A", "C", &config).unwrap();
///
/// let path = &result.best.path;
/// assert_eq!(graph.label(path[0]), "A");
/// assert_eq!(graph.label(path[path.len() - 1]), "C");
/// assert!(graph.path_cost(path).is_some());
/// ```
pub struct OaRunner;

impl OaRunner {
    /// Runs the Orchard Algorithm from `source` to `target`.
    ///
    /// # Errors
    ///
    /// [`OaError::Unreachable`] when no path exists between the
    /// endpoints (or a label is unknown); nothing is constructed in that
    /// case.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`OaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(
        graph: &WeightedGraph,
        source: &str,
        target: &str,
        config: &OaConfig,
    ) -> Result<OaResult, OaError> {
        Self::run_with_cancel(graph, source, target, config, None)
    }

    /// Runs the Orchard Algorithm with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set, the run stops before
    /// the next generation and returns the best tree found so far.
    pub fn run_with_cancel(
        graph: &WeightedGraph,
        source: &str,
        target: &str,
        config: &OaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<OaResult, OaError> {
        config.validate().expect("invalid OaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let start = Instant::now();

        let unreachable = || OaError::Unreachable {
            from: source.to_string(),
            to: target.to_string(),
        };
        let source_id = graph.node(source).ok_or_else(unreachable)?;
        let target_id = graph.node(target).ok_or_else(unreachable)?;

        // 1. Seed the orchard; Unreachable aborts before any generation.
        let mut orchard = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            orchard.push(seed_tree(graph, source_id, target_id)?);
        }

        log::debug!(
            "orchard seeded: {} trees, {} nodes, {} edges",
            orchard.len(),
            graph.node_count(),
            graph.edge_count()
        );

        let mut best = orchard[0].clone();
        let mut cost_history = Vec::with_capacity(config.growth_years);
        let mut cancelled = false;

        // 2. Generational loop.
        for year in 0..config.growth_years {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Growth phase: perturb every tree, then re-evaluate costs.
            grow(graph, &mut orchard, config.growth, &mut rng);
            recost(graph, &mut orchard, config.parallel);

            // Screening: rank by cost ascending, growth rate descending.
            screen(&mut orchard);

            // Grafting: clone the elite into every strictly worse slot.
            graft(&mut orchard);

            // The elite at this point is the generation's best; the final
            // generation's elite is the returned solution.
            best = orchard[0].clone();
            cost_history.push(best.cost);
            log::debug!("growth year {}: best cost {}", year + 1, best.cost);

            // Replenishment: keep the survivor fraction, refill with
            // fresh shortest-path seeds.
            replenish(graph, &mut orchard, source_id, target_id, config)?;
        }

        Ok(OaResult {
            best_cost: best.cost,
            best,
            generations: cost_history.len(),
            elapsed: start.elapsed(),
            cancelled,
            cost_history,
        })
    }
}

/// Seeds one tree from the baseline shortest path.
fn seed_tree(graph: &WeightedGraph, source: usize, target: usize) -> Result<Tree, OaError> {
    let path = graph
        .shortest_path(source, target)
        .ok_or_else(|| OaError::Unreachable {
            from: graph.label(source).to_string(),
            to: graph.label(target).to_string(),
        })?;
    let cost = cost_or_infinity(graph, &path);
    Ok(Tree::new(path, cost))
}

/// Applies the growth operator to every tree's path.
fn grow(graph: &WeightedGraph, orchard: &mut [Tree], growth: Growth, rng: &mut StdRng) {
    for tree in orchard.iter_mut() {
        tree.path = growth.apply(graph, &tree.path, rng);
    }
}

/// Re-evaluates every tree's cost under the infinite-cost policy.
fn recost(graph: &WeightedGraph, orchard: &mut [Tree], parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        orchard.par_iter_mut().for_each(|tree| {
            tree.cost = cost_or_infinity(graph, &tree.path);
        });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for tree in orchard.iter_mut() {
        tree.cost = cost_or_infinity(graph, &tree.path);
    }
}

/// Ranks the orchard by (cost ascending, growth rate descending).
///
/// The sort is stable, so exact ties on both keys keep their order.
fn screen(orchard: &mut [Tree]) {
    orchard.sort_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                b.growth_rate
                    .partial_cmp(&a.growth_rate)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}

/// Overwrites every tree costing strictly more than the elite with the
/// elite's path and cost. Growth rates are left untouched.
fn graft(orchard: &mut [Tree]) {
    let Some(elite) = orchard.first() else {
        return;
    };
    let elite_path = elite.path.clone();
    let elite_cost = elite.cost;

    for tree in orchard.iter_mut().skip(1) {
        if tree.cost > elite_cost {
            tree.path = elite_path.clone();
            tree.cost = elite_cost;
        }
    }
}

/// Truncates the ranked orchard to the survivor fraction and refills it
/// with fresh shortest-path seeds up to the configured size.
fn replenish(
    graph: &WeightedGraph,
    orchard: &mut Vec<Tree>,
    source: usize,
    target: usize,
    config: &OaConfig,
) -> Result<(), OaError> {
    let survivors = (config.population_size as f64 * config.survivor_ratio).floor() as usize;
    orchard.truncate(survivors);
    while orchard.len() < config.population_size {
        orchard.push(seed_tree(graph, source, target)?);
    }
    Ok(())
}
