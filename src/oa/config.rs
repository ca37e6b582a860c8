//! Orchard Algorithm configuration.

use super::growth::Growth;

/// Configuration parameters for an Orchard Algorithm run.
///
/// # Defaults
///
/// Defaults follow the reference parameterization: 50 trees, 10 growth
/// years, survivor ratio 0.7, growth weight 0.3.
///
/// ```
/// use orchard_path::oa::OaConfig;
///
/// let config = OaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.growth_years, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use orchard_path::oa::{Growth, OaConfig};
///
/// let config = OaConfig::default()
///     .with_population_size(100)
///     .with_growth_years(25)
///     .with_survivor_ratio(0.5)
///     .with_growth(Growth::Shuffle)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OaConfig {
    /// Number of trees in the orchard. Constant across all generations.
    pub population_size: usize,

    /// Number of generations ("growth years") to execute.
    pub growth_years: usize,

    /// Fraction of the ranked orchard kept at replenishment, in (0, 1].
    ///
    /// Each generation keeps the best `floor(population_size *
    /// survivor_ratio)` trees and refills the rest with fresh
    /// shortest-path seeds.
    pub survivor_ratio: f64,

    /// Reserved weighting input for the growth-rate ranking key.
    ///
    /// Screening currently uses the growth rate only as a descending
    /// secondary key; this weight does not enter the comparison.
    pub growth_weight: f64,

    /// Perturbation operator applied in the growth phase.
    pub growth: Growth,

    /// Whether to re-evaluate path costs in parallel.
    ///
    /// Only effective with the `parallel` cargo feature; perturbation
    /// itself stays sequential so a seeded run is reproducible.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for OaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            growth_years: 10,
            survivor_ratio: 0.7,
            growth_weight: 0.3,
            growth: Growth::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl OaConfig {
    /// Sets the orchard size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of growth years.
    pub fn with_growth_years(mut self, n: usize) -> Self {
        self.growth_years = n;
        self
    }

    /// Sets the survivor ratio.
    pub fn with_survivor_ratio(mut self, ratio: f64) -> Self {
        self.survivor_ratio = ratio;
        self
    }

    /// Sets the reserved growth-rate weight.
    pub fn with_growth_weight(mut self, weight: f64) -> Self {
        self.growth_weight = weight;
        self
    }

    /// Sets the growth operator.
    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Enables or disables parallel cost re-evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.growth_years == 0 {
            return Err("growth_years must be at least 1".into());
        }
        if !(self.survivor_ratio > 0.0 && self.survivor_ratio <= 1.0) {
            return Err("survivor_ratio must be in (0, 1]".into());
        }
        if !self.growth_weight.is_finite() {
            return Err("growth_weight must be finite".into());
        }
        Ok(())
    }
}
