//! Orchard Algorithm (OA) generational search loop.
//!
//! The orchard is a fixed-size population of candidate paths ("trees").
//! Each generation ("growth year") applies, in order:
//!
//! 1. **Growth** — perturb every tree's path with the configured
//!    [`Growth`] operator and re-evaluate its cost
//! 2. **Screening** — rank by cost ascending, growth rate descending
//! 3. **Grafting** — clone the elite (rank 0) into every strictly worse
//!    slot
//! 4. **Replenishment** — truncate to the survivor fraction and refill
//!    with fresh shortest-path seeds
//!
//! The best tree observed at the final generation's grafting step is
//! returned.
//!
//! # Key Types
//!
//! - [`OaConfig`]: Run parameters (population size, growth years,
//!   survivor ratio, operator choice)
//! - [`OaRunner`]: Executes the generational loop
//! - [`OaResult`]: Final result with timing and cost history
//! - [`Tree`]: A candidate path with its cost and growth rate
//! - [`Growth`]: Pluggable perturbation operator
//! - [`RunReport`]: Consumer-facing formatting of a finished run
//!
//! # Reference
//!
//! Kaveh, Mesgari & Saeidian (2023), *Orchard Algorithm (OA): A new
//! meta-heuristic algorithm for solving discrete and continuous
//! optimization problems*, Mathematics and Computers in Simulation 208.

mod config;
mod cost;
mod error;
mod growth;
mod report;
mod runner;
mod types;

pub use config::OaConfig;
pub use cost::{cost_or_infinity, evaluate_path};
pub use error::OaError;
pub use growth::Growth;
pub use report::RunReport;
pub use runner::{OaResult, OaRunner};
pub use types::Tree;
