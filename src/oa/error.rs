//! Error kinds for an Orchard Algorithm run.
//!
//! Malformed edge records are not represented here: the loader absorbs
//! them locally as a skip count (see `graph::loader`).

/// A fatal condition in an Orchard Algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OaError {
    /// No path exists between source and target, so no tree can be
    /// seeded. Raised at initialization, before any generation executes.
    #[error("no path exists between source '{from}' and target '{to}'")]
    Unreachable {
        /// Source node label.
        from: String,
        /// Target node label.
        to: String,
    },

    /// A path has no edge for some consecutive node pair.
    ///
    /// Only the one-shot evaluator [`evaluate_path`](super::evaluate_path)
    /// raises this; inside the generation loop disconnected paths are
    /// costed as `f64::INFINITY` instead (see
    /// [`cost_or_infinity`](super::cost_or_infinity)).
    #[error("path has no edge between '{from}' and '{to}'")]
    DisconnectedPath {
        /// Label of the first node of the offending pair.
        from: String,
        /// Label of the second node of the offending pair.
        to: String,
    },
}
