//! Error types for annealing runs.

use thiserror::Error;

/// A malformed [`AnnealConfig`](crate::sa::AnnealConfig).
///
/// Returned before the first objective evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("bounds must contain at least one dimension")]
    EmptyBounds,

    #[error("bound {dim} is not finite: ({low}, {high})")]
    NonFiniteBound { dim: usize, low: f64, high: f64 },

    #[error("bound {dim} is inverted: low {low} > high {high}")]
    InvertedBound { dim: usize, low: f64, high: f64 },

    #[error("bound {dim} is too wide: high - low overflows ({low}, {high})")]
    NonFiniteWidth { dim: usize, low: f64, high: f64 },

    #[error("temp0 must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("M (iterations per temperature) must be positive")]
    ZeroIterationsPerTemperature,

    #[error("k must be positive and finite, got {0}")]
    InvalidBoltzmann(f64),

    #[error("max_iter_total must be positive")]
    ZeroIterationBudget,
}

/// Failure of an annealing run.
///
/// `E` is the objective's own error type; it is carried through untouched.
#[derive(Debug, Error)]
pub enum AnnealError<E: std::error::Error + 'static> {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("objective evaluation failed: {0}")]
    Objective(#[source] E),
}

impl<E: std::error::Error + 'static> AnnealError<E> {
    /// Returns the objective's error if that is what stopped the run.
    pub fn into_objective(self) -> Option<E> {
        match self {
            AnnealError::Objective(e) => Some(e),
            AnnealError::Config(_) => None,
        }
    }
}
