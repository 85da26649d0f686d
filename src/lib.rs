//! Simulated Annealing for bounded continuous maximization.
//!
//! - **Annealing engine** ([`sa::AnnealRunner`]): geometric cooling,
//!   Metropolis acceptance and best-solution tracking over an
//!   N-dimensional box.
//! - **Neighbor generation** ([`sa::neighbor`]): temperature-scaled
//!   Gaussian perturbation, hard-clamped onto the bounds.
//! - **Reference objectives** ([`objectives`]): two 1-D benchmark
//!   landscapes used to validate the annealer.
//!
//! Runs are single-threaded and reproducible: randomness comes from a
//! seed in [`sa::AnnealConfig`] or from a caller-supplied `rand::Rng`.
//! Progress is reported through `tracing`; the crate never installs a
//! subscriber.

pub mod error;
pub mod objectives;
pub mod sa;

pub use error::{AnnealError, ConfigError};
