//! Simulated Annealing (SA) over a bounded continuous box.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. The objective is **maximized**. Worsening moves are
//! accepted with the Metropolis probability `exp(delta / (k * T))`, and the
//! temperature `T` cools geometrically after every level of `M` evaluations.
//! Candidates are Gaussian perturbations whose spread is the domain width
//! times the current temperature, clamped onto the box.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
pub mod neighbor;
mod runner;
mod types;

pub use config::{validate_bounds, AnnealConfig, Bound, FROZEN_TEMPERATURE};
pub use runner::{metropolis_accept, AnnealResult, AnnealRunner, StopReason};
pub use types::{Fallible, Objective, Point};
