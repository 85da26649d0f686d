//! Objective contract for Simulated Annealing.

use std::convert::Infallible;

/// A point in the search space, one coordinate per dimension.
pub type Point = Vec<f64>;

/// A function to be **maximized** over a bounded box.
///
/// The runner handles temperature management, neighbor generation and the
/// acceptance criterion; the objective only scores points. It should be a
/// pure function of its input, otherwise runs are not reproducible.
///
/// Any `Fn(&[f64]) -> f64` closure is an infallible objective. Wrap a
/// closure returning `Result` in [`Fallible`] to surface its errors.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::Objective;
///
/// let sphere = |x: &[f64]| -x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), Ok(-5.0));
/// ```
pub trait Objective {
    /// Error raised by an evaluation. Propagated unchanged by the runner.
    type Error: std::error::Error + 'static;

    /// Fitness of `point`. Higher is better.
    fn evaluate(&self, point: &[f64]) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, point: &[f64]) -> Result<f64, Infallible> {
        Ok(self(point))
    }
}

/// Adapter for objectives that can fail.
///
/// ```
/// use u_anneal::sa::{Fallible, Objective};
/// use std::num::ParseFloatError;
///
/// let obj = Fallible(|x: &[f64]| -> Result<f64, ParseFloatError> { Ok(x[0]) });
/// assert_eq!(obj.evaluate(&[4.0]), Ok(4.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: std::error::Error + 'static,
{
    type Error = E;

    fn evaluate(&self, point: &[f64]) -> Result<f64, E> {
        (self.0)(point)
    }
}
