//! SA configuration and search-space bounds.

use crate::error::ConfigError;

/// Temperature below which the schedule is considered frozen.
///
/// The floor also keeps `k * temperature` away from zero in the
/// Metropolis exponent.
pub const FROZEN_TEMPERATURE: f64 = 1e-10;

/// Closed interval `[low, high]` for one search dimension.
///
/// With the `serde` feature a bound is written as a `(low, high)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct Bound {
    pub low: f64,
    pub high: f64,
}

impl Bound {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Width of the interval, `high - low`.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `x` lies in the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Hard clamp onto the interval (no reflection, no wraparound).
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.low, self.high)
    }
}

impl From<(f64, f64)> for Bound {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<Bound> for (f64, f64) {
    fn from(b: Bound) -> Self {
        (b.low, b.high)
    }
}

/// Checks that `bounds` is a usable search box.
pub fn validate_bounds(bounds: &[Bound]) -> Result<(), ConfigError> {
    if bounds.is_empty() {
        return Err(ConfigError::EmptyBounds);
    }
    for (dim, b) in bounds.iter().enumerate() {
        if !b.low.is_finite() || !b.high.is_finite() {
            return Err(ConfigError::NonFiniteBound {
                dim,
                low: b.low,
                high: b.high,
            });
        }
        if b.low > b.high {
            return Err(ConfigError::InvertedBound {
                dim,
                low: b.low,
                high: b.high,
            });
        }
        if !b.width().is_finite() {
            return Err(ConfigError::NonFiniteWidth {
                dim,
                low: b.low,
                high: b.high,
            });
        }
    }
    Ok(())
}

/// Configuration for a bounded Simulated Annealing run.
///
/// Cooling is geometric: after every `iterations_per_temperature`
/// evaluations the temperature is multiplied by `alpha`.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::new([(-1.0, 2.0)])
///     .with_initial_temperature(5.0)
///     .with_alpha(0.997)
///     .with_iterations_per_temperature(1200)
///     .with_boltzmann(0.1)
///     .with_max_iterations(50_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Search box, one interval per dimension.
    pub bounds: Vec<Bound>,

    /// Initial temperature. Also the initial perturbation scale.
    #[cfg_attr(feature = "serde", serde(rename = "temp0"))]
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Number of evaluations at each temperature level.
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    pub iterations_per_temperature: usize,

    /// Boltzmann-constant analog in the acceptance exponent `delta / (k * T)`.
    pub k: f64,

    /// Hard cap on total objective evaluations after the initial point.
    #[cfg_attr(feature = "serde", serde(rename = "max_iter_total"))]
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl AnnealConfig {
    pub fn new<B, I>(bounds: I) -> Self
    where
        B: Into<Bound>,
        I: IntoIterator<Item = B>,
    {
        Self {
            bounds: bounds.into_iter().map(Into::into).collect(),
            initial_temperature: 100.0,
            alpha: 0.95,
            iterations_per_temperature: 100,
            k: 1.0,
            max_iterations: 10_000,
            seed: None,
        }
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_boltzmann(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Dimensionality of the search space.
    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bounds(&self.bounds)?;
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        if self.iterations_per_temperature == 0 {
            return Err(ConfigError::ZeroIterationsPerTemperature);
        }
        if !(self.k > 0.0 && self.k.is_finite()) {
            return Err(ConfigError::InvalidBoltzmann(self.k));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterationBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AnnealConfig {
        AnnealConfig::new([(-1.0, 1.0), (0.0, 10.0)])
    }

    #[test]
    fn test_new_defaults() {
        let config = base();
        assert_eq!(config.dimensions(), 2);
        assert_eq!(config.bounds[1], Bound::new(0.0, 10.0));
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert_eq!(config.iterations_per_temperature, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_validate_degenerate_bound_ok() {
        let config = AnnealConfig::new([(3.0, 3.0)]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_bounds() {
        let config = AnnealConfig::new(Vec::<Bound>::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyBounds));
    }

    #[test]
    fn test_validate_inverted_bound() {
        let config = AnnealConfig::new([(0.0, 1.0), (5.0, 4.0)]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBound {
                dim: 1,
                low: 5.0,
                high: 4.0
            })
        );
    }

    #[test]
    fn test_validate_non_finite_bound() {
        let config = AnnealConfig::new([(f64::NEG_INFINITY, 1.0)]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteBound { dim: 0, .. })
        ));
    }

    #[test]
    fn test_validate_overflowing_width() {
        let config = AnnealConfig::new([(0.0, 1.0), (-1e308, 1e308)]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteWidth {
                dim: 1,
                low: -1e308,
                high: 1e308
            })
        );
        assert!(AnnealConfig::new([(-1e307, 1e307)]).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = base().with_initial_temperature(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidTemperature(-1.0)));
        let config = base().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(base().with_alpha(1.0).validate().is_err());
        assert!(base().with_alpha(0.0).validate().is_err());
        assert_eq!(
            base().with_alpha(1.5).validate(),
            Err(ConfigError::InvalidAlpha(1.5))
        );
    }

    #[test]
    fn test_validate_zero_inner_iterations() {
        let config = base().with_iterations_per_temperature(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroIterationsPerTemperature)
        );
    }

    #[test]
    fn test_validate_bad_boltzmann() {
        assert_eq!(
            base().with_boltzmann(0.0).validate(),
            Err(ConfigError::InvalidBoltzmann(0.0))
        );
    }

    #[test]
    fn test_validate_zero_budget() {
        let config = base().with_max_iterations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterationBudget));
    }

    #[test]
    fn test_bound_clamp() {
        let b = Bound::new(-2.0, 3.0);
        assert_eq!(b.clamp(-7.5), -2.0);
        assert_eq!(b.clamp(9.0), 3.0);
        assert_eq!(b.clamp(0.25), 0.25);
        assert!((b.width() - 5.0).abs() < 1e-12);
    }
}
