//! SA execution loop.

use super::config::{AnnealConfig, FROZEN_TEMPERATURE};
use super::neighbor::{generate, uniform_point};
use super::types::{Objective, Point};
use crate::error::AnnealError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, trace};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `max_iterations` evaluations were spent.
    IterationBudget,
    /// Temperature fell below [`FROZEN_TEMPERATURE`].
    Frozen,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best point found. Always inside the configured bounds.
    pub best: Point,

    /// Objective value at `best`.
    pub best_fitness: f64,

    /// Wall-clock time of the run.
    pub elapsed: Duration,

    /// Total number of neighbor evaluations (the initial point excluded).
    pub iterations: usize,

    /// Number of temperature levels executed, i.e. times the schedule cooled.
    pub temperature_levels: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Which stop condition ended the run.
    pub stop_reason: StopReason,

    /// Best fitness sampled at regular intervals. Non-decreasing.
    pub fitness_history: Vec<f64>,
}

/// Executes bounded Simulated Annealing.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{AnnealConfig, AnnealRunner};
///
/// let peak = |x: &[f64]| 1.0 - (x[0] - 0.5).powi(2);
/// let config = AnnealConfig::new([(-2.0, 2.0)])
///     .with_initial_temperature(0.5)
///     .with_max_iterations(5_000)
///     .with_seed(42);
///
/// let result = AnnealRunner::run(&peak, &config).unwrap();
/// assert!((result.best[0] - 0.5).abs() < 0.1);
/// ```
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs SA, seeding from `config.seed` or from the OS when unset.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &AnnealConfig,
    ) -> Result<AnnealResult, AnnealError<O::Error>> {
        Self::run_with_cancel(objective, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is polled before every evaluation; a raised flag ends the
    /// run with [`StopReason::Cancelled`] and the best point so far.
    pub fn run_with_cancel<O: Objective + ?Sized>(
        objective: &O,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, AnnealError<O::Error>> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        anneal(objective, config, &mut rng, cancel.as_deref())
    }

    /// Runs SA drawing every random number from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<O, R>(
        objective: &O,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult, AnnealError<O::Error>>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        anneal(objective, config, rng, None)
    }
}

/// Metropolis criterion in maximization form.
///
/// Improvements (`delta > 0`) are accepted without touching `rng`.
/// Otherwise the move is accepted with probability
/// `exp(delta / (k * temperature))`, which lies in `(0, 1]` for
/// `delta <= 0`. A NaN `delta` is always rejected.
pub fn metropolis_accept<R: Rng + ?Sized>(
    delta: f64,
    k: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    if delta > 0.0 {
        return true;
    }
    let probability = (delta / (k * temperature)).exp();
    rng.random::<f64>() < probability
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

#[instrument(level = "debug", skip_all, fields(dims = config.bounds.len()))]
fn anneal<O, R>(
    objective: &O,
    config: &AnnealConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> Result<AnnealResult, AnnealError<O::Error>>
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let start = Instant::now();
    let bounds = config.bounds.as_slice();
    let evaluate = |point: &[f64]| objective.evaluate(point).map_err(AnnealError::Objective);

    debug!(
        temp0 = config.initial_temperature,
        alpha = config.alpha,
        m = config.iterations_per_temperature,
        k = config.k,
        max_iterations = config.max_iterations,
        "annealing started"
    );

    // Initialize
    let mut current = uniform_point(bounds, rng);
    let mut current_fitness = evaluate(&current)?;
    let mut best = current.clone();
    let mut best_fitness = current_fitness;

    let mut temperature = config.initial_temperature;
    let mut total_iterations = 0usize;
    let mut temperature_levels = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    let history_interval = 100.max(config.iterations_per_temperature);
    let mut fitness_history = vec![best_fitness];

    let stop_reason = loop {
        // The floor is only checked here, never inside a level.
        if total_iterations >= config.max_iterations {
            break StopReason::IterationBudget;
        }
        if temperature < FROZEN_TEMPERATURE {
            break StopReason::Frozen;
        }
        if is_cancelled(cancel) {
            break StopReason::Cancelled;
        }

        for _ in 0..config.iterations_per_temperature {
            if total_iterations >= config.max_iterations || is_cancelled(cancel) {
                break;
            }

            let candidate = generate(&current, bounds, temperature, rng);
            let candidate_fitness = evaluate(&candidate)?;
            let delta = candidate_fitness - current_fitness;

            if delta > 0.0 {
                improving_moves += 1;
            }

            if metropolis_accept(delta, config.k, temperature, rng) {
                current = candidate;
                current_fitness = candidate_fitness;
                accepted_moves += 1;

                if current_fitness > best_fitness {
                    best.clone_from(&current);
                    best_fitness = current_fitness;
                }
            }

            total_iterations += 1;

            if total_iterations.is_multiple_of(history_interval) {
                fitness_history.push(best_fitness);
            }
        }

        trace!(
            step = temperature_levels,
            temperature,
            current_fitness,
            best_fitness,
            "temperature level finished"
        );

        // Geometric cooling, also after a level cut short by the budget.
        temperature *= config.alpha;
        temperature_levels += 1;
    };

    if fitness_history
        .last()
        .is_none_or(|&last| (last - best_fitness).abs() > 1e-15)
    {
        fitness_history.push(best_fitness);
    }

    let elapsed = start.elapsed();
    debug!(
        ?stop_reason,
        iterations = total_iterations,
        temperature_levels,
        best_fitness,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "annealing finished"
    );

    Ok(AnnealResult {
        best,
        best_fitness,
        elapsed,
        iterations: total_iterations,
        temperature_levels,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        stop_reason,
        fitness_history,
    })
}
