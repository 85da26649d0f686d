//! Runs the two reference experiments and prints a summary line for each.
//!
//! ```text
//! cargo run --example scenarios
//! RUST_LOG=u_anneal=debug cargo run --example scenarios
//! ```

use tracing_subscriber::EnvFilter;
use u_anneal::objectives::{DampedOscillation, TwinPeak};
use u_anneal::sa::{AnnealConfig, AnnealResult, AnnealRunner, Objective};
use u_anneal::AnnealError;

fn twin_peak_config() -> AnnealConfig {
    AnnealConfig::new([(-150.0, 150.0)])
        .with_initial_temperature(500.0)
        .with_alpha(0.997)
        .with_iterations_per_temperature(3000)
        .with_boltzmann(0.1)
        .with_max_iterations(50_000)
}

fn damped_oscillation_config() -> AnnealConfig {
    AnnealConfig::new([(-1.0, 2.0)])
        .with_initial_temperature(5.0)
        .with_alpha(0.997)
        .with_iterations_per_temperature(1200)
        .with_boltzmann(0.1)
        .with_max_iterations(50_000)
}

fn report(result: &AnnealResult) {
    println!(
        "Finished after {} iterations in {:.4} s ({:?})",
        result.iterations,
        result.elapsed.as_secs_f64(),
        result.stop_reason
    );
    println!("Best point: {:?}, value: {:.6}", result.best, result.best_fitness);
}

fn run<O: Objective>(
    title: &str,
    objective: &O,
    config: &AnnealConfig,
) -> Result<(), AnnealError<O::Error>> {
    println!("--- {title} ---");
    let result = AnnealRunner::run(objective, config)?;
    report(&result);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // An optional seed makes both runs reproducible.
    let seed = std::env::args().nth(1).map(|s| s.parse::<u64>()).transpose()?;
    let seeded = |config: AnnealConfig| match seed {
        Some(s) => config.with_seed(s),
        None => config,
    };

    run(
        "Twin peak: 10 - 2|x + 100|",
        &TwinPeak,
        &seeded(twin_peak_config()),
    )?;
    println!();
    run(
        "Damped oscillation: x sin(10 pi x) + 1",
        &DampedOscillation,
        &seeded(damped_oscillation_config()),
    )?;
    Ok(())
}
