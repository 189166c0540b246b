//! Runs beetle antennae search on the Goldstein–Price function with tracing.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=debug cargo run --example trace
//! RUST_LOG=info cargo run --example trace -- 7
//! ```
//!
//! The optional argument is the random seed (default 42). The global minimum
//! is `f(0, -1) = 3`; a single run of this local search may settle elsewhere.

use std::{convert::Infallible, error::Error};

use beetle_core::{Bounds, Model, OptimizationProblem};
use beetle_observers::TraceObserver;
use beetle_solvers::optimization::beetle_antennae::{self, Config, Start};
use rand::{SeedableRng, rngs::StdRng};
use tracing::Level;
use tracing_subscriber::EnvFilter;

struct GoldsteinPrice;

impl Model for GoldsteinPrice {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, &[x, y]: &[f64; 2]) -> Result<f64, Self::Error> {
        let a = 1.0
            + (x + y + 1.0).powi(2)
                * (19.0 - 14.0 * x + 3.0 * x * x - 14.0 * y + 6.0 * x * y + 3.0 * y * y);
        let b = 30.0
            + (2.0 * x - 3.0 * y).powi(2)
                * (18.0 - 32.0 * x + 12.0 * x * x + 48.0 * y - 36.0 * x * y + 27.0 * y * y);
        Ok(a * b)
    }
}

struct Square;

impl OptimizationProblem<2> for Square {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }

    fn bounds(&self) -> [Bounds; 2] {
        [Bounds::new(-2.0, 2.0).expect("valid bounds"); 2]
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let seed = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<u64>)
        .transpose()?
        .unwrap_or(42);

    let config = Config::default();
    let solution = beetle_antennae::minimize(
        &GoldsteinPrice,
        &Square,
        Start::Random,
        &config,
        &mut StdRng::seed_from_u64(seed),
        TraceObserver::new(Level::DEBUG).without_probes(),
    )?;

    tracing::info!(
        x = ?solution.x,
        objective = solution.objective,
        evals = solution.evals,
        probe_evals = solution.probe_evals,
        "search finished"
    );

    Ok(())
}
