//! Beetle Antennae Search (BAS) for bounded single-objective optimization.
//!
//! # Algorithm
//!
//! A single "beetle" sits at the best point found so far. Each iteration it
//! picks a random unit direction, evaluates two probes ("antennae") placed
//! symmetrically about its position along that direction, and takes one step
//! toward the probe with the better objective. The step is kept only if it
//! improves on the best point. The step size then shrinks by a constant
//! factor, whether or not the step was kept.
//!
//! ```text
//! d0        = step / c
//! dir       = u / (|u| + eps),               u ~ U[-1, 1]^N
//! left      = clamp(x + d0/2 · dir)
//! right     = clamp(x - d0/2 · dir)
//! candidate = clamp(x - step · sign(f(left) - f(right)) · dir)
//! step      = eta · step
//! ```
//!
//! # When to Use
//!
//! Beetle antennae search is appropriate when:
//! - Derivative information is unavailable or expensive
//! - The problem has box bounds on every variable
//! - A cheap local refinement is enough (it only ever moves one point)
//!
//! # Limitations
//!
//! - **Local search**: It converges to a nearby minimum; the decaying step
//!   size limits how far it can travel (`step / (1 - eta)` in total).
//! - **Single objective**: Problems reporting more than one objective are
//!   rejected before any evaluation.
//! - **Randomized**: Results depend on the random source. Pass a seeded
//!   generator for reproducible runs.
//!
//! # Evaluation accounting
//!
//! Each iteration requests exactly three evaluations: left probe, right probe,
//! candidate. The start point and the candidates are counted in `evals`; the
//! probes are counted separately in `probe_evals`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation, tagged with its [`Role`].
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to give the point a score of `+∞` (useful for error
//! recovery or steering the search away from a region).
//!
//! # Stepping manually
//!
//! [`minimize`] and [`maximize`] run a fixed number of iterations. For full
//! control, build a [`Beetle`] and call [`Beetle::init`] then
//! [`Beetle::iterate`] as often as needed; the [`State`] between calls is
//! owned by the caller.

mod action;
mod beetle;
mod config;
mod direction;
mod error;
mod event;
mod point;
mod rule;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use beetle::{Beetle, Flow, Start};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Role};
pub use point::Point;
pub use rule::{Antennae, UpdateRule};
pub use solution::{Solution, Status};
pub use state::State;

use rand::Rng;

use beetle_core::{Model, Observer, OptimizationProblem};

use crate::optimization::Goal;

use search::search;

/// Finds a minimum of the objective using beetle antennae search.
///
/// Runs [`Config::max_iters`] iterations from `start`.
/// See the [module docs](self) for details on events and observer actions.
///
/// # Errors
///
/// Returns an error if the problem is not single-objective, or if the model
/// or problem fails during evaluation and the observer does not return an
/// action to recover.
pub fn minimize<M, P, R, Obs, const N: usize>(
    model: &M,
    problem: &P,
    start: Start<N>,
    config: &Config,
    rng: &mut R,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, start, config, rng, observer, Goal::Minimize)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the problem is not single-objective, or if the model
/// or problem fails during evaluation.
pub fn minimize_unobserved<M, P, R, const N: usize>(
    model: &M,
    problem: &P,
    start: Start<N>,
    config: &Config,
    rng: &mut R,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng,
{
    minimize(model, problem, start, config, rng, ())
}

/// Finds a maximum of the objective using beetle antennae search.
///
/// Runs [`Config::max_iters`] iterations from `start`.
/// See the [module docs](self) for details on events and observer actions.
///
/// # Errors
///
/// Returns an error if the problem is not single-objective, or if the model
/// or problem fails during evaluation and the observer does not return an
/// action to recover.
pub fn maximize<M, P, R, Obs, const N: usize>(
    model: &M,
    problem: &P,
    start: Start<N>,
    config: &Config,
    rng: &mut R,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, start, config, rng, observer, Goal::Maximize)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the problem is not single-objective, or if the model
/// or problem fails during evaluation.
pub fn maximize_unobserved<M, P, R, const N: usize>(
    model: &M,
    problem: &P,
    start: Start<N>,
    config: &Config,
    rng: &mut R,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng,
{
    maximize(model, problem, start, config, rng, ())
}
