use rand::Rng;

use beetle_core::{Model, Observer, OptimizationProblem};

use crate::optimization::Goal;

use super::{Action, Beetle, Config, Error, Event, Flow, Solution, Start, Status};

/// Core driver shared by minimization and maximization.
///
/// Builds a [`Beetle`] for `goal`, initializes from `start`, then runs
/// `config.max_iters()` iterations.
pub(super) fn search<M, P, R, Obs, const N: usize>(
    model: &M,
    problem: &P,
    start: Start<N>,
    config: &Config,
    rng: &mut R,
    mut observer: Obs,
    goal: Goal,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let beetle = Beetle::new(model, problem, *config, goal)?;

    let state = match beetle.init(start, rng, &mut observer)? {
        Flow::Continue(state) => state,
        Flow::StopEarly(state) => return Ok(state.into_solution(Status::StoppedByObserver)),
    };

    beetle.run(state, config.max_iters(), rng, &mut observer)
}
