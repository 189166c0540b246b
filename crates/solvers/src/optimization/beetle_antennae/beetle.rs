use rand::Rng;

use beetle_core::{Bounds, Model, Observer, OptimizationProblem, Snapshot};

use crate::optimization::{Goal, evaluate::evaluate};

use super::{
    Action, Antennae, Config, Error, Event, Point, Role, Solution, State, Status, UpdateRule,
    direction,
};

/// Where the search starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start<const N: usize> {
    /// Draw each coordinate uniformly within its bounds.
    Random,

    /// Start at the given point, clamped into bounds.
    At([f64; N]),
}

/// Outcome of initializing or advancing the search by one step.
#[derive(Debug)]
pub enum Flow<I, O, const N: usize> {
    /// The step completed; continue from this state.
    Continue(State<I, O, N>),

    /// An observer asked to stop; this is the state when it asked.
    StopEarly(State<I, O, N>),
}

impl<I, O, const N: usize> Flow<I, O, N> {
    /// Returns the state regardless of whether the search should continue.
    #[must_use]
    pub fn into_state(self) -> State<I, O, N> {
        match self {
            Self::Continue(state) | Self::StopEarly(state) => state,
        }
    }
}

/// A beetle antennae iterator bound to a model and problem.
///
/// The beetle holds everything that stays fixed during a run: the model,
/// the problem and its bounds, the config, the goal, and the update rule.
/// The [`State`] that changes between iterations is owned by the caller and
/// passed through [`Beetle::iterate`] by value.
///
/// # Example
///
/// ```ignore
/// let beetle = Beetle::new(&model, &problem, Config::default(), Goal::Minimize)?;
/// let mut state = beetle.init(Start::Random, &mut rng, &mut ())?.into_state();
/// for _ in 0..50 {
///     state = beetle.iterate(state, &mut rng, &mut ())?.into_state();
/// }
/// println!("best: {:?}", state.best());
/// ```
pub struct Beetle<'a, M, P, const N: usize, U = Antennae> {
    model: &'a M,
    problem: &'a P,
    bounds: [Bounds; N],
    config: Config,
    goal: Goal,
    rule: U,
}

impl<'a, M, P, const N: usize> Beetle<'a, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Creates an iterator using the standard [`Antennae`] rule.
    ///
    /// No evaluations are performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSingleObjective`] if the problem reports an
    /// objective count other than one.
    pub fn new(model: &'a M, problem: &'a P, config: Config, goal: Goal) -> Result<Self, Error> {
        let count = problem.objective_count();
        if count != 1 {
            return Err(Error::NotSingleObjective { count });
        }

        Ok(Self {
            model,
            problem,
            bounds: problem.bounds(),
            config,
            goal,
            rule: Antennae::from(&config),
        })
    }
}

impl<'a, M, P, const N: usize, U> Beetle<'a, M, P, N, U>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    U: UpdateRule<N>,
{
    /// Replaces the update rule.
    #[must_use]
    pub fn with_rule<V: UpdateRule<N>>(self, rule: V) -> Beetle<'a, M, P, N, V> {
        Beetle {
            model: self.model,
            problem: self.problem,
            bounds: self.bounds,
            config: self.config,
            goal: self.goal,
            rule,
        }
    }

    /// Returns the config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the search goal.
    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Returns the bounds read from the problem at construction.
    #[must_use]
    pub fn bounds(&self) -> &[Bounds; N] {
        &self.bounds
    }

    /// Projects `x` onto the bound box.
    #[must_use]
    pub fn clamp(&self, x: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| self.bounds[i].clamp(x[i]))
    }

    /// Evaluates the starting candidate and builds the initial state.
    ///
    /// The observer sees one [`Role::Start`] event. [`Action::StopEarly`]
    /// returns [`Flow::StopEarly`] with the start as best.
    /// [`Action::AssumeWorse`] keeps the start as best but with a score of
    /// `+∞`, so the first finite candidate replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if the start evaluation fails. There is no incumbent
    /// to fall back on, so observer actions cannot recover it.
    pub fn init<R, Obs>(
        &self,
        start: Start<N>,
        rng: &mut R,
        observer: &mut Obs,
    ) -> Result<Flow<M::Input, M::Output, N>, Error>
    where
        R: Rng,
        Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
    {
        let x = match start {
            Start::Random => std::array::from_fn(|i| {
                let bounds = self.bounds[i];
                bounds.clamp(bounds.min() + rng.random::<f64>() * bounds.width())
            }),
            Start::At(x) => self.clamp(&x),
        };

        let eval = match evaluate(self.model, self.problem, x) {
            Ok(eval) => eval,
            Err(error) => {
                Event::<M, P, N>::emit_failure(Role::Start, x, None, &error, observer);
                return Err(error.into());
            }
        };

        let point = Point::from(&eval);
        let event: Event<'_, M, P, N> = Event::Evaluated {
            role: Role::Start,
            point,
            input: &eval.snapshot.input,
            output: &eval.snapshot.output,
            best: None,
        };
        let action = observer.observe(&event);

        let score = match action {
            Some(Action::AssumeWorse) => f64::INFINITY,
            Some(Action::StopEarly) | None => self.goal.score(point.objective),
        };
        tracing::debug!(
            objective = point.objective,
            step = self.config.step(),
            "beetle antennae search initialized"
        );

        let state = State::new(point, score, eval.snapshot, self.config.step());
        match action {
            Some(Action::StopEarly) => Ok(Flow::StopEarly(state)),
            Some(Action::AssumeWorse) | None => Ok(Flow::Continue(state)),
        }
    }

    /// Performs one iteration and returns the next state.
    ///
    /// 1. Sample a unit direction `dir`.
    /// 2. Evaluate the clamped left and right probes from the update rule.
    /// 3. Evaluate the clamped candidate the rule derives from the probe scores.
    /// 4. Accept the candidate only if it scores strictly better than best.
    /// 5. Multiply the step size by `eta`.
    ///
    /// Exactly three evaluations are requested, in the order left, right,
    /// candidate. If the observer stops the search part way, the returned
    /// state has not been decayed and `iters` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if an evaluation fails and the observer does not
    /// return an action for it.
    pub fn iterate<R, Obs>(
        &self,
        mut state: State<M::Input, M::Output, N>,
        rng: &mut R,
        observer: &mut Obs,
    ) -> Result<Flow<M::Input, M::Output, N>, Error>
    where
        R: Rng,
        Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
    {
        let step = state.step_size();
        let x = state.best().x;
        let dir: [f64; N] = direction::sample(rng, self.config.eps());
        let [left_x, right_x] = self.rule.probes(&x, &dir, step).map(|p| self.clamp(&p));

        let mut probe_scores = [f64::INFINITY; 2];
        for (slot, (role, probe_x)) in probe_scores
            .iter_mut()
            .zip([(Role::LeftProbe, left_x), (Role::RightProbe, right_x)])
        {
            state.record_probe_eval();
            *slot = match self.eval_and_observe(role, probe_x, state.best(), observer)? {
                Outcome::Evaluated { score, .. } => score,
                Outcome::AssumeWorse => f64::INFINITY,
                Outcome::StopEarly => return Ok(Flow::StopEarly(state)),
            };
        }
        let [left, right] = probe_scores;
        tracing::trace!(left, right, "probes scored");

        let candidate_x = self.clamp(&self.rule.advance(&x, &dir, step, left, right));
        state.record_eval();
        let outcome = self.eval_and_observe(Role::Candidate, candidate_x, state.best(), observer)?;
        let accepted = match outcome {
            Outcome::Evaluated {
                point,
                score,
                snapshot,
            } => state.maybe_update_best(point, score, snapshot),
            Outcome::AssumeWorse => false,
            Outcome::StopEarly => return Ok(Flow::StopEarly(state)),
        };

        state.decay(self.config.eta());
        tracing::debug!(
            iter = state.iters(),
            step,
            accepted,
            best = state.best().objective,
            "beetle antennae iteration"
        );

        Ok(Flow::Continue(state))
    }

    /// Calls [`Beetle::iterate`] `iterations` times and returns the solution.
    ///
    /// # Errors
    ///
    /// Returns an error if an evaluation fails and the observer does not
    /// return an action for it.
    pub fn run<R, Obs>(
        &self,
        mut state: State<M::Input, M::Output, N>,
        iterations: usize,
        rng: &mut R,
        observer: &mut Obs,
    ) -> Result<Solution<M::Input, M::Output, N>, Error>
    where
        R: Rng,
        Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
    {
        for _ in 0..iterations {
            state = match self.iterate(state, rng, observer)? {
                Flow::Continue(next) => next,
                Flow::StopEarly(stopped) => {
                    return Ok(stopped.into_solution(Status::StoppedByObserver));
                }
            };
        }

        Ok(state.into_solution(Status::MaxIters))
    }

    /// Evaluate at `x`, emit event, and handle observer action.
    fn eval_and_observe<Obs>(
        &self,
        role: Role,
        x: [f64; N],
        best: Point<N>,
        observer: &mut Obs,
    ) -> Result<Outcome<M::Input, M::Output, N>, Error>
    where
        Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
    {
        match evaluate(self.model, self.problem, x) {
            Ok(eval) => {
                let point = Point::from(&eval);
                let event: Event<'_, M, P, N> = Event::Evaluated {
                    role,
                    point,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                    best: Some(best),
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => Ok(Outcome::StopEarly),
                    Some(Action::AssumeWorse) => Ok(Outcome::AssumeWorse),
                    None => Ok(Outcome::Evaluated {
                        point,
                        score: self.goal.score(point.objective),
                        snapshot: eval.snapshot,
                    }),
                }
            }
            Err(error) => {
                let action =
                    Event::<M, P, N>::emit_failure(role, x, Some(best), &error, observer);
                match action {
                    Some(Action::StopEarly) => Ok(Outcome::StopEarly),
                    Some(Action::AssumeWorse) => Ok(Outcome::AssumeWorse),
                    None => Err(error.into()),
                }
            }
        }
    }
}

enum Outcome<I, O, const N: usize> {
    Evaluated {
        point: Point<N>,
        score: f64,
        snapshot: Snapshot<I, O>,
    },
    AssumeWorse,
    StopEarly,
}
