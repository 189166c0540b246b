use beetle_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::EvalError;

use super::{Action, Point};

/// Which evaluation within the search an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The starting candidate, evaluated once during initialization.
    Start,

    /// The probe displaced along `+dir`.
    LeftProbe,

    /// The probe displaced along `-dir`.
    RightProbe,

    /// The candidate that may replace the current best.
    Candidate,
}

impl Role {
    /// Returns true for the two antenna probes.
    #[must_use]
    pub fn is_probe(self) -> bool {
        matches!(self, Self::LeftProbe | Self::RightProbe)
    }
}

/// Events emitted by the beetle antennae solver.
///
/// One event is emitted per evaluation request, in the fixed order
/// `Start`, then `LeftProbe`, `RightProbe`, `Candidate` for every iteration.
/// Each event carries `best`, the incumbent at the time of the evaluation
/// (`None` only for the start point).
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation.
    Evaluated {
        /// What this evaluation is for.
        role: Role,

        /// The evaluated point (x and objective).
        point: Point<N>,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,

        /// The incumbent best point.
        best: Option<Point<N>>,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// What this evaluation was for.
        role: Role,

        /// The decision vector where evaluation failed.
        x: [f64; N],

        /// The incumbent best point.
        best: Option<Point<N>>,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// What this evaluation was for.
        role: Role,

        /// The decision vector where evaluation failed.
        x: [f64; N],

        /// The incumbent best point.
        best: Option<Point<N>>,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the role of the evaluation.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Evaluated { role, .. }
            | Self::ModelFailed { role, .. }
            | Self::ProblemFailed { role, .. } => *role,
        }
    }

    /// Returns the decision vector that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the evaluated objective, or `None` if evaluation failed.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Evaluated { point, .. } => Some(point.objective),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Returns the incumbent best point.
    #[must_use]
    pub fn best(&self) -> Option<Point<N>> {
        match self {
            Self::Evaluated { best, .. }
            | Self::ModelFailed { best, .. }
            | Self::ProblemFailed { best, .. } => *best,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        role: Role,
        x: [f64; N],
        best: Option<Point<N>>,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    role,
                    x,
                    best,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    role,
                    x,
                    best,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
