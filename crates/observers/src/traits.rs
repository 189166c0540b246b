//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written against them keeps working if the event type grows.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use beetle_core::Observer;
//! use beetle_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.objective() <= self.target {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use beetle_core::{Model, OptimizationProblem};

use beetle_solvers::optimization::beetle_antennae;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

// --- HasObjective for beetle_antennae::Event ---

impl<M, P, const N: usize> HasObjective for beetle_antennae::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        beetle_antennae::Event::objective(self).unwrap_or(f64::NAN)
    }
}

// --- Action impls ---

impl CanStopEarly for beetle_antennae::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for beetle_antennae::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use beetle_core::{Bounds, Observer};
    use beetle_solvers::optimization::beetle_antennae::{
        Action, Config, Event, Role, Start, Status,
    };
    use rand::{SeedableRng, rngs::StdRng};

    struct Line;

    impl Model for Line {
        type Input = [f64; 1];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0])
        }
    }

    struct UnitBox;

    impl OptimizationProblem<1> for UnitBox {
        type Input = [f64; 1];
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
            Ok(*x)
        }

        fn objective(&self, _input: &[f64; 1], output: &f64) -> Result<f64, Self::Error> {
            Ok(*output)
        }

        fn bounds(&self) -> [Bounds; 1] {
            [Bounds::new(-1.0, 1.0).unwrap()]
        }
    }

    /// Stops once any evaluation reaches the target objective.
    struct BelowTarget(f64);

    impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for BelowTarget {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.objective() <= self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_beetle() {
        let solution = beetle_antennae::minimize(
            &Line,
            &UnitBox,
            Start::At([1.0]),
            &Config::default(),
            &mut StdRng::seed_from_u64(0),
            BelowTarget(0.5),
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.iters < 100);
    }

    struct FailingLine;

    impl Model for FailingLine {
        type Input = [f64; 1];
        type Output = f64;
        type Error = std::fmt::Error;

        fn call(&self, _x: &[f64; 1]) -> Result<f64, Self::Error> {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn failed_events_report_nan() {
        let error = std::fmt::Error;
        let event: Event<'_, FailingLine, UnitBox, 1> = Event::ModelFailed {
            role: Role::Candidate,
            x: [0.0],
            best: None,
            error: &error,
        };

        assert!(HasObjective::objective(&event).is_nan());
    }

    #[test]
    fn actions_map_to_beetle_variants() {
        assert_eq!(<Action as CanStopEarly>::stop_early(), Action::StopEarly);
        assert_eq!(<Action as CanAssumeWorse>::assume_worse(), Action::AssumeWorse);
    }
}
