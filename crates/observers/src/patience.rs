use beetle_core::{Model, Observer, OptimizationProblem};
use beetle_solvers::optimization::beetle_antennae::{Event, Point, Role};

use crate::traits::CanStopEarly;

/// Stops the search once the best point has not changed for `patience`
/// consecutive iterations.
///
/// Progress is read from the incumbent carried by each event, so the
/// observer works for both minimization and maximization.
#[derive(Debug, Clone)]
pub struct Patience<const N: usize> {
    patience: usize,
    stalled: usize,
    last_best: Option<Point<N>>,
}

impl<const N: usize> Patience<N> {
    /// Creates an observer that tolerates `patience` iterations without
    /// improvement.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            stalled: 0,
            last_best: None,
        }
    }

    /// Returns the current count of consecutive non-improving iterations.
    #[must_use]
    pub fn stalled(&self) -> usize {
        self.stalled
    }
}

impl<M, P, A, const N: usize> Observer<Event<'_, M, P, N>, A> for Patience<N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &Event<'_, M, P, N>) -> Option<A> {
        // The left probe opens each iteration and sees the result of the last.
        if event.role() != Role::LeftProbe {
            return None;
        }

        let best = event.best();
        if self.last_best.is_some() && self.last_best == best {
            self.stalled += 1;
        } else {
            self.stalled = 0;
        }
        self.last_best = best;

        (self.stalled >= self.patience).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use beetle_core::Bounds;
    use beetle_solvers::optimization::beetle_antennae::{
        self, Action, Config, Start, Status,
    };
    use rand::{SeedableRng, rngs::StdRng};

    /// Flat everywhere, so no candidate can ever improve.
    struct Plateau;

    impl Model for Plateau {
        type Input = [f64; 1];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, _x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(1.0)
        }
    }

    struct Interval;

    impl OptimizationProblem<1> for Interval {
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

    #[test]
    fn stops_on_a_plateau() {
        let solution = beetle_antennae::minimize(
            &Plateau,
            &Interval,
            Start::At([0.5]),
            &Config::default(),
            &mut StdRng::seed_from_u64(5),
            Patience::<1>::new(3),
        )
        .unwrap();

        // Iteration 1 records the start, iterations 2..=4 see no change.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.x, [0.5]);
    }

    #[test]
    fn improvement_resets_the_count() {
        let mut patience = Patience::<1>::new(2);
        let error = std::fmt::Error;
        let mut probe = |objective: f64| -> Option<Action> {
            let event: Event<'_, FailingPlateau, Interval, 1> = Event::ModelFailed {
                role: Role::LeftProbe,
                x: [0.0],
                best: Some(Point::new([objective], objective)),
                error: &error,
            };
            patience.observe(&event)
        };

        assert_eq!(probe(3.0), None);
        assert_eq!(probe(3.0), None);
        assert_eq!(probe(2.0), None);
        assert_eq!(probe(2.0), None);
        assert_eq!(probe(2.0), Some(Action::StopEarly));
    }

    struct FailingPlateau;

    impl Model for FailingPlateau {
        type Input = [f64; 1];
        type Output = f64;
        type Error = std::fmt::Error;

        fn call(&self, _x: &[f64; 1]) -> Result<f64, Self::Error> {
            Err(std::fmt::Error)
        }
    }
}
