use beetle_core::Snapshot;

use super::{Point, Solution, Status};

/// Search state at an iteration boundary.
///
/// Holds the incumbent best candidate, the current step size, and the
/// evaluation counters. The caller owns the state and hands it to
/// [`Beetle::iterate`](super::Beetle::iterate), which returns the next one.
///
/// The best score is non-increasing for the lifetime of the state: a
/// candidate only replaces the incumbent if it scores strictly lower.
#[derive(Debug, Clone)]
pub struct State<I, O, const N: usize> {
    best: Point<N>,
    best_score: f64,
    best_snapshot: Snapshot<I, O>,
    step_size: f64,
    evals: usize,
    probe_evals: usize,
    iters: usize,
}

impl<I, O, const N: usize> State<I, O, N> {
    /// Starts a search from an evaluated candidate.
    ///
    /// `score` is the goal-transformed objective used for comparisons.
    /// The start evaluation counts toward `evals`.
    pub(super) fn new(best: Point<N>, score: f64, snapshot: Snapshot<I, O>, step: f64) -> Self {
        Self {
            best,
            best_score: score,
            best_snapshot: snapshot,
            step_size: step,
            evals: 1,
            probe_evals: 0,
            iters: 0,
        }
    }

    /// Returns the incumbent best point.
    #[must_use]
    pub fn best(&self) -> Point<N> {
        self.best
    }

    /// Returns the score of the incumbent (lower is better).
    ///
    /// This is the objective transformed by the search goal, or `+∞` if an
    /// observer marked the start point as worse.
    #[must_use]
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Returns the snapshot at the incumbent best point.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<I, O> {
        &self.best_snapshot
    }

    /// Returns the step size the next iteration will use.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the number of start and candidate evaluations.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }

    /// Returns the number of probe evaluations.
    #[must_use]
    pub fn probe_evals(&self) -> usize {
        self.probe_evals
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }

    pub(super) fn record_probe_eval(&mut self) {
        self.probe_evals += 1;
    }

    pub(super) fn record_eval(&mut self) {
        self.evals += 1;
    }

    /// Replaces the incumbent if `score` is strictly lower.
    ///
    /// Returns true if the point was accepted.
    pub(super) fn maybe_update_best(
        &mut self,
        point: Point<N>,
        score: f64,
        snapshot: Snapshot<I, O>,
    ) -> bool {
        if score < self.best_score {
            self.best = point;
            self.best_score = score;
            self.best_snapshot = snapshot;
            true
        } else {
            false
        }
    }

    /// Shrinks the step by `eta` and closes out the iteration.
    pub(super) fn decay(&mut self, eta: f64) {
        self.step_size *= eta;
        self.iters += 1;
    }

    pub(super) fn into_solution(self, status: Status) -> Solution<I, O, N> {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            snapshot: self.best_snapshot,
            iters: self.iters,
            evals: self.evals,
            probe_evals: self.probe_evals,
            step_size: self.step_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn snap() -> Snapshot<(), ()> {
        Snapshot::new((), ())
    }

    fn state() -> State<(), (), 1> {
        State::new(Point::new([2.0], 4.0), 4.0, snap(), 1.0)
    }

    #[test]
    fn new_counts_the_start_evaluation() {
        let state = state();

        assert_eq!(state.evals(), 1);
        assert_eq!(state.probe_evals(), 0);
        assert_eq!(state.iters(), 0);
        assert_relative_eq!(state.step_size(), 1.0);
    }

    #[test]
    fn only_strict_improvements_replace_best() {
        let mut state = state();

        assert!(!state.maybe_update_best(Point::new([-2.0], 4.0), 4.0, snap()));
        assert!(!state.maybe_update_best(Point::new([3.0], 9.0), 9.0, snap()));
        assert_eq!(state.best().x, [2.0]);

        assert!(state.maybe_update_best(Point::new([1.0], 1.0), 1.0, snap()));
        assert_eq!(state.best().x, [1.0]);
        assert_relative_eq!(state.best_score(), 1.0);
    }

    #[test]
    fn nan_score_never_replaces_best() {
        let mut state = state();

        assert!(!state.maybe_update_best(Point::new([0.0], f64::NAN), f64::NAN, snap()));
        assert_eq!(state.best().x, [2.0]);
    }

    #[test]
    fn decay_is_geometric() {
        let mut state = state();

        state.decay(0.5);
        state.decay(0.5);
        state.decay(0.5);

        assert_relative_eq!(state.step_size(), 0.125);
        assert_eq!(state.iters(), 3);
    }

    #[test]
    fn solution_carries_counters() {
        let mut state = state();
        state.record_probe_eval();
        state.record_probe_eval();
        state.record_eval();
        state.decay(0.9);

        let solution = state.into_solution(Status::MaxIters);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.evals, 2);
        assert_eq!(solution.probe_evals, 2);
        assert_eq!(solution.total_evals(), 4);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.step_size, 0.9);
    }
}
