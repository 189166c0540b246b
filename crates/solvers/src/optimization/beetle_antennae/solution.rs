use beetle_core::Snapshot;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran the requested number of iterations.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a beetle antennae search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best decision vector found.
    pub x: [f64; N],

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Completed iterations.
    pub iters: usize,

    /// Evaluations of the start point and of candidates.
    pub evals: usize,

    /// Evaluations of antenna probes.
    pub probe_evals: usize,

    /// Step size the next iteration would have used.
    pub step_size: f64,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    /// Returns every evaluation request made, probes included.
    #[must_use]
    pub fn total_evals(&self) -> usize {
        self.evals + self.probe_evals
    }
}
