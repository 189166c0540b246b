/// Actions an observer can take during beetle antennae search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,

    /// Treat this point as worse than any other point.
    ///
    /// The point's score becomes `+∞`. For a probe this steers the move away
    /// from that side (a tie if both probes are marked). For a candidate it
    /// means rejection. The evaluation (if successful) is never considered
    /// for the best solution.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors when domain knowledge suggests
    ///   the failed region is suboptimal but the search should continue.
    /// - Steering the search away from a region even when evaluation succeeded.
    AssumeWorse,
}
