/// The optimization direction.
///
/// Solvers always minimize internally. The goal transforms raw objective
/// values into scores so that one algorithm handles both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Goal {
    /// Minimize the objective.
    #[default]
    Minimize,

    /// Maximize the objective.
    Maximize,
}

impl Goal {
    /// Transforms an objective value into a score where lower is better.
    ///
    /// - [`Goal::Minimize`]: returns the value unchanged
    /// - [`Goal::Maximize`]: negates the value
    #[inline]
    #[must_use]
    pub fn score(self, objective: f64) -> f64 {
        match self {
            Self::Minimize => objective,
            Self::Maximize => -objective,
        }
    }
}
