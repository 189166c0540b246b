use crate::optimization::evaluate::Evaluation;

/// A decision vector with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    /// The decision vector.
    pub x: [f64; N],

    /// The objective value at x.
    pub objective: f64,
}

impl<const N: usize> Point<N> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: [f64; N], objective: f64) -> Self {
        Self { x, objective }
    }
}

impl<I, O, const N: usize> From<&Evaluation<I, O, N>> for Point<N> {
    fn from(eval: &Evaluation<I, O, N>) -> Self {
        Self::new(eval.x, eval.objective)
    }
}
