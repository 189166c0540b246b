use crate::Bounds;

/// Defines an optimization problem to be solved.
///
/// An optimization problem maps solver variables to a model input, then
/// computes an objective value from the model input and output. It also
/// declares the feasible box the solver must stay inside.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 1` represents a scalar optimization problem.
pub trait OptimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;

    /// Returns the closed interval for each solver variable.
    fn bounds(&self) -> [Bounds; N];

    /// Returns the number of objectives the underlying model produces.
    ///
    /// Problems adapted from multi-objective models report their true count
    /// here so that single-objective solvers can refuse them up front.
    /// The default is one.
    fn objective_count(&self) -> usize {
        1
    }
}
