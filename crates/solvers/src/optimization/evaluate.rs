use thiserror::Error;

use beetle_core::{Model, OptimizationProblem, Snapshot};

/// The result of evaluating an optimization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an optimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an optimization problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// the objective from the input and output. The point is evaluated as given;
/// callers are responsible for keeping it inside the problem bounds.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use beetle_core::Bounds;

    /// Sum of squares over a 2-vector.
    struct Bowl;

    impl Model for Bowl {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok(x[0] * x[0] + x[1] * x[1])
        }
    }

    #[derive(Debug, Error)]
    #[error("negative objective")]
    struct NegativeObjective;

    /// Rejects objectives below a floor.
    struct Floored(f64);

    impl OptimizationProblem<2> for Floored {
        type Input = [f64; 2];
        type Output = f64;
        type Error = NegativeObjective;

        fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
            Ok(*x)
        }

        fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
            if *output < self.0 {
                Err(NegativeObjective)
            } else {
                Ok(*output)
            }
        }

        fn bounds(&self) -> [Bounds; 2] {
            [Bounds::new(-1.0, 1.0).unwrap(); 2]
        }
    }

    #[test]
    fn evaluation_captures_objective_and_snapshot() {
        let eval = evaluate(&Bowl, &Floored(0.0), [3.0, 4.0]).expect("should evaluate");

        assert_eq!(eval.x, [3.0, 4.0]);
        assert_relative_eq!(eval.objective, 25.0);
        assert_eq!(eval.snapshot.input, [3.0, 4.0]);
        assert_relative_eq!(eval.snapshot.output, 25.0);
    }

    #[test]
    fn objective_failure_is_a_problem_error() {
        let result = evaluate(&Bowl, &Floored(1.0), [0.0, 0.0]);

        assert!(matches!(result, Err(EvalError::Problem(NegativeObjective))));
    }
}
