//! Solvers that minimize or maximize an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective
//! inside the box declared by [`OptimizationProblem::bounds`].
//!
//! # Solvers
//!
//! - [`beetle_antennae`] — derivative-free local search that senses a descent
//!   direction from two symmetric probes per iteration
//!
//! [`OptimizationProblem`]: beetle_core::OptimizationProblem
//! [`OptimizationProblem::bounds`]: beetle_core::OptimizationProblem::bounds

mod evaluate;
mod goal;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use goal::Goal;

pub mod beetle_antennae;
