use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during beetle antennae search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("single-objective search requires exactly one objective, problem has {count}")]
    NotSingleObjective { count: usize },

    #[error("model error: {0}")]
    Model(Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(error: EvalError<ME, PE>) -> Self {
        match error {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
