use std::error::Error as StdError;

use crate::{
    InvalidArgument,
    optimization::{EvalError, gradient},
};

/// Errors that can occur during gradient ascent.
///
/// Model and problem errors carry the original error, boxed; use
/// `downcast_ref` to recover the concrete type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

impl From<gradient::Error> for Error {
    fn from(err: gradient::Error) -> Self {
        match err {
            gradient::Error::InvalidArgument(e) => Self::InvalidArgument(e),
            gradient::Error::Model(e) => Self::Model(e),
            gradient::Error::Problem(e) => Self::Problem(e),
        }
    }
}
