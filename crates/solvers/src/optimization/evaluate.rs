use thiserror::Error;

use ascent_core::{MaximizationProblem, Model, Point, Snapshot};

/// The result of evaluating a maximization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: Point,

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a maximization problem.
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
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as MaximizationProblem>::Error>,
>;

/// Evaluates the model in the context of a maximization problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// the objective from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: Point) -> EvaluateResult<M, P>
where
    M: Model,
    P: MaximizationProblem<Input = M::Input, Output = M::Output>,
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
