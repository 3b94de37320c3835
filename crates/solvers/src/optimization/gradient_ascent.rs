//! Fixed-step gradient ascent.
//!
//! # Algorithm
//!
//! Starting from `x₀`, each step estimates the gradient with
//! [`central_difference`] and moves uphill by a fixed fraction of it:
//!
//! ```text
//! xₖ₊₁ = xₖ + learning_rate · ∇f(xₖ)
//! ```
//!
//! The run always takes exactly [`Config::steps`] steps. There is no
//! convergence test, no line search, and the learning rate never changes.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per visited point, before moving away from
//! it: steps `0..steps` carry the number of steps still to take, and the last
//! event (step `steps`) is the final point. Events are for inspection only.
//! The observer's action type is [`Infallible`], so it cannot change the run.
//!
//! An [`Event`] formats as one line of the human-readable trace; see
//! [`Event`]'s `Display` impl.
//!
//! [`central_difference`]: super::gradient::central_difference

mod config;
mod error;
mod event;
mod solution;
mod state;


pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use std::convert::Infallible;

use ascent_core::{MaximizationProblem, Model, Observer, Point, StepIntegrable};

use crate::InvalidArgument;

use super::{evaluate, gradient::central_difference};

use state::State;

/// Climbs the objective for a fixed number of steps from `start`.
///
/// The observer receives an [`Event`] for every visited point, including the
/// start and the final point.
///
/// A run with zero steps evaluates `start` once, emits one event, and returns
/// `start` unchanged. A run with zero steps from an empty point returns the
/// empty point without evaluating anything.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `start` is empty and at least one
/// step was requested.
///
/// Returns [`Error::Model`] or [`Error::Problem`] as soon as any evaluation
/// fails, whether for the trace or for a gradient estimate. The remaining
/// steps are not taken and no partial result is returned.
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    start: Point,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MaximizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Infallible>,
{
    if start.dim() == 0 {
        return match config.steps() {
            0 => Ok(Solution::empty()),
            steps => Err(InvalidArgument::EmptyStart { steps }.into()),
        };
    }

    let mut state = State::new(evaluate(model, problem, start)?, config);

    while !state.is_done() {
        state.emit(&mut observer);

        let gradient = central_difference(model, problem, state.point(), config.step_size())?;
        let next = state.point().step(gradient, config.learning_rate());

        state.advance(evaluate(model, problem, next)?);
    }

    state.emit(&mut observer);
    Ok(state.into_solution())
}

/// Climbs the objective for a fixed number of steps without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`maximize`].
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: Point,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MaximizationProblem<Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, start, config, ())
}
