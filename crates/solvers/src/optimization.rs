//! Solvers for maximization problems.
//!
//! A [`MaximizationProblem`] maps solver variables `x: Point` to model inputs,
//! calls the model, and extracts a scalar objective. Solvers in this module
//! search for the `x` that maximizes that objective.
//!
//! # Solvers
//!
//! - [`gradient`] — central finite-difference estimate of the objective's
//!   gradient at a point
//! - [`gradient_ascent`] — moves a point along the estimated gradient for a
//!   fixed number of steps at a fixed learning rate
//!
//! [`MaximizationProblem`]: ascent_core::MaximizationProblem

mod evaluate;

#[cfg(test)]
mod test_utils;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod gradient;
pub mod gradient_ascent;
