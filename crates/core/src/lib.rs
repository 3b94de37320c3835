//! Core traits and types for fixed-step gradient ascent.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`MaximizationProblem`] — adapts a [`Point`] to model input and extracts
//!   the objective to maximize from the model output
//! - [`Point`] and [`Gradient`] — the coordinates being optimized and the
//!   per-coordinate slope estimate used to move them

mod model;
mod observer;
mod point;
mod problem;
mod step;

pub use observer::Observer;
pub use point::{Gradient, Point};
pub use problem::MaximizationProblem;
pub use step::StepIntegrable;
pub use {model::Model, model::Snapshot};
