//! Numerical solvers for gradient ascent.
//!
//! - [`optimization::gradient`] — central finite-difference gradient estimates
//! - [`optimization::gradient_ascent`] — fixed-step, fixed-rate gradient ascent
//!
//! Both solvers reject bad arguments with [`InvalidArgument`] before they
//! evaluate anything.

mod invalid_argument;

pub mod optimization;

pub use invalid_argument::InvalidArgument;
