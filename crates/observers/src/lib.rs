//! Reusable observers for gradient ascent runs.
//!
//! This crate provides [`Observer`] implementations that sit outside the
//! solvers and only watch them.
//!
//! - [`TraceObserver`] — writes one line per event to any [`std::io::Write`]
//!   sink, producing the human-readable step trace
//!
//! [`Observer`]: ascent_core::Observer

mod trace;

pub use trace::TraceObserver;
