//! Shared fixtures for optimization solver tests.

use std::{cell::Cell, convert::Infallible};

use thiserror::Error;

use ascent_core::{MaximizationProblem, Model, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} variables, got {got}")]
pub(crate) struct ArityError {
    pub(crate) expected: usize,
    pub(crate) got: usize,
}

/// f(x, y) = -((x - a)² + (y - b)²), with its maximum of zero at (a, b).
///
/// Counts every call so tests can check how often a solver evaluates it.
pub(crate) struct Paraboloid {
    peak: [f64; 2],
    calls: Cell<usize>,
}

impl Paraboloid {
    pub(crate) fn new(peak: [f64; 2]) -> Self {
        Self {
            peak,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    /// The exact gradient at `x`.
    pub(crate) fn analytic_gradient(&self, x: &[f64]) -> [f64; 2] {
        let [a, b] = self.peak;
        [-2.0 * (x[0] - a), -2.0 * (x[1] - b)]
    }
}

impl Model for Paraboloid {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = ArityError;

    fn call(&self, input: &Vec<f64>) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);

        let [x, y] = input[..] else {
            return Err(ArityError {
                expected: 2,
                got: input.len(),
            });
        };
        let [a, b] = self.peak;
        Ok(-((x - a).powi(2) + (y - b).powi(2)))
    }
}

/// Passes the coordinates through and uses the model output as the objective.
pub(crate) struct ObjectiveIsOutput;

impl MaximizationProblem for ObjectiveIsOutput {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &Point) -> Result<Vec<f64>, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
