use crate::{InvalidArgument, optimization::gradient::DEFAULT_STEP_SIZE};

/// Configuration for the fixed-step gradient ascent solver.
///
/// Every field is fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    steps: usize,
    learning_rate: f64,
    step_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 0.1, DEFAULT_STEP_SIZE).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated learning rate and step size.
    ///
    /// # Errors
    ///
    /// Returns an error if the learning rate or the finite difference step
    /// size is not a positive finite number.
    pub fn new(steps: usize, learning_rate: f64, step_size: f64) -> Result<Self, InvalidArgument> {
        let learning_rate = InvalidArgument::check_learning_rate(learning_rate)?;
        let step_size = InvalidArgument::check_step_size(step_size)?;

        Ok(Self {
            steps,
            learning_rate,
            step_size,
        })
    }

    /// Creates a config that uses the default finite difference step size.
    ///
    /// # Errors
    ///
    /// Returns an error if the learning rate is not a positive finite number.
    pub fn with_defaults(steps: usize, learning_rate: f64) -> Result<Self, InvalidArgument> {
        Self::new(steps, learning_rate, DEFAULT_STEP_SIZE)
    }

    /// Returns the number of ascent steps to take.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the fixed multiplier applied to the gradient at every step.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the finite difference step size used for gradient estimates.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }
}
