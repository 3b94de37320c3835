use thiserror::Error;

/// Arguments a solver refuses before doing any work.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    /// A gradient was requested at a point with no coordinates.
    #[error("point must have at least one coordinate")]
    EmptyPoint,

    /// An ascent with steps to take was started from a point with no coordinates.
    #[error("starting point is empty but {steps} steps were requested")]
    EmptyStart { steps: usize },

    /// The finite difference step size was not a positive finite number.
    #[error("finite difference step size must be finite and positive, got {0}")]
    StepSize(f64),

    /// The learning rate was not a positive finite number.
    #[error("learning rate must be finite and positive, got {0}")]
    LearningRate(f64),
}

impl InvalidArgument {
    /// Checks that a finite difference step size is finite and positive.
    pub(crate) fn check_step_size(h: f64) -> Result<f64, Self> {
        if h.is_finite() && h > 0.0 {
            Ok(h)
        } else {
            Err(Self::StepSize(h))
        }
    }

    /// Checks that a learning rate is finite and positive.
    pub(crate) fn check_learning_rate(rate: f64) -> Result<f64, Self> {
        if rate.is_finite() && rate > 0.0 {
            Ok(rate)
        } else {
            Err(Self::LearningRate(rate))
        }
    }
}
