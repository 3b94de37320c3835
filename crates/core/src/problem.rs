use crate::Point;

/// Defines a maximization problem to be solved.
///
/// A maximization problem maps solver variables to a model input,
/// then computes an objective value from the model input and output.
/// Solvers search for the input that maximizes the objective.
///
/// The number of solver variables is the dimension of the [`Point`] the
/// solver starts from; it stays the same for the whole run.
pub trait MaximizationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`,
    /// for example when `x` has a dimension the problem does not accept.
    fn input(&self, x: &Point) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// Solvers search for the input that maximizes this objective.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
