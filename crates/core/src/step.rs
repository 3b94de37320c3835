/// A trait for types that can be moved along a derivative.
///
/// Implementing this trait lets a solver advance a value by
/// `derivative * delta` without knowing how the value stores its
/// coordinates. For gradient ascent the value is a [`Point`], the derivative
/// is its [`Gradient`], and `delta` is the learning rate.
///
/// [`Point`]: crate::Point
/// [`Gradient`]: crate::Gradient
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}
