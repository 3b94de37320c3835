//! Central finite-difference gradient estimates.
//!
//! # Algorithm
//!
//! For each coordinate `i` of the point `x`, the objective is evaluated at
//! `x + h·eᵢ` and `x − h·eᵢ` and the partial derivative is estimated as
//!
//! ```text
//! ∂f/∂xᵢ ≈ (f(x + h·eᵢ) − f(x − h·eᵢ)) / (2h)
//! ```
//!
//! Every perturbation starts from the unmodified `x`, so the estimate for one
//! coordinate never sees the shift applied for another. The truncation error
//! is `O(h²)` for smooth objectives.
//!
//! # Cost
//!
//! Exactly `2 × dim` objective evaluations per call. Nothing is cached
//! between calls.
//!
//! # Numerics
//!
//! Plain IEEE double arithmetic. Objectives that are not differentiable, or
//! that return `NaN` or infinities, produce whatever the formula produces; no
//! attempt is made to detect it.

mod error;

pub use error::Error;

use ascent_core::{Gradient, MaximizationProblem, Model, Point};

use crate::InvalidArgument;

use super::evaluate;

/// Step size used when the caller does not choose one.
pub const DEFAULT_STEP_SIZE: f64 = 1e-5;

/// Estimates the gradient of the objective at `x` using central differences.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] without evaluating anything if `x` is
/// empty or `h` is not a positive finite number.
///
/// Returns [`Error::Model`] or [`Error::Problem`] as soon as any evaluation
/// fails; the remaining coordinates are not estimated.
pub fn central_difference<M, P>(
    model: &M,
    problem: &P,
    x: &Point,
    h: f64,
) -> Result<Gradient, Error>
where
    M: Model,
    P: MaximizationProblem<Input = M::Input, Output = M::Output>,
{
    if x.dim() == 0 {
        return Err(InvalidArgument::EmptyPoint.into());
    }
    let h = InvalidArgument::check_step_size(h)?;

    (0..x.dim())
        .map(|i| -> Result<f64, Error> {
            let forward = evaluate(model, problem, x.perturbed(i, h))?;
            let backward = evaluate(model, problem, x.perturbed(i, -h))?;
            Ok((forward.objective - backward.objective) / (2.0 * h))
        })
        .collect()
}

/// Estimates the gradient at `x` with [`DEFAULT_STEP_SIZE`].
///
/// # Errors
///
/// See [`central_difference`].
pub fn central_difference_default<M, P>(
    model: &M,
    problem: &P,
    x: &Point,
) -> Result<Gradient, Error>
where
    M: Model,
    P: MaximizationProblem<Input = M::Input, Output = M::Output>,
{
    central_difference(model, problem, x, DEFAULT_STEP_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use crate::optimization::test_utils::{ArityError, ObjectiveIsOutput, Paraboloid};

    #[test]
    fn matches_analytic_gradient_of_paraboloid() {
        let model = Paraboloid::new([2.0, 3.0]);
        let x = Point::from([0.0, 0.0]);

        let gradient = central_difference_default(&model, &ObjectiveIsOutput, &x).unwrap();

        assert_eq!(gradient.dim(), 2);
        assert_abs_diff_eq!(gradient[0], 4.0, epsilon = 1e-4);
        assert_abs_diff_eq!(gradient[1], 6.0, epsilon = 1e-4);
    }

    #[test]
    fn evaluates_twice_per_coordinate() {
        let model = Paraboloid::new([2.0, 3.0]);

        let x = Point::from([1.0, 1.0]);

        central_difference_default(&model, &ObjectiveIsOutput, &x).unwrap();
        assert_eq!(model.calls(), 4);

        central_difference_default(&model, &ObjectiveIsOutput, &x).unwrap();
        assert_eq!(model.calls(), 8, "nothing is cached between calls");
    }

    /// f(x, y) = x·y, whose gradient (y, x) exposes any leaked perturbation.
    struct Product;

    impl Model for Product {
        type Input = Vec<f64>;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(input[0] * input[1])
        }
    }

    #[test]
    fn perturbations_do_not_leak_between_coordinates() {
        let x = Point::from([3.0, -2.0]);

        let gradient = central_difference(&Product, &ObjectiveIsOutput, &x, 1e-3).unwrap();

        assert_abs_diff_eq!(gradient[0], -2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(gradient[1], 3.0, epsilon = 1e-9);
        assert_eq!(x, Point::from([3.0, -2.0]));
    }

    #[test]
    fn rejects_non_positive_step_before_evaluating() {
        let model = Paraboloid::new([2.0, 3.0]);
        let x = Point::from([0.0, 0.0]);

        for h in [0.0, -1e-5, f64::NAN] {
            let result = central_difference(&model, &ObjectiveIsOutput, &x, h);
            assert!(matches!(
                result,
                Err(Error::InvalidArgument(InvalidArgument::StepSize(_)))
            ));
        }
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn rejects_empty_point_before_evaluating() {
        let model = Paraboloid::new([2.0, 3.0]);

        let result = central_difference_default(&model, &ObjectiveIsOutput, &Point::default());

        assert!(matches!(
            result,
            Err(Error::InvalidArgument(InvalidArgument::EmptyPoint))
        ));
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn model_error_aborts_and_is_passed_through() {
        let model = Paraboloid::new([2.0, 3.0]);

        let point = Point::from([1.0; 3]);

        let result = central_difference_default(&model, &ObjectiveIsOutput, &point);

        let source = match result {
            Err(Error::Model(source)) => source,
            other => panic!("expected a model error, got {other:?}"),
        };
        assert_eq!(
            source.downcast_ref::<ArityError>(),
            Some(&ArityError {
                expected: 2,
                got: 3
            })
        );
        assert_eq!(model.calls(), 1, "first failure stops the estimate");
    }

    /// f(x) = |x|, not differentiable at zero.
    struct Abs;

    impl Model for Abs {
        type Input = Vec<f64>;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(input[0].abs())
        }
    }

    /// f(x) = ln(x), undefined to the left of zero.
    struct Ln;

    impl Model for Ln {
        type Input = Vec<f64>;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(input[0].ln())
        }
    }

    #[test]
    fn numeric_trouble_propagates_silently() {
        let origin = Point::from([0.0]);

        let kink = central_difference_default(&Abs, &ObjectiveIsOutput, &origin).unwrap();
        assert_abs_diff_eq!(kink[0], 0.0);

        let undefined = central_difference_default(&Ln, &ObjectiveIsOutput, &origin).unwrap();
        assert!(undefined[0].is_nan());
    }

    proptest! {
        #[test]
        fn paraboloid_gradient_within_tolerance(
            x in -10.0..10.0_f64,
            y in -10.0..10.0_f64,
            a in -5.0..5.0_f64,
            b in -5.0..5.0_f64,
        ) {
            let model = Paraboloid::new([a, b]);
            let point = Point::from([x, y]);

            let gradient = central_difference_default(&model, &ObjectiveIsOutput, &point).unwrap();
            let expected = model.analytic_gradient(&point);

            prop_assert!((gradient[0] - expected[0]).abs() < 1e-4);
            prop_assert!((gradient[1] - expected[1]).abs() < 1e-4);
        }

        #[test]
        fn non_positive_step_always_rejected(
            x in -10.0..10.0_f64,
            y in -10.0..10.0_f64,
            h in -1.0..0.0_f64,
        ) {
            let model = Paraboloid::new([2.0, 3.0]);

            let result = central_difference(&model, &ObjectiveIsOutput, &Point::from([x, y]), h);

            prop_assert!(matches!(
                result,
                Err(Error::InvalidArgument(InvalidArgument::StepSize(_)))
            ));
            prop_assert_eq!(model.calls(), 0);
        }
    }
}
