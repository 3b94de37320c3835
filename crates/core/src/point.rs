use std::fmt;
use std::ops::Deref;

use crate::StepIntegrable;

/// The coordinates being optimized.
///
/// A point's dimensionality is fixed when it is built. Every operation that
/// moves a point returns a new one, so the point a solver hands to an
/// observer is never changed behind its back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point(Vec<f64>);

/// Per-coordinate slope estimates, one for each dimension of a [`Point`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient(Vec<f64>);

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns a copy of this point with coordinate `index` shifted by `delta`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dim()`.
    #[must_use]
    pub fn perturbed(&self, index: usize, delta: f64) -> Self {
        let mut coords = self.0.clone();
        coords[index] += delta;
        Self(coords)
    }

    /// Returns the coordinate-wise sum `self + other`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn add(&self, other: &Point) -> Self {
        assert_eq!(self.dim(), other.dim(), "point dimensions must match");
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Returns every coordinate multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|v| factor * v).collect())
    }

    /// Returns the Euclidean distance to `other`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        assert_eq!(self.dim(), other.dim(), "point dimensions must match");
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Consumes the point and returns its coordinates.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Gradient {
    /// Creates a gradient from its partial derivatives.
    #[must_use]
    pub fn new(partials: Vec<f64>) -> Self {
        Self(partials)
    }

    /// Returns the number of partial derivatives.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Consumes the gradient and returns its partial derivatives.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Point {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for Gradient {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self(coords.to_vec())
    }
}

impl From<Vec<f64>> for Gradient {
    fn from(partials: Vec<f64>) -> Self {
        Self(partials)
    }
}

impl FromIterator<f64> for Gradient {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Moves a point along its gradient: `point + gradient * rate`.
///
/// With a positive rate this is one step of gradient ascent.
impl StepIntegrable<f64> for Point {
    type Derivative = Gradient;

    fn step(&self, derivative: Gradient, delta: f64) -> Self {
        assert_eq!(
            self.dim(),
            derivative.dim(),
            "gradient must have one partial per coordinate"
        );
        let direction = Point(derivative.0);
        self.add(&direction.scale(delta))
    }
}

/// Formats as `[v0, v1, ...]` with six decimal places.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v:.6}")?;
        }
        f.write_str("]")
    }
}
