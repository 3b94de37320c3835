use ascent_core::{Point, Snapshot};

/// The result of a gradient ascent run.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// The point reached after the last step.
    pub point: Point,

    /// Objective value at `point`.
    ///
    /// `NaN` for a zero-step run from an empty point, which evaluates nothing.
    pub objective: f64,

    /// Snapshot at `point`.
    ///
    /// `None` only for a zero-step run from an empty point.
    pub snapshot: Option<Snapshot<I, O>>,

    /// Number of ascent steps taken.
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    /// The result of a zero-step run from an empty point.
    pub(super) fn empty() -> Self {
        Self {
            point: Point::default(),
            objective: f64::NAN,
            snapshot: None,
            steps: 0,
        }
    }
}
