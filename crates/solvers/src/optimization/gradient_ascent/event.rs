use std::fmt;

use ascent_core::Point;

/// Event emitted by the gradient ascent solver for each visited point.
///
/// Step 0 is the starting point. The event with `steps_left == 0` is the
/// final point, emitted once after the last step.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// The step number (0 for the start, `steps` for the final point).
    pub step: usize,

    /// The point visited at this step.
    pub point: &'a Point,

    /// The objective at `point`.
    pub objective: f64,

    /// The fixed learning rate of the run.
    pub learning_rate: f64,

    /// Steps still to take after this one.
    pub steps_left: usize,

    /// The model input at `point`.
    pub input: &'a I,

    /// The model output at `point`.
    pub output: &'a O,
}

impl<I, O> Event<'_, I, O> {
    /// Returns `true` for the event reporting the final point.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.steps_left == 0
    }
}

/// Formats the event as one trace line.
///
/// ```text
/// Step  3: Point: [0.976000, 1.464000], f(p): -3.407872, LR (fixed): 0.100000, Steps Left: 2
/// Step  5: Final Point: [1.344640, 2.016960], f(p): -1.395864, LR (fixed): 0.100000
/// ```
impl<I, O> fmt::Display for Event<'_, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.is_final() { "Final Point" } else { "Point" };
        write!(
            f,
            "Step {:>2}: {label}: {}, f(p): {:.6}, LR (fixed): {:.6}",
            self.step, self.point, self.objective, self.learning_rate,
        )?;
        if !self.is_final() {
            write!(f, ", Steps Left: {}", self.steps_left)?;
        }
        Ok(())
    }
}
