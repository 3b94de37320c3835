use std::convert::Infallible;

use ascent_core::{Observer, Point};

use crate::optimization::Evaluation;

use super::{Config, Event, Solution};

/// The state of one ascent run.
///
/// Holds the evaluation at the current point and counts steps down to zero.
/// The learning rate is copied from the run's [`Config`] and never changes.
pub(super) struct State<I, O> {
    current: Evaluation<I, O>,
    step: usize,
    steps_left: usize,
    learning_rate: f64,
}

impl<I, O> State<I, O> {
    pub(super) fn new(start: Evaluation<I, O>, config: &Config) -> Self {
        Self {
            current: start,
            step: 0,
            steps_left: config.steps(),
            learning_rate: config.learning_rate(),
        }
    }

    pub(super) fn point(&self) -> &Point {
        &self.current.x
    }

    pub(super) fn is_done(&self) -> bool {
        self.steps_left == 0
    }

    /// Moves to the next point and uses up one step.
    pub(super) fn advance(&mut self, next: Evaluation<I, O>) {
        debug_assert!(!self.is_done(), "no steps left to take");
        debug_assert_eq!(
            next.x.dim(),
            self.current.x.dim(),
            "dimension changed mid-run"
        );
        self.current = next;
        self.step += 1;
        self.steps_left -= 1;
    }

    /// Reports the current point to the observer.
    pub(super) fn emit<Obs>(&self, observer: &mut Obs)
    where
        Obs: for<'a> Observer<Event<'a, I, O>, Infallible>,
    {
        let event = Event {
            step: self.step,
            point: &self.current.x,
            objective: self.current.objective,
            learning_rate: self.learning_rate,
            steps_left: self.steps_left,
            input: &self.current.snapshot.input,
            output: &self.current.snapshot.output,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }
    }

    pub(super) fn into_solution(self) -> Solution<I, O> {
        Solution {
            point: self.current.x,
            objective: self.current.objective,
            snapshot: Some(self.current.snapshot),
            steps: self.step,
        }
    }
}
