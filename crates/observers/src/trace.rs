//! Line-per-event trace observer.
//!
//! See [`TraceObserver`] for usage.

use std::{fmt::Display, io};

use ascent_core::Observer;

/// An observer that writes each event's `Display` output as one line.
///
/// Works with any event type that implements [`Display`], such as
/// `gradient_ascent::Event`, whose lines form the step trace:
///
/// ```text
/// Step  0: Point: [0.000000, 0.000000], f(p): -13.000000, LR (fixed): 0.100000, Steps Left: 5
/// ```
///
/// Tracing never steers the solver: the observer always returns `None`. If
/// the sink fails, the first error is kept, later events are dropped, and
/// [`finish`][TraceObserver::finish] reports the error.
///
/// # Example
///
/// ```ignore
/// let mut trace = TraceObserver::new(std::io::stdout());
/// gradient_ascent::maximize(&model, &problem, start, &config, &mut trace)?;
/// trace.finish()?;
/// ```
#[derive(Debug)]
pub struct TraceObserver<W> {
    sink: W,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: io::Write> TraceObserver<W> {
    /// Creates a trace observer that writes to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            lines: 0,
            error: None,
        }
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Writes a single line, unless an earlier write already failed.
    pub fn record(&mut self, line: impl Display) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.sink, "{line}") {
            Ok(()) => self.lines += 1,
            Err(err) => self.error = Some(err),
        }
    }

    /// Flushes the sink and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error the sink reported while tracing, or the error
    /// from the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}

impl<E, A, W> Observer<E, A> for TraceObserver<W>
where
    E: Display,
    W: io::Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut TraceObserver<W>` to be passed to solvers that take an
/// observer by value, so the caller can still call
/// [`finish`][TraceObserver::finish] afterward.
impl<E, A, W> Observer<E, A> for &mut TraceObserver<W>
where
    E: Display,
    W: io::Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
