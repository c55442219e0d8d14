use crate::clock::Clock;
use crate::format;

/// A boxed error type for clock operations.
pub type ClockResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A writable text surface owned by the host environment.
///
/// Each platform crate provides its own implementation (e.g.
/// `orologio-term`'s terminal line). The updater only ever overwrites
/// the surface's text content; it never reads it back.
pub trait DisplayTarget {
    /// Replaces the surface's text content.
    fn set_text(&mut self, text: &str) -> ClockResult<()>;
}

/// Repeatedly refreshes a display target with the current local time.
///
/// The target and clock are handed over at construction; there is no
/// global lookup. Scheduling lives elsewhere ([`crate::ticker`]) — the
/// updater itself only knows how to perform a single refresh.
pub struct ClockUpdater<T: DisplayTarget, C: Clock> {
    target: T,
    clock: C,
    format: String,
}

impl<T: DisplayTarget, C: Clock> ClockUpdater<T, C> {
    /// Creates an updater that renders into `target` using the given
    /// strftime-style format (see [`format::format_sample`]).
    pub fn new(target: T, clock: C, format: impl Into<String>) -> Self {
        Self {
            target,
            clock,
            format: format.into(),
        }
    }

    /// Samples the clock, formats the sample, and writes the result to
    /// the display target.
    ///
    /// Calling this twice within the same wall-clock second writes the
    /// same text both times.
    pub fn tick(&mut self) -> ClockResult<()> {
        let sample = self.clock.now();
        let text = format::format_sample(&sample, &self.format);
        self.target.set_text(&text)
    }
}
