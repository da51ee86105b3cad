use crate::foundation::math::clamp01;

/// A `[start, end]` interval over the progress axis.
///
/// Each choreography signal owns one or two windows and is flat outside them, so every signal
/// stays defined and continuous for any progress value, including when progress reverses.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// Progress at which the ramp begins.
    pub start: f64,
    /// Progress at which the ramp completes.
    pub end: f64,
}

impl Window {
    /// Construct a window. Ordering is checked by [`Window::is_ordered`].
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `0` up to `start`, `1` from `end`, linear in between.
    ///
    /// A zero-width window is a step at `start`.
    pub fn rise(self, progress: f64) -> f64 {
        let span = self.end - self.start;
        if span <= f64::EPSILON {
            return if progress > self.start { 1.0 } else { 0.0 };
        }
        clamp01((progress - self.start) / span)
    }

    /// `1 - rise`.
    pub fn fall(self, progress: f64) -> f64 {
        1.0 - self.rise(progress)
    }

    /// Finite bounds with `start <= end`.
    pub fn is_ordered(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start <= self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;
