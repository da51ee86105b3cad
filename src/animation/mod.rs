//! Scroll-progress choreography: easing curves, windows, and the progress mapper.

/// Easing curves.
pub mod ease;
/// Progress-to-signal mapping.
pub mod progress;
/// Progress windows and their rise/fall ramps.
pub mod window;
