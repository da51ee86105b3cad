use crate::foundation::core::{Point, Rect, Rgb8};

/// A 2D drawing target addressed in CSS pixels.
///
/// Implementations own any device-pixel-ratio scaling; callers never see backing-store pixels.
/// All alphas are straight opacities in `[0, 1]`.
pub trait DrawSurface {
    /// Drawable size in CSS pixels as `(width, height)`.
    fn css_size(&self) -> (f64, f64);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgb8, alpha: f64);

    /// Fill a solid disk.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb8, alpha: f64);

    /// Fill a disk with a radial gradient from `color` at `alpha` in the center to fully
    /// transparent at `radius`.
    fn radial_glow(&mut self, center: Point, radius: f64, color: Rgb8, alpha: f64);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgb8, alpha: f64);
}
