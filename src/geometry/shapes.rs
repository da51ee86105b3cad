//! Point generators for the primitive emblem shapes.
//!
//! Every generator is pure: identical input yields the identical ordered output. Particle `i`
//! is bound to point `i` for the life of a session, so ordering is part of the contract.

use crate::foundation::core::{Point, Rect};
use crate::foundation::math::{clamp01, lerp};
use std::f64::consts::TAU;

/// Angular offset added per concentric shell so interior rings do not line up into spokes.
pub const SHELL_PHASE_STEP: f64 = 0.3;

const DEGENERATE_SPAN: f64 = 1e-9;

/// A rhombus given by its four vertices. `left` and `right` define the widest row.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rhombus {
    /// Upper apex.
    pub top: Point,
    /// Left vertex of the widest row.
    pub left: Point,
    /// Right vertex of the widest row.
    pub right: Point,
    /// Lower apex.
    pub bottom: Point,
}

/// `count` points evenly spaced by angle `2π·i/count` around a circle.
pub fn ring_points(center: Point, radius: f64, count: usize) -> Vec<Point> {
    ring_with_phase(center, radius, count, 0.0)
}

/// Concentric rings, shell `k` rotated by `k · SHELL_PHASE_STEP`.
///
/// Mismatched `radii` / `counts` lengths use the shorter of the two.
pub fn shell_points(center: Point, radii: &[f64], counts: &[usize]) -> Vec<Point> {
    let total = counts
        .iter()
        .take(radii.len())
        .fold(0usize, |acc, &n| acc.saturating_add(n));
    let mut out = Vec::with_capacity(total);
    for (k, (&radius, &count)) in radii.iter().zip(counts).enumerate() {
        out.extend(ring_with_phase(
            center,
            radius,
            count,
            k as f64 * SHELL_PHASE_STEP,
        ));
    }
    out
}

fn ring_with_phase(center: Point, radius: f64, count: usize, phase: f64) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let angle = TAU * (i as f64) / (count as f64) + phase;
            let (s, c) = angle.sin_cos();
            Point::new(center.x + c * radius, center.y + s * radius)
        })
        .collect()
}

/// Fill a rhombus by scanning `row_count + 1` horizontal rows from top to bottom.
///
/// The apex with the smaller `y` is treated as the top, so vertex order does not flip the shape.
///
/// Each row spans the rhombus half-width at that height, interpolated between the apex and the
/// widest row, and holds `max(2, round(half_width / column_spacing))` evenly spaced points. Rows
/// at a pointed apex still get two (coincident) points, and a zero-height rhombus collapses to
/// full-width rows rather than dividing by zero.
pub fn clipped_grid_points(rhombus: Rhombus, row_count: usize, column_spacing: f64) -> Vec<Point> {
    let Rhombus {
        top,
        left,
        right,
        bottom,
    } = rhombus;
    let (top, bottom) = if top.y > bottom.y {
        (bottom, top)
    } else {
        (top, bottom)
    };
    let mid_y = (left.y + right.y) * 0.5;
    let mid_x = (left.x + right.x) * 0.5;
    let max_half = (right.x - left.x).abs() * 0.5;
    let rows = row_count.max(1);

    let mut out = Vec::new();
    for r in 0..=row_count {
        let y = lerp(top.y, bottom.y, r as f64 / rows as f64);
        let (k, apex_x) = if y <= mid_y {
            (span_fraction(y - top.y, mid_y - top.y), top.x)
        } else {
            (span_fraction(bottom.y - y, bottom.y - mid_y), bottom.x)
        };
        let half = max_half * k;
        let cx = lerp(apex_x, mid_x, k);

        let cols = column_count(half, column_spacing);
        let last = (cols - 1) as f64;
        for c in 0..cols {
            let x = cx - half + 2.0 * half * (c as f64) / last;
            out.push(Point::new(x, y));
        }
    }
    out
}

fn span_fraction(offset: f64, span: f64) -> f64 {
    if span.abs() <= DEGENERATE_SPAN {
        1.0
    } else {
        clamp01(offset / span)
    }
}

fn column_count(half_width: f64, spacing: f64) -> usize {
    if !(spacing.is_finite() && spacing > 0.0) {
        return 2;
    }
    let n = (half_width / spacing).round();
    if n.is_finite() && n > 2.0 {
        n as usize
    } else {
        2
    }
}

/// `sample_count` points spaced evenly by arc length along a polyline, both ends included.
pub fn path_samples(control_points: &[Point], sample_count: usize) -> Vec<Point> {
    let Some(&first) = control_points.first() else {
        return Vec::new();
    };
    let seg_lens: Vec<f64> = control_points
        .windows(2)
        .map(|w| (w[1] - w[0]).hypot())
        .collect();
    let total: f64 = seg_lens.iter().sum();
    if total <= DEGENERATE_SPAN {
        return vec![first; sample_count];
    }

    let denom = sample_count.saturating_sub(1).max(1) as f64;
    let mut out = Vec::with_capacity(sample_count);
    let mut seg = 0usize;
    let mut seg_start = 0.0;
    for i in 0..sample_count {
        let target = total * (i as f64) / denom;
        while seg + 1 < seg_lens.len() && seg_start + seg_lens[seg] < target {
            seg_start += seg_lens[seg];
            seg += 1;
        }
        let len = seg_lens[seg];
        let t = if len <= DEGENERATE_SPAN {
            0.0
        } else {
            clamp01((target - seg_start) / len)
        };
        out.push(control_points[seg].lerp(control_points[seg + 1], t));
    }
    out
}

/// Pass-through for small decorative accents.
pub fn fixed_points(list: &[Point]) -> Vec<Point> {
    list.to_vec()
}

/// Grid over `rect` keeping only points inside its rounded corners.
///
/// `rows`/`cols` clamp to at least 2; `corner_radius` clamps to half the shorter side.
pub fn rounded_block_points(rect: Rect, corner_radius: f64, rows: usize, cols: usize) -> Vec<Point> {
    let rect = rect.abs();
    let rows = rows.max(2);
    let cols = cols.max(2);
    let max_r = rect.width().min(rect.height()) * 0.5;
    let r = corner_radius.max(0.0).min(max_r);
    let r_sq = r * r + DEGENERATE_SPAN;

    let mut out = Vec::with_capacity(rows.saturating_mul(cols));
    for row in 0..rows {
        let y = lerp(rect.y0, rect.y1, row as f64 / (rows - 1) as f64);
        for col in 0..cols {
            let x = lerp(rect.x0, rect.x1, col as f64 / (cols - 1) as f64);
            // Nearest point on the inner rectangle whose Minkowski sum with the radius is the block.
            let nx = x.max(rect.x0 + r).min(rect.x1 - r);
            let ny = y.max(rect.y0 + r).min(rect.y1 - r);
            let (dx, dy) = (x - nx, y - ny);
            if dx * dx + dy * dy <= r_sq {
                out.push(Point::new(x, y));
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
