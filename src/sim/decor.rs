//! Decorative motion driven by the session clock: the tassel swing and the orbiting accents
//! around the overlay emblem. Both are plain trig of `clock`, so they stay on the same timeline
//! as the particles.

use crate::foundation::core::Point;
use crate::geometry::emblem::EmblemGeometry;
use std::f64::consts::TAU;

/// Parameters for clock-driven decorations.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DecorParams {
    /// Peak tassel rotation in radians at full formation.
    pub tassel_swing_max: f64,
    /// Tassel swing angular rate in radians per second.
    pub tassel_swing_rate: f64,
    /// Number of orbiting accents.
    pub orbiter_count: usize,
    /// Orbit radius as a multiple of the emblem height.
    pub orbit_radius: f64,
    /// Vertical squash of the orbit ellipse.
    pub orbit_squash: f64,
    /// Seconds per revolution; `<= 0` freezes the orbit.
    pub orbit_period: f64,
}

impl Default for DecorParams {
    fn default() -> Self {
        Self {
            tassel_swing_max: 0.12,
            tassel_swing_rate: 1.6,
            orbiter_count: 3,
            orbit_radius: 0.62,
            orbit_squash: 0.35,
            orbit_period: 9.0,
        }
    }
}

/// Tassel rotation in radians, scaled by formation so an unformed cloud does not swing.
pub fn tassel_swing(params: &DecorParams, clock: f64, ease: f64) -> f64 {
    (clock * params.tassel_swing_rate).sin() * params.tassel_swing_max * ease
}

/// Orbiter positions in normalized viewport space around the emblem anchor.
pub fn orbiters(params: &DecorParams, clock: f64, geometry: &EmblemGeometry) -> Vec<Point> {
    let n = params.orbiter_count;
    let turns = if params.orbit_period > 0.0 {
        clock / params.orbit_period
    } else {
        0.0
    };
    let r = params.orbit_radius * geometry.height;
    (0..n)
        .map(|k| {
            let (s, c) = (TAU * (turns + k as f64 / n as f64)).sin_cos();
            Point::new(
                geometry.anchor.x + c * r * geometry.aspect,
                geometry.anchor.y + s * r * params.orbit_squash,
            )
        })
        .collect()
}
