use crate::animation::progress::ProgressSignals;
use crate::foundation::core::Rgb8;
use crate::foundation::math::{clamp01, lerp};
use crate::geometry::emblem::{EmblemGeometry, Group};
use crate::sim::decor::{DecorParams, tassel_swing};
use crate::sim::particles::{ParticleStore, RenderParticle, SeedParams};

/// Free/formed colors of one group.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupColors {
    /// Color while drifting.
    pub free: Rgb8,
    /// Color once formed.
    pub formed: Rgb8,
}

/// Per-group particle colors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Globe body.
    pub sphere: GroupColors,
    /// Mortarboard and band.
    pub cap: GroupColors,
    /// Cord and knot.
    pub tassel: GroupColors,
    /// Accent dots.
    pub highlight: GroupColors,
}

impl Default for Palette {
    fn default() -> Self {
        let free = Rgb8::new(226, 232, 240);
        Self {
            sphere: GroupColors {
                free,
                formed: Rgb8::new(59, 130, 246),
            },
            cap: GroupColors {
                free,
                formed: Rgb8::new(30, 58, 138),
            },
            tassel: GroupColors {
                free,
                formed: Rgb8::new(250, 204, 21),
            },
            highlight: GroupColors {
                free: Rgb8::new(248, 250, 252),
                formed: Rgb8::new(255, 255, 255),
            },
        }
    }
}

impl Palette {
    /// Colors for `group`.
    pub fn colors(&self, group: Group) -> GroupColors {
        match group {
            Group::Sphere => self.sphere,
            Group::Cap => self.cap,
            Group::Tassel => self.tassel,
            Group::Highlight => self.highlight,
        }
    }
}

/// Simulation constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Particle seeding ranges.
    pub seed: SeedParams,
    /// Free drift runs only while `ease` is below this.
    pub drift_threshold: f64,
    /// Distance outside the unit square before a particle wraps.
    pub wrap_margin: f64,
    /// Jitter amplitude in viewport fractions.
    pub jitter_amplitude: f64,
    /// Sway and tassel swing engage above this `ease`.
    pub sway_threshold: f64,
    /// Peak horizontal sway of formed targets, in viewport fractions.
    pub sway_amplitude: f64,
    /// Sway phase advance per second at full formation.
    pub sway_rate: f64,
    /// Steady alpha once formed.
    pub formed_alpha: f64,
    /// Center of the drifting alpha pulse.
    pub pulse_base: f64,
    /// Half-range of the drifting alpha pulse.
    pub pulse_depth: f64,
    /// Pulse angular rate in radians per second.
    pub pulse_rate: f64,
    /// Fraction of the base size lost at full formation.
    pub size_shrink: f64,
    /// Group colors.
    pub palette: Palette,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            seed: SeedParams::default(),
            drift_threshold: 0.01,
            wrap_margin: 0.05,
            jitter_amplitude: 0.004,
            sway_threshold: 0.1,
            sway_amplitude: 0.015,
            sway_rate: 0.4,
            formed_alpha: 0.95,
            pulse_base: 0.45,
            pulse_depth: 0.25,
            pulse_rate: 1.2,
            size_shrink: 0.35,
            palette: Palette::default(),
        }
    }
}

/// Explicit per-session simulation state.
#[derive(Clone, Debug, Default)]
pub struct EngineState {
    /// Particles and their latest render state.
    pub store: ParticleStore,
    /// Seconds of simulated time.
    pub clock: f64,
    /// Accumulated sway angle.
    pub sway_phase: f64,
    /// Frames simulated so far.
    pub frame: u64,
}

impl EngineState {
    /// Fresh state around a seeded store.
    pub fn new(store: ParticleStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }
}

/// Advances particle state and derives render state each frame.
#[derive(Clone, Debug, Default)]
pub struct FrameSimulator {
    params: SimParams,
    decor: DecorParams,
}

impl FrameSimulator {
    /// Build a simulator.
    pub fn new(params: SimParams, decor: DecorParams) -> Self {
        Self { params, decor }
    }

    /// Simulation constants.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Upper bound on `|position - target|` for non-tassel particles at full formation.
    pub fn formed_offset_bound(&self) -> f64 {
        self.params.jitter_amplitude * std::f64::consts::SQRT_2 + self.params.sway_amplitude
    }

    /// Run one frame: advance clocks by `step` seconds, drift if unformed, then blend every
    /// particle toward its target by `signals.ease`.
    ///
    /// Particle `i` always blends toward `geometry.points[i]`. An empty store or geometry leaves
    /// an empty render list.
    pub fn advance(
        &self,
        state: &mut EngineState,
        geometry: &EmblemGeometry,
        signals: &ProgressSignals,
        step: f64,
    ) {
        let p = &self.params;
        let ease = clamp01(signals.ease);
        state.clock += step;
        state.frame += 1;

        let formed_motion = ease > p.sway_threshold;
        if formed_motion {
            state.sway_phase += step * p.sway_rate * ease;
        }
        let clock = state.clock;
        let sway_dx = if formed_motion {
            state.sway_phase.sin() * p.sway_amplitude * ease
        } else {
            0.0
        };
        let swing = match geometry.tassel_pivot {
            Some(pivot) if formed_motion => {
                Some((pivot, tassel_swing(&self.decor, clock, ease).sin_cos()))
            }
            _ => None,
        };

        let drifting = ease < p.drift_threshold;
        let alpha_scale = clamp01(signals.fade_out) * (1.0 - clamp01(signals.logo_takeover));
        let (particles, render) = state.store.split_mut();
        render.clear();

        for (particle, target) in particles.iter_mut().zip(&geometry.points) {
            if drifting {
                particle.free_x = wrap(particle.free_x + particle.vx, p.wrap_margin);
                particle.free_y = wrap(particle.free_y + particle.vy, p.wrap_margin);
            }

            let phase = particle.phase_offset;
            let free_x = particle.free_x + (clock * 0.5 + phase).sin() * p.jitter_amplitude;
            let free_y = particle.free_y + (clock * 0.7 + phase * 1.3).cos() * p.jitter_amplitude;

            let (mut tx, mut ty) = (target.x, target.y);
            if target.group == Group::Tassel
                && let Some((pivot, (s, c))) = swing
            {
                // Rotate in height-proportional units so the swing is not skewed by aspect.
                let dx = (tx - pivot.x) / geometry.aspect;
                let dy = ty - pivot.y;
                tx = pivot.x + (dx * c - dy * s) * geometry.aspect;
                ty = pivot.y + dx * s + dy * c;
            }
            tx += sway_dx;

            let colors = p.palette.colors(target.group);
            let pulse = p.pulse_base + p.pulse_depth * (clock * p.pulse_rate + phase).sin();
            render.push(RenderParticle {
                x: lerp(free_x, tx, ease),
                y: lerp(free_y, ty, ease),
                alpha: clamp01(lerp(pulse, p.formed_alpha, ease) * alpha_scale),
                radius: particle.size * (1.0 - p.size_shrink * ease),
                color: colors.free.lerp(colors.formed, ease),
                group: target.group,
            });
        }
    }
}

fn wrap(v: f64, margin: f64) -> f64 {
    if v < -margin {
        1.0 + margin
    } else if v > 1.0 + margin {
        -margin
    } else {
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/simulator.rs"]
mod tests;
