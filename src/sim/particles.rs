use crate::foundation::core::Rgb8;
use crate::foundation::math::Rng64;
use crate::geometry::emblem::Group;
use std::f64::consts::TAU;

/// Free-drift state of one particle. Mutated only while the cloud is unformed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Free horizontal position (viewport fraction).
    pub free_x: f64,
    /// Free vertical position (viewport fraction).
    pub free_y: f64,
    /// Horizontal drift per frame.
    pub vx: f64,
    /// Vertical drift per frame.
    pub vy: f64,
    /// Base radius in CSS pixels.
    pub size: f64,
    /// Desynchronizes jitter and pulse across particles.
    pub phase_offset: f64,
}

/// Per-frame derived draw state. Rebuilt every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParticle {
    /// Horizontal viewport fraction.
    pub x: f64,
    /// Vertical viewport fraction.
    pub y: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Radius in CSS pixels.
    pub radius: f64,
    /// Fill color.
    pub color: Rgb8,
    /// Group of the bound target.
    pub group: Group,
}

/// Ranges particles are seeded from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SeedParams {
    /// Per-axis velocity is drawn from `±velocity_max`.
    pub velocity_max: f64,
    /// Smallest base radius.
    pub size_min: f64,
    /// Largest base radius.
    pub size_max: f64,
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            velocity_max: 0.0004,
            size_min: 1.0,
            size_max: 2.8,
        }
    }
}

/// Owns every particle of a session plus its latest render state.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    render: Vec<RenderParticle>,
}

impl ParticleStore {
    /// Create `count` particles with positions in `[0, 1]²` from a seeded generator.
    pub fn seeded(count: usize, seed: u64, params: &SeedParams) -> Self {
        let mut rng = Rng64::new(seed);
        let particles = (0..count)
            .map(|_| Particle {
                free_x: rng.next_f64_01(),
                free_y: rng.next_f64_01(),
                vx: rng.range(-params.velocity_max, params.velocity_max),
                vy: rng.range(-params.velocity_max, params.velocity_max),
                size: rng.range(params.size_min, params.size_max),
                phase_offset: rng.range(0.0, TAU),
            })
            .collect();
        Self {
            particles,
            render: Vec::with_capacity(count),
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// `true` when the store holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Free-drift state, in target order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Render state from the latest simulated frame.
    pub fn render(&self) -> &[RenderParticle] {
        &self.render
    }

    pub(crate) fn split_mut(&mut self) -> (&mut [Particle], &mut Vec<RenderParticle>) {
        (&mut self.particles, &mut self.render)
    }
}
