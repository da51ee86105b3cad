use super::*;
use crate::animation::progress::Choreography;
use crate::geometry::emblem::{EmblemSpec, Projection, generate};

const STEP: f64 = 1.0 / 60.0;

fn emblem() -> EmblemGeometry {
    let spec = EmblemSpec::graduate();
    generate(&spec, Projection::fit(&spec, 1.0))
}

fn state_for(geometry: &EmblemGeometry, seed: u64, seed_params: &SeedParams) -> EngineState {
    EngineState::new(ParticleStore::seeded(geometry.len(), seed, seed_params))
}

#[test]
fn empty_inputs_are_a_no_op() {
    let sim = FrameSimulator::default();
    let spec = EmblemSpec {
        layers: Vec::new(),
        ..EmblemSpec::graduate()
    };
    let geometry = generate(&spec, Projection::IDENTITY);
    let mut state = EngineState::default();
    for p in [0.0, 0.5, 1.0] {
        sim.advance(&mut state, &geometry, &Choreography::default().map(p), STEP);
    }
    assert!(state.store.render().is_empty());
    assert_eq!(state.frame, 3);
}

#[test]
fn drift_wraps_within_margin() {
    let params = SimParams {
        seed: SeedParams {
            velocity_max: 0.05,
            ..SeedParams::default()
        },
        ..SimParams::default()
    };
    let sim = FrameSimulator::new(params, DecorParams::default());
    let geometry = emblem();
    let mut state = state_for(&geometry, 7, &params.seed);
    let signals = Choreography::default().map(0.0);
    let m = params.wrap_margin;
    for _ in 0..500 {
        sim.advance(&mut state, &geometry, &signals, STEP);
        for p in state.store.particles() {
            assert!((-m..=1.0 + m).contains(&p.free_x), "x={}", p.free_x);
            assert!((-m..=1.0 + m).contains(&p.free_y), "y={}", p.free_y);
        }
    }
}

#[test]
fn drift_freezes_once_forming() {
    let sim = FrameSimulator::default();
    let geometry = emblem();
    let mut state = state_for(&geometry, 1, &SeedParams::default());
    let before = state.store.particles().to_vec();
    let signals = Choreography::default().map(0.3);
    for _ in 0..20 {
        sim.advance(&mut state, &geometry, &signals, STEP);
    }
    assert_eq!(state.store.particles(), before.as_slice());

    let free = Choreography::default().map(0.0);
    sim.advance(&mut state, &geometry, &free, STEP);
    assert_ne!(state.store.particles(), before.as_slice());
}

#[test]
fn formed_particles_sit_on_targets_within_bound() {
    let sim = FrameSimulator::default();
    let geometry = emblem();
    let mut state = state_for(&geometry, 3, &SeedParams::default());
    let choreo = Choreography::default();
    let bound = sim.formed_offset_bound() + 1e-12;
    let pivot = geometry.tassel_pivot.unwrap();
    let max_arm = geometry
        .points
        .iter()
        .filter(|t| t.group == Group::Tassel)
        .map(|t| ((t.x - pivot.x).powi(2) + (t.y - pivot.y).powi(2)).sqrt())
        .fold(0.0, f64::max);
    let tassel_bound = bound + max_arm * DecorParams::default().tassel_swing_max;

    for frame in 0..240 {
        let p = 0.40 + 0.6 * (frame as f64 / 240.0);
        sim.advance(&mut state, &geometry, &choreo.map(p), STEP);
        for (r, t) in state.store.render().iter().zip(&geometry.points) {
            let d = ((r.x - t.x).powi(2) + (r.y - t.y).powi(2)).sqrt();
            let limit = if t.group == Group::Tassel {
                tassel_bound
            } else {
                bound
            };
            assert!(d <= limit, "frame {frame}: offset {d} > {limit}");
        }
    }
}

#[test]
fn formed_positions_ignore_drift_history() {
    let sim = FrameSimulator::default();
    let geometry = emblem();
    let mut a = state_for(&geometry, 11, &SeedParams::default());
    let mut b = state_for(&geometry, 99, &SeedParams::default());
    let formed = Choreography::default().map(0.7);
    sim.advance(&mut a, &geometry, &formed, STEP);
    sim.advance(&mut b, &geometry, &formed, STEP);
    for (ra, rb) in a.store.render().iter().zip(b.store.render()) {
        assert!((ra.x - rb.x).abs() < 1e-12);
        assert!((ra.y - rb.y).abs() < 1e-12);
    }
}

#[test]
fn render_index_maps_to_target_index() {
    let sim = FrameSimulator::default();
    let geometry = emblem();
    let mut state = state_for(&geometry, 5, &SeedParams::default());
    for p in [0.0, 0.2, 0.5] {
        sim.advance(&mut state, &geometry, &Choreography::default().map(p), STEP);
        assert_eq!(state.store.render().len(), geometry.len());
        for (r, t) in state.store.render().iter().zip(&geometry.points) {
            assert_eq!(r.group, t.group);
        }
    }
}

#[test]
fn late_scroll_makes_every_particle_invisible() {
    let sim = FrameSimulator::default();
    let geometry = emblem();
    let mut state = state_for(&geometry, 2, &SeedParams::default());
    sim.advance(&mut state, &geometry, &Choreography::default().map(0.9), STEP);
    assert!(state.store.render().iter().all(|r| r.alpha < 1e-9));
}

#[test]
fn colors_and_radius_follow_ease() {
    let sim = FrameSimulator::default();
    let geometry = emblem();
    let mut state = state_for(&geometry, 4, &SeedParams::default());
    let palette = sim.params().palette;

    sim.advance(&mut state, &geometry, &Choreography::default().map(0.0), STEP);
    for (r, p) in state.store.render().iter().zip(state.store.particles()) {
        assert_eq!(r.color, palette.colors(r.group).free);
        assert_eq!(r.radius, p.size);
        assert!(r.alpha > 0.0 && r.alpha <= 1.0);
    }

    sim.advance(&mut state, &geometry, &Choreography::default().map(0.5), STEP);
    for (r, p) in state.store.render().iter().zip(state.store.particles()) {
        assert_eq!(r.color, palette.colors(r.group).formed);
        assert!((r.radius - p.size * 0.65).abs() < 1e-12);
    }
}

#[test]
fn reversing_progress_never_leaves_stale_state() {
    let sim = FrameSimulator::default();
    let geometry = emblem();
    let choreo = Choreography::default();
    let mut state = state_for(&geometry, 8, &SeedParams::default());
    for p in [0.0, 0.5, 0.2, 0.6, 0.0, 0.35, 0.1] {
        let signals = choreo.map(p);
        sim.advance(&mut state, &geometry, &signals, STEP);
        assert_eq!(signals.ease, choreo.map(p).ease);
        assert_eq!(state.store.len(), geometry.len());
        for r in state.store.render() {
            assert!(r.x.is_finite() && r.y.is_finite());
            assert!((0.0..=1.0).contains(&r.alpha));
            assert!(r.radius > 0.0);
        }
    }
}
