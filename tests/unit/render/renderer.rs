use super::*;
use crate::animation::progress::Choreography;
use crate::geometry::emblem::{EmblemSpec, Group, Projection, generate};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Rect,
    Circle { alpha: f64 },
    Glow { radius: f64 },
    Line { alpha: f64, len: f64 },
}

struct Recorder {
    size: (f64, f64),
    ops: Vec<Op>,
}

impl Recorder {
    fn new(w: f64, h: f64) -> Self {
        Self {
            size: (w, h),
            ops: Vec::new(),
        }
    }

    fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl DrawSurface for Recorder {
    fn css_size(&self) -> (f64, f64) {
        self.size
    }
    fn fill_rect(&mut self, _rect: Rect, _color: Rgb8, _alpha: f64) {
        self.ops.push(Op::Rect);
    }
    fn fill_circle(&mut self, _center: Point, _radius: f64, _color: Rgb8, alpha: f64) {
        self.ops.push(Op::Circle { alpha });
    }
    fn radial_glow(&mut self, _center: Point, radius: f64, _color: Rgb8, _alpha: f64) {
        self.ops.push(Op::Glow { radius });
    }
    fn stroke_line(&mut self, from: Point, to: Point, _width: f64, _color: Rgb8, alpha: f64) {
        self.ops.push(Op::Line {
            alpha,
            len: from.distance(to),
        });
    }
}

fn geometry() -> EmblemGeometry {
    let spec = EmblemSpec::graduate();
    generate(&spec, Projection::fit(&spec, 1.0))
}

fn formed_particles(g: &EmblemGeometry, alpha: f64, radius: f64) -> Vec<RenderParticle> {
    g.points
        .iter()
        .map(|t| RenderParticle {
            x: t.x,
            y: t.y,
            alpha,
            radius,
            color: Rgb8::new(255, 255, 255),
            group: t.group,
        })
        .collect()
}

#[test]
fn empty_scene_draws_only_background() {
    let mut s = Recorder::new(400.0, 400.0);
    let stats = Renderer::default().render(
        &mut s,
        &[],
        &geometry(),
        &Choreography::default().map(0.5),
    );
    assert_eq!(stats, RenderStats::default());
    assert_eq!(s.ops, vec![Op::Rect]);
}

#[test]
fn background_is_drawn_first_and_particles_last() {
    let g = geometry();
    let parts = formed_particles(&g, 0.9, 2.0);
    let mut s = Recorder::new(800.0, 800.0);
    let stats = Renderer::default().render(&mut s, &parts, &g, &Choreography::default().map(0.2));

    assert_eq!(s.ops.first(), Some(&Op::Rect));
    assert!(matches!(s.ops.last(), Some(Op::Circle { .. })));
    let first_line = s.ops.iter().position(|o| matches!(o, Op::Line { .. }));
    let first_circle = s.ops.iter().position(|o| matches!(o, Op::Circle { .. }));
    assert!(first_line.unwrap() < first_circle.unwrap());
    assert_eq!(stats.particles, g.len());
    assert_eq!(stats.glows, g.len());
    assert_eq!(stats.lines, s.count(|o| matches!(o, Op::Line { .. })));
}

#[test]
fn no_connections_while_unformed_or_taken_over() {
    let g = geometry();
    let parts = formed_particles(&g, 0.9, 2.0);
    let choreo = Choreography::default();
    for p in [0.0, 0.05, 1.0] {
        let mut s = Recorder::new(800.0, 800.0);
        let stats = Renderer::default().render(&mut s, &parts, &g, &choreo.map(p));
        assert_eq!(stats.lines, 0, "progress {p}");
    }
}

#[test]
fn connection_lines_respect_reach_and_falloff() {
    let g = geometry();
    let parts = formed_particles(&g, 0.9, 2.0);
    let mut s = Recorder::new(800.0, 800.0);
    let r = Renderer::default();
    let stats = r.render(&mut s, &parts, &g, &Choreography::default().map(0.2));
    assert!(stats.lines > 0);
    let max = r.params().connection_max_px;
    for op in &s.ops {
        if let Op::Line { alpha, len } = op {
            assert!(*len < max);
            assert!(*alpha > 0.0 && *alpha <= r.params().connection_alpha);
        }
    }
}

#[test]
fn only_sphere_particles_connect() {
    let g = geometry();
    let mut parts = formed_particles(&g, 0.9, 2.0);
    let signals = Choreography::default().map(0.2);
    let mut s = Recorder::new(800.0, 800.0);
    let baseline = Renderer::default().render(&mut s, &parts, &g, &signals);
    assert!(baseline.lines > 0);

    // Collapse every non-sphere particle onto one spot; line count must not change.
    for (rp, t) in parts.iter_mut().zip(&g.points) {
        if t.group != Group::Sphere {
            rp.x = 0.5;
            rp.y = 0.5;
        }
    }
    let mut s = Recorder::new(800.0, 800.0);
    let stats = Renderer::default().render(&mut s, &parts, &g, &signals);
    assert_eq!(stats.lines, baseline.lines);
}

#[test]
fn small_or_dim_particles_skip_glow_and_invisible_ones_are_skipped() {
    let g = geometry();
    let free = Choreography::default().map(0.0);
    let r = Renderer::default();

    let mut s = Recorder::new(400.0, 400.0);
    let stats = r.render(&mut s, &formed_particles(&g, 0.9, 1.0), &g, &free);
    assert_eq!(stats.glows, 0);
    assert_eq!(stats.particles, g.len());

    let mut s = Recorder::new(400.0, 400.0);
    let stats = r.render(&mut s, &formed_particles(&g, 0.05, 2.0), &g, &free);
    assert_eq!(stats.glows, 0);

    let mut s = Recorder::new(400.0, 400.0);
    let stats = r.render(&mut s, &formed_particles(&g, 0.0, 2.0), &g, &free);
    assert_eq!(stats.particles, 0);
    assert_eq!(s.count(|o| matches!(o, Op::Circle { .. })), 0);
}

#[test]
fn glow_radius_scales_with_particle_radius() {
    let g = geometry();
    let mut s = Recorder::new(400.0, 400.0);
    Renderer::default().render(
        &mut s,
        &formed_particles(&g, 0.9, 2.0)[..1],
        &g,
        &Choreography::default().map(0.0),
    );
    assert!(s.ops.contains(&Op::Glow { radius: 7.0 }));
}

#[test]
fn ambient_glow_appears_only_late_in_formation() {
    let g = geometry();
    let parts = formed_particles(&g, 0.0, 2.0);
    let choreo = Choreography::default();

    let mut early = Recorder::new(400.0, 400.0);
    Renderer::default().render(&mut early, &parts, &g, &choreo.map(0.2));
    assert_eq!(early.count(|o| matches!(o, Op::Glow { .. })), 0);

    let mut formed = Recorder::new(400.0, 400.0);
    Renderer::default().render(&mut formed, &parts, &g, &choreo.map(0.25));
    assert_eq!(formed.count(|o| matches!(o, Op::Glow { .. })), 1);
}
