use crate::animation::progress::ProgressSignals;
use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::math::clamp01;
use crate::geometry::emblem::EmblemGeometry;
use crate::render::surface::DrawSurface;
use crate::sim::particles::RenderParticle;

/// Draw constants for the particle scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Opaque scene background.
    pub background: Rgb8,
    /// Glow disk radius as a multiple of the particle radius.
    pub glow_factor: f64,
    /// Particles at or below this radius get no glow.
    pub glow_min_radius: f64,
    /// Particles at or below this alpha get no glow.
    pub glow_min_alpha: f64,
    /// Glow center alpha relative to the particle alpha.
    pub glow_alpha_scale: f64,
    /// Upper bound on the connection distance in CSS pixels.
    pub connection_max_px: f64,
    /// Connection distance at `ease = 0`.
    pub connection_base_px: f64,
    /// Connection distance gained at `ease = 1`.
    pub connection_growth_px: f64,
    /// Connections are drawn only above this ease.
    pub connection_ease_min: f64,
    /// Ease span over which connections fade in after `connection_ease_min`.
    pub forming_span: f64,
    /// Connection stroke width in CSS pixels.
    pub line_width: f64,
    /// Peak connection alpha for coincident particles.
    pub connection_alpha: f64,
    /// Connection color.
    pub connection_color: Rgb8,
    /// Ambient glow is drawn only above this ease.
    pub ambient_ease_min: f64,
    /// Ambient glow alpha at full ease.
    pub ambient_alpha: f64,
    /// Ambient glow radius as a multiple of the emblem height.
    pub ambient_radius: f64,
    /// Ambient glow color.
    pub ambient_color: Rgb8,
    /// Anything dimmer than this is skipped.
    pub min_visible_alpha: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            background: Rgb8::new(8, 12, 24),
            glow_factor: 3.5,
            glow_min_radius: 1.2,
            glow_min_alpha: 0.1,
            glow_alpha_scale: 0.35,
            connection_max_px: 55.0,
            connection_base_px: 30.0,
            connection_growth_px: 25.0,
            connection_ease_min: 0.3,
            forming_span: 0.4,
            line_width: 0.6,
            connection_alpha: 0.5,
            connection_color: Rgb8::new(96, 165, 250),
            ambient_ease_min: 0.6,
            ambient_alpha: 0.25,
            ambient_radius: 0.6,
            ambient_color: Rgb8::new(59, 130, 246),
            min_visible_alpha: 0.003,
        }
    }
}

/// Counts of what one frame actually drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Particle cores drawn.
    pub particles: usize,
    /// Particle glow disks drawn.
    pub glows: usize,
    /// Connection segments drawn.
    pub lines: usize,
}

/// Draws the particle scene onto any [`DrawSurface`].
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    params: RenderParams,
}

impl Renderer {
    /// Build a renderer.
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    /// Draw constants.
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Draw one frame.
    ///
    /// `particles` holds normalized positions; they are scaled to the surface's CSS size here.
    /// Order: background, ambient glow, sphere connections, then each particle's glow and core.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        particles: &[RenderParticle],
        geometry: &EmblemGeometry,
        signals: &ProgressSignals,
    ) -> RenderStats {
        let (w, h) = surface.css_size();
        let mut stats = RenderStats::default();
        surface.fill_rect(Rect::new(0.0, 0.0, w, h), self.params.background, 1.0);
        if particles.is_empty() {
            return stats;
        }

        let to_px = |x: f64, y: f64| Point::new(x * w, y * h);
        let anchor = to_px(geometry.anchor.x, geometry.anchor.y);
        self.ambient_glow(surface, geometry, signals, h, anchor);
        stats.lines = self.connections(surface, particles, geometry, signals, to_px);

        let p = &self.params;
        for rp in particles {
            if !(rp.alpha > p.min_visible_alpha) {
                continue;
            }
            let c = to_px(rp.x, rp.y);
            if rp.radius > p.glow_min_radius && rp.alpha > p.glow_min_alpha {
                surface.radial_glow(
                    c,
                    rp.radius * p.glow_factor,
                    rp.color,
                    rp.alpha * p.glow_alpha_scale,
                );
                stats.glows += 1;
            }
            surface.fill_circle(c, rp.radius, rp.color, rp.alpha);
            stats.particles += 1;
        }
        stats
    }

    fn ambient_glow<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        geometry: &EmblemGeometry,
        signals: &ProgressSignals,
        css_height: f64,
        anchor_px: Point,
    ) {
        let p = &self.params;
        if signals.ease <= p.ambient_ease_min {
            return;
        }
        let span = (1.0 - p.ambient_ease_min).max(1e-9);
        let ramp = clamp01((signals.ease - p.ambient_ease_min) / span);
        let alpha = ramp
            * p.ambient_alpha
            * clamp01(signals.fade_out)
            * (1.0 - clamp01(signals.logo_takeover));
        if alpha <= p.min_visible_alpha {
            return;
        }
        let radius = p.ambient_radius * geometry.height * css_height;
        surface.radial_glow(anchor_px, radius, p.ambient_color, alpha);
    }

    fn connections<S, F>(
        &self,
        surface: &mut S,
        particles: &[RenderParticle],
        geometry: &EmblemGeometry,
        signals: &ProgressSignals,
        to_px: F,
    ) -> usize
    where
        S: DrawSurface + ?Sized,
        F: Fn(f64, f64) -> Point,
    {
        let p = &self.params;
        let takeover = clamp01(signals.logo_takeover);
        if signals.ease <= p.connection_ease_min || takeover >= 1.0 {
            return 0;
        }
        let forming = clamp01((signals.ease - p.connection_ease_min) / p.forming_span.max(1e-9))
            * clamp01(signals.fade_out)
            * (1.0 - takeover);
        let reach = (p.connection_base_px + p.connection_growth_px * signals.ease)
            .min(p.connection_max_px);
        if forming <= 0.0 || reach <= 0.0 {
            return 0;
        }

        let sphere: Vec<Point> = geometry
            .sphere_indices
            .iter()
            .filter_map(|&i| particles.get(i))
            .map(|rp| to_px(rp.x, rp.y))
            .collect();

        let mut drawn = 0;
        for (i, a) in sphere.iter().enumerate() {
            for b in &sphere[i + 1..] {
                let d = a.distance(*b);
                if d >= reach {
                    continue;
                }
                let alpha = (1.0 - d / reach) * p.connection_alpha * forming;
                if alpha <= p.min_visible_alpha {
                    continue;
                }
                surface.stroke_line(*a, *b, p.line_width, p.connection_color, alpha);
                drawn += 1;
            }
        }
        drawn
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
