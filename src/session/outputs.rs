//! Data-only per-frame outputs for layers the engine does not draw itself: the vector emblem
//! overlay, hero text, search bar, and the video clip mask. The host applies them to whatever
//! presentation elements it owns, on the same clock as the particle frame.

use crate::animation::progress::ProgressSignals;
use crate::foundation::core::Point;
use crate::geometry::emblem::EmblemGeometry;
use crate::render::renderer::RenderStats;
use crate::session::sizing::Sizing;
use crate::sim::decor::{DecorParams, orbiters, tassel_swing};

/// Constants for overlay outputs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayParams {
    /// Distance (CSS px) the search bar slides up while revealing.
    pub search_bar_travel_px: f64,
    /// Clip-mask radius before the reveal starts.
    pub reveal_min_radius_px: f64,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            search_bar_travel_px: 24.0,
            reveal_min_radius_px: 0.0,
        }
    }
}

/// Style of the vector emblem overlay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Tassel rotation in radians.
    pub tassel_angle: f64,
}

/// Style of the hero text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// `false` means removed from layout and hit testing, not just transparent.
    pub visible: bool,
}

/// Style of the search bar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SearchBarStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Downward offset in CSS px; `0` once fully revealed.
    pub offset_px: f64,
}

/// Circular clip mask over the background video.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealMask {
    /// Mask center in CSS px.
    pub center: Point,
    /// Mask radius in CSS px; at full reveal it covers the whole viewport.
    pub radius_px: f64,
}

/// Everything one frame produced besides pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Frames simulated so far, including this one.
    pub frame: u64,
    /// Session clock in seconds.
    pub clock: f64,
    /// The progress signals this frame was built from.
    pub signals: ProgressSignals,
    /// Vector overlay style.
    pub overlay: OverlayStyle,
    /// Hero text style.
    pub text: TextStyle,
    /// Search bar style.
    pub search_bar: SearchBarStyle,
    /// Video clip mask.
    pub reveal: RevealMask,
    /// Orbiting accent positions in CSS px.
    pub orbiters: Vec<Point>,
    /// What the renderer drew.
    pub stats: RenderStats,
}

pub(crate) struct OverlayInputs<'a> {
    pub params: &'a OverlayParams,
    pub decor: &'a DecorParams,
    pub sizing: Sizing,
    pub geometry: &'a EmblemGeometry,
    pub clock: f64,
    pub frame: u64,
}

pub(crate) fn frame_output(
    inputs: OverlayInputs<'_>,
    signals: ProgressSignals,
    stats: RenderStats,
) -> FrameOutput {
    let OverlayInputs {
        params,
        decor,
        sizing,
        geometry,
        clock,
        frame,
    } = inputs;
    let (w, h) = (sizing.css_width, sizing.css_height);
    let center = Point::new(w * 0.5, h * 0.5);
    let full = center.to_vec2().hypot();
    let min_r = params.reveal_min_radius_px.max(0.0).min(full);

    FrameOutput {
        frame,
        clock,
        signals,
        overlay: OverlayStyle {
            opacity: signals.logo_alpha,
            scale: signals.logo_scale,
            tassel_angle: tassel_swing(decor, clock, signals.ease),
        },
        text: TextStyle {
            opacity: signals.text_opacity,
            visible: signals.text_visible,
        },
        search_bar: SearchBarStyle {
            opacity: signals.search_bar_progress,
            offset_px: (1.0 - signals.search_bar_progress) * params.search_bar_travel_px,
        },
        reveal: RevealMask {
            center,
            radius_px: min_r + (full - min_r) * signals.reveal_progress,
        },
        orbiters: orbiters(decor, clock, geometry)
            .into_iter()
            .map(|p| Point::new(p.x * w, p.y * h))
            .collect(),
        stats,
    }
}
