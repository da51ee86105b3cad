use crate::animation::ease::Ease;
use crate::animation::window::Window;
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::math::{clamp01, lerp};

/// Tunable progress windows for every scroll-driven signal.
///
/// The defaults reproduce the reference choreography; none of the thresholds are load-bearing
/// beyond the formation window ending where `ease` must reach `1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Choreography {
    /// Progress window over which the cloud forms into the emblem.
    pub formation: Window,
    /// Curve applied across `formation`.
    pub formation_ease: Ease,
    /// Scene fade-out (`1` before, `0` after).
    pub fade_out: Window,
    /// Vector overlay fade-in; also drives its scale-up.
    pub logo_in: Window,
    /// Vector overlay fade-out.
    pub logo_out: Window,
    /// Overlay scale at the start of `logo_in`.
    pub logo_scale_from: f64,
    /// Hero text fade-out.
    pub text_fade: Window,
    /// Above this progress the hero text is hidden outright.
    pub text_cutoff: f64,
    /// Search bar slide/fade-in.
    pub search_bar: Window,
    /// Video clip-mask growth; static before `reveal.start`.
    pub reveal: Window,
    /// Window over `ease` (not progress) in which particles cede to the vector overlay.
    pub takeover: Window,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            formation: Window::new(0.0, 0.40),
            formation_ease: Ease::InOutCubic,
            fade_out: Window::new(0.65, 0.80),
            logo_in: Window::new(0.15, 0.28),
            logo_out: Window::new(0.55, 0.68),
            logo_scale_from: 0.6,
            text_fade: Window::new(0.05, 0.25),
            text_cutoff: 0.26,
            search_bar: Window::new(0.60, 0.72),
            reveal: Window::new(0.30, 0.75),
            takeover: Window::new(0.7, 1.0),
        }
    }
}

/// Signals derived from one progress sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ProgressSignals {
    /// The clamped progress the signals were computed from.
    pub progress: f64,
    /// Formation amount: `0` free, `1` fully formed.
    pub ease: f64,
    /// Whole-scene visibility multiplier.
    pub fade_out: f64,
    /// Vector overlay opacity.
    pub logo_alpha: f64,
    /// Vector overlay scale.
    pub logo_scale: f64,
    /// Search bar reveal in `[0, 1]`.
    pub search_bar_progress: f64,
    /// Hero text opacity.
    pub text_opacity: f64,
    /// Hero text presence; hidden text must not intercept pointer events.
    pub text_visible: bool,
    /// Video clip-mask growth in `[0, 1]`.
    pub reveal_progress: f64,
    /// How far particles have ceded to the overlay, in `[0, 1]`.
    pub logo_takeover: f64,
}

impl Choreography {
    /// Map a raw progress value to every downstream signal.
    ///
    /// Out-of-range input is clamped and NaN is treated as `0`. The mapping keeps no state, so a
    /// reversing or oscillating progress always yields the signals of the current value.
    pub fn map(&self, progress: f64) -> ProgressSignals {
        let p = clamp01(progress);
        let ease = self.formation_ease.apply(self.formation.rise(p));
        ProgressSignals {
            progress: p,
            ease,
            fade_out: self.fade_out.fall(p),
            logo_alpha: self.logo_in.rise(p) * self.logo_out.fall(p),
            logo_scale: lerp(self.logo_scale_from, 1.0, self.logo_in.rise(p)),
            search_bar_progress: self.search_bar.rise(p),
            text_opacity: self.text_fade.fall(p),
            text_visible: p <= self.text_cutoff,
            reveal_progress: self.reveal.rise(p),
            logo_takeover: self.takeover.rise(ease),
        }
    }

    /// Check window ordering and scalar ranges.
    pub fn validate(&self) -> EngineResult<()> {
        let windows = [
            ("formation", self.formation),
            ("fade_out", self.fade_out),
            ("logo_in", self.logo_in),
            ("logo_out", self.logo_out),
            ("text_fade", self.text_fade),
            ("search_bar", self.search_bar),
            ("reveal", self.reveal),
            ("takeover", self.takeover),
        ];
        for (name, w) in windows {
            if !w.is_ordered() {
                return Err(EngineError::validation(format!(
                    "choreography window '{name}' must satisfy start <= end"
                )));
            }
        }
        if self.logo_in.end > self.logo_out.start {
            return Err(EngineError::validation(
                "choreography logo_in must end before logo_out starts",
            ));
        }
        if !self.logo_scale_from.is_finite() || self.logo_scale_from <= 0.0 {
            return Err(EngineError::validation(
                "choreography logo_scale_from must be > 0",
            ));
        }
        if !self.text_cutoff.is_finite() {
            return Err(EngineError::validation(
                "choreography text_cutoff must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
