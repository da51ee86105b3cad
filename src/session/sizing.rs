use crate::foundation::core::ViewportInfo;

/// Rules for choosing the backing-store pixel density.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SizingPolicy {
    /// Viewports narrower than this (CSS px) count as narrow.
    pub narrow_breakpoint: f64,
    /// DPR cap for wide viewports.
    pub max_dpr: f64,
    /// DPR cap for narrow viewports.
    pub narrow_max_dpr: f64,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 768.0,
            max_dpr: 2.0,
            narrow_max_dpr: 1.0,
        }
    }
}

/// Drawable size in CSS pixels plus the effective device pixel ratio.
///
/// Replaced wholesale on every resize; never mutated field by field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sizing {
    /// Width in CSS pixels.
    pub css_width: f64,
    /// Height in CSS pixels.
    pub css_height: f64,
    /// Effective (capped) device pixel ratio.
    pub dpr: f64,
}

impl Sizing {
    /// Backing-store width in physical pixels.
    pub fn backing_width(&self) -> u32 {
        to_pixels(self.css_width * self.dpr)
    }

    /// Backing-store height in physical pixels.
    pub fn backing_height(&self) -> u32 {
        to_pixels(self.css_height * self.dpr)
    }

    /// Height over width, or `1.0` for an empty size.
    pub fn aspect(&self) -> f64 {
        if self.css_width > 0.0 && self.css_height > 0.0 {
            self.css_height / self.css_width
        } else {
            1.0
        }
    }
}

/// Derive sizing from a viewport.
///
/// `dpr = min(device_dpr, cap)` where the cap is `narrow_max_dpr` below the breakpoint and
/// `max_dpr` otherwise.
pub fn compute_sizing(viewport: &ViewportInfo, policy: &SizingPolicy) -> Sizing {
    let cap = if viewport.width < policy.narrow_breakpoint {
        policy.narrow_max_dpr
    } else {
        policy.max_dpr
    };
    let device = if viewport.device_pixel_ratio.is_finite() && viewport.device_pixel_ratio > 0.0 {
        viewport.device_pixel_ratio
    } else {
        1.0
    };
    Sizing {
        css_width: viewport.width.max(0.0),
        css_height: viewport.height.max(0.0),
        dpr: device.min(cap),
    }
}

fn to_pixels(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        // `as` saturates at u32::MAX.
        v.round() as u32
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sizing.rs"]
mod tests;
