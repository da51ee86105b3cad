/// Easing curves applied to a normalized window position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Cubic ease-out.
    OutCubic,
    /// Symmetric cubic ease-in/out: `4t³` below the midpoint, `1 - (2 - 2t)³ / 2` above.
    #[default]
    InOutCubic,
}

impl Ease {
    /// Apply this curve to `t`, clamped to `[0, 1]` first (NaN maps to `0`).
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
