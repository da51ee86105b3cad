use crate::animation::progress::Choreography;
use crate::foundation::error::{EngineError, EngineResult};
use crate::geometry::emblem::EmblemSpec;
use crate::render::renderer::RenderParams;
use crate::session::outputs::OverlayParams;
use crate::session::sizing::SizingPolicy;
use crate::sim::decor::DecorParams;
use crate::sim::simulator::SimParams;
use std::path::Path;

/// Every tunable of a particle session.
///
/// Missing JSON fields fall back to their defaults, so a config file only lists what it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for particle initialization.
    pub seed: u64,
    /// Simulated seconds per frame.
    pub step_secs: f64,
    /// Backing-store density rules.
    pub sizing: SizingPolicy,
    /// Progress windows.
    pub choreography: Choreography,
    /// Drift, blend, color and alpha constants.
    pub simulation: SimParams,
    /// Tassel swing and orbiters.
    pub decor: DecorParams,
    /// Draw constants.
    pub render: RenderParams,
    /// Overlay output constants.
    pub overlay: OverlayParams,
    /// Emblem description.
    pub emblem: EmblemSpec,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0x00C0_FFEE,
            step_secs: 1.0 / 60.0,
            sizing: SizingPolicy::default(),
            choreography: Choreography::default(),
            simulation: SimParams::default(),
            decor: DecorParams::default(),
            render: RenderParams::default(),
            overlay: OverlayParams::default(),
            emblem: EmblemSpec::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> EngineResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| EngineError::config(format!("invalid JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.step_secs.is_finite() && self.step_secs > 0.0) {
            return Err(EngineError::validation("step_secs must be > 0"));
        }
        let s = &self.sizing;
        if !(s.max_dpr.is_finite() && s.max_dpr > 0.0)
            || !(s.narrow_max_dpr.is_finite() && s.narrow_max_dpr > 0.0)
        {
            return Err(EngineError::validation("sizing DPR caps must be > 0"));
        }
        if !s.narrow_breakpoint.is_finite() {
            return Err(EngineError::validation(
                "sizing narrow_breakpoint must be finite",
            ));
        }
        let sim = &self.simulation;
        if !(sim.wrap_margin.is_finite() && sim.wrap_margin >= 0.0) {
            return Err(EngineError::validation("simulation wrap_margin must be >= 0"));
        }
        if !(sim.seed.size_min > 0.0 && sim.seed.size_min <= sim.seed.size_max) {
            return Err(EngineError::validation(
                "simulation seed sizes must satisfy 0 < size_min <= size_max",
            ));
        }
        if !(self.render.glow_factor.is_finite() && self.render.glow_factor >= 1.0) {
            return Err(EngineError::validation("render glow_factor must be >= 1"));
        }
        self.choreography.validate()?;
        self.emblem.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
