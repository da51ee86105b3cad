//! Particle state and the per-frame simulator.

/// Tassel swing and orbiting accents.
pub mod decor;
/// Particle storage.
pub mod particles;
/// Per-frame particle simulation.
pub mod simulator;
