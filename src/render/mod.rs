//! Drawing: the surface abstraction, its `vello_cpu` implementation, and the scene renderer.

/// `vello_cpu` drawing surface.
pub mod cpu;
/// Particle scene renderer.
pub mod renderer;
/// Drawing surface abstraction.
pub mod surface;
