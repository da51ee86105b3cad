//! Surface lifecycle: DPR-aware sizing, frame scheduling through a host, and the per-frame
//! data outputs.

/// The particle session and its lifecycle.
pub mod engine;
/// Manually driven frame host.
pub mod headless;
/// Frame scheduling host and shared progress.
pub mod host;
/// Per-frame data outputs.
pub mod outputs;
/// Viewport to backing-store sizing.
pub mod sizing;
