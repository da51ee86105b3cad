//! Target point-cloud generation from a declarative emblem description.

/// Emblem description, projection and point generation.
pub mod emblem;
/// Point generators for the individual shape primitives.
pub mod shapes;
