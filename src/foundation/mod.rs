//! Shared primitives: geometry/color types, the error type, and small math helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
