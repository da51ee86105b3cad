//! emblemflow is a scroll-driven particle formation engine.
//!
//! A cloud of drifting particles morphs into an emblem (a globe wearing a graduation cap) as an
//! external progress value grows, then cedes to a vector overlay and a video reveal. The public
//! API is session-oriented:
//!
//! - Build an [`EngineConfig`] (or load one from JSON)
//! - Create a [`ParticleSession`] and [`mount`](ParticleSession::mount) it on a [`FrameHost`]
//! - Publish progress through a [`ProgressHandle`] and call
//!   [`on_frame`](ParticleSession::on_frame) whenever the host fires a frame
//!
//! Pixels land in a `vello_cpu` surface; the overlay, text, search bar and video mask are
//! returned as data in [`FrameOutput`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod animation;
/// Engine configuration.
pub mod config;
pub mod geometry;
pub mod render;
pub mod session;
pub mod sim;

pub use crate::foundation::core::{Affine, Point, Rect, Rgb8, Vec2, ViewportInfo};
pub use crate::foundation::error::{EngineError, EngineResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::progress::{Choreography, ProgressSignals};
pub use crate::animation::window::Window;
pub use crate::config::EngineConfig;
pub use crate::geometry::emblem::{
    EmblemGeometry, EmblemSpec, Group, Projection, ShapeLayer, ShapeSpec, TargetPoint, generate,
};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::renderer::{RenderParams, RenderStats, Renderer};
pub use crate::render::surface::DrawSurface;
pub use crate::session::engine::ParticleSession;
pub use crate::session::headless::HeadlessHost;
pub use crate::session::host::{FrameHost, FrameRequestId, ProgressHandle};
pub use crate::session::outputs::{
    FrameOutput, OverlayParams, OverlayStyle, RevealMask, SearchBarStyle, TextStyle,
};
pub use crate::session::sizing::{Sizing, SizingPolicy, compute_sizing};
pub use crate::sim::simulator::{EngineState, FrameSimulator, SimParams};
