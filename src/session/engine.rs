use crate::animation::progress::Choreography;
use crate::config::EngineConfig;
use crate::foundation::core::ViewportInfo;
use crate::foundation::error::{EngineError, EngineResult};
use crate::geometry::emblem::{EmblemGeometry, Projection, generate};
use crate::render::cpu::{CpuSurface, FrameRGBA};
use crate::render::renderer::Renderer;
use crate::session::host::{FrameHost, FrameRequestId, ProgressHandle};
use crate::session::outputs::{FrameOutput, OverlayInputs, frame_output};
use crate::session::sizing::{Sizing, compute_sizing};
use crate::sim::particles::ParticleStore;
use crate::sim::simulator::{EngineState, FrameSimulator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Disposed,
}

/// One mounted particle animation: owns its particles, surface and frame schedule.
///
/// Drive it with [`mount`](Self::mount), then [`on_frame`](Self::on_frame) each time the host
/// fires the requested frame, [`on_resize`](Self::on_resize) on viewport changes, and finally
/// [`dispose`](Self::dispose) exactly once.
pub struct ParticleSession {
    config: EngineConfig,
    choreography: Choreography,
    simulator: FrameSimulator,
    renderer: Renderer,
    progress: ProgressHandle,
    state: EngineState,
    geometry: EmblemGeometry,
    sizing: Option<Sizing>,
    surface: Option<CpuSurface>,
    pending: Option<FrameRequestId>,
    lifecycle: Lifecycle,
    stalled: bool,
}

impl std::fmt::Debug for ParticleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSession")
            .field("lifecycle", &self.lifecycle)
            .field("particles", &self.state.store.len())
            .field("sizing", &self.sizing)
            .field("frame", &self.state.frame)
            .field("stalled", &self.stalled)
            .finish_non_exhaustive()
    }
}

impl ParticleSession {
    /// Validate `config`, generate the emblem and seed one particle per target point.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let geometry = generate(&config.emblem, Projection::fit(&config.emblem, 1.0));
        let store = ParticleStore::seeded(geometry.len(), config.seed, &config.simulation.seed);
        tracing::debug!(particles = store.len(), "particle session created");
        Ok(Self {
            choreography: config.choreography,
            simulator: FrameSimulator::new(config.simulation, config.decor),
            renderer: Renderer::new(config.render),
            progress: ProgressHandle::default(),
            state: EngineState::new(store),
            geometry,
            sizing: None,
            surface: None,
            pending: None,
            lifecycle: Lifecycle::Created,
            stalled: false,
            config,
        })
    }

    /// A handle the scroll observer writes progress into. All clones share one value.
    pub fn progress_handle(&self) -> ProgressHandle {
        self.progress.clone()
    }

    /// Acquire the surface for `viewport` and request the first frame.
    ///
    /// An unusable viewport is not an error: the first frame stalls and the next resize retries.
    #[tracing::instrument(skip(self, host))]
    pub fn mount(&mut self, host: &mut dyn FrameHost, viewport: ViewportInfo) -> EngineResult<()> {
        if self.lifecycle != Lifecycle::Created {
            return Err(EngineError::validation(
                "mount is only valid on a freshly created session",
            ));
        }
        self.install(viewport);
        self.lifecycle = Lifecycle::Mounted;
        self.pending = Some(host.request_frame());
        Ok(())
    }

    /// Replace sizing and surface for a new viewport and re-project the emblem.
    ///
    /// The particle count and order never change. A loop that stalled on a missing surface is
    /// restarted once a surface is available again.
    #[tracing::instrument(skip(self, host))]
    pub fn on_resize(&mut self, host: &mut dyn FrameHost, viewport: ViewportInfo) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.install(viewport);
        if self.lifecycle == Lifecycle::Mounted
            && self.stalled
            && self.surface.is_some()
            && self.pending.is_none()
        {
            tracing::debug!("restarting stalled frame loop");
            self.stalled = false;
            self.pending = Some(host.request_frame());
        }
    }

    /// Run one frame: read progress, simulate, draw, and schedule the next frame.
    ///
    /// Returns `None` without rescheduling when the session is not mounted or has no surface.
    pub fn on_frame(&mut self, host: &mut dyn FrameHost) -> Option<FrameOutput> {
        if self.lifecycle != Lifecycle::Mounted {
            return None;
        }
        self.pending = None;
        let (Some(surface), Some(sizing)) = (self.surface.as_mut(), self.sizing) else {
            if !self.stalled {
                tracing::warn!("no drawing surface; frame loop stalled until the next resize");
            }
            self.stalled = true;
            return None;
        };

        let signals = self.choreography.map(self.progress.get());
        self.simulator.advance(
            &mut self.state,
            &self.geometry,
            &signals,
            self.config.step_secs,
        );

        surface.begin_frame();
        let stats = self
            .renderer
            .render(surface, self.state.store.render(), &self.geometry, &signals);
        surface.finish_frame();

        self.pending = Some(host.request_frame());
        Some(frame_output(
            OverlayInputs {
                params: &self.config.overlay,
                decor: &self.config.decor,
                sizing,
                geometry: &self.geometry,
                clock: self.state.clock,
                frame: self.state.frame,
            },
            signals,
            stats,
        ))
    }

    /// Cancel the pending frame, detach from resize notifications and release the surface.
    ///
    /// Later calls on the session are no-ops.
    #[tracing::instrument(skip(self, host))]
    pub fn dispose(&mut self, host: &mut dyn FrameHost) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        if let Some(id) = self.pending.take() {
            host.cancel_frame(id);
        }
        if self.lifecycle == Lifecycle::Mounted {
            host.detach_resize();
        }
        self.lifecycle = Lifecycle::Disposed;
        self.surface = None;
        tracing::debug!(frames = self.state.frame, "particle session disposed");
    }

    /// Copy of the last drawn frame, if a surface exists.
    pub fn snapshot(&self) -> Option<FrameRGBA> {
        self.surface.as_ref().map(CpuSurface::frame)
    }

    /// Current sizing, if a viewport has been installed.
    pub fn sizing(&self) -> Option<Sizing> {
        self.sizing
    }

    /// Current projected target geometry.
    pub fn geometry(&self) -> &EmblemGeometry {
        &self.geometry
    }

    /// Simulation state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The configuration the session was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// `true` between `mount` and `dispose`.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// `true` when the last frame found no surface and did not reschedule.
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    fn install(&mut self, viewport: ViewportInfo) {
        let sizing = compute_sizing(&viewport, &self.config.sizing);
        let surface = match CpuSurface::new(sizing) {
            Ok(s) => Some(s),
            Err(err) => {
                tracing::warn!(%err, "surface unavailable");
                None
            }
        };
        let geometry = generate(
            &self.config.emblem,
            Projection::fit(&self.config.emblem, sizing.aspect()),
        );
        tracing::debug!(
            css_width = sizing.css_width,
            css_height = sizing.css_height,
            dpr = sizing.dpr,
            "viewport installed"
        );
        (self.sizing, self.surface, self.geometry) = (Some(sizing), surface, geometry);
    }
}
