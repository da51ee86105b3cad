use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::math::clamp01;
use crate::render::surface::DrawSurface;
use crate::session::sizing::Sizing;
use vello_cpu::kurbo::Shape;

const CURVE_TOLERANCE: f64 = 0.05;

/// A rendered frame as RGBA8 pixels at backing-store resolution.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// CPU raster surface powered by `vello_cpu`.
///
/// The backing pixmap is `css × dpr` pixels; every draw call is scaled by `dpr` so callers stay
/// in CSS pixels.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    sizing: Sizing,
    base: vello_cpu::kurbo::Affine,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("sizing", &self.sizing)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Allocate a surface for `sizing`.
    ///
    /// Fails when the backing store would be empty or exceed `u16::MAX` on either axis.
    pub fn new(sizing: Sizing) -> EngineResult<Self> {
        let w = backing_dim(sizing.backing_width(), "width")?;
        let h = backing_dim(sizing.backing_height(), "height")?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            sizing,
            base: vello_cpu::kurbo::Affine::scale(sizing.dpr),
        })
    }

    /// The sizing this surface was built for.
    pub fn sizing(&self) -> Sizing {
        self.sizing
    }

    /// Start a new frame, discarding previously recorded draw commands.
    pub fn begin_frame(&mut self) {
        self.ctx.reset();
    }

    /// Rasterize the recorded frame into the backing pixmap.
    pub fn finish_frame(&mut self) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
    }

    /// Copy out the last finished frame.
    pub fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.pixmap.width()),
            height: u32::from(self.pixmap.height()),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn prepare(&mut self) {
        self.ctx.set_transform(self.base);
    }
}

impl DrawSurface for CpuSurface {
    fn css_size(&self) -> (f64, f64) {
        (self.sizing.css_width, self.sizing.css_height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb8, alpha: f64) {
        if !visible(alpha) {
            return;
        }
        self.prepare();
        self.ctx.set_paint(cpu_color(color, alpha));
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb8, alpha: f64) {
        if !(visible(alpha) && radius > 0.0 && radius.is_finite()) {
            return;
        }
        self.prepare();
        self.ctx.set_paint(cpu_color(color, alpha));
        self.ctx.fill_path(&circle_path(center, radius));
    }

    fn radial_glow(&mut self, center: Point, radius: f64, color: Rgb8, alpha: f64) {
        if !(visible(alpha) && radius > 0.0 && radius.is_finite()) {
            return;
        }
        self.prepare();
        let gradient = vello_cpu::peniko::Gradient::new_radial(
            vello_cpu::kurbo::Point::new(center.x, center.y),
            radius as f32,
        )
        .with_stops([
            (0.0_f32, cpu_color(color, alpha)),
            (1.0_f32, cpu_color(color, 0.0)),
        ]);
        self.ctx.set_paint(gradient);
        self.ctx.fill_path(&circle_path(center, radius));
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgb8, alpha: f64) {
        if !(visible(alpha) && width > 0.0) {
            return;
        }
        self.prepare();
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(vello_cpu::kurbo::Point::new(from.x, from.y));
        path.line_to(vello_cpu::kurbo::Point::new(to.x, to.y));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.set_paint(cpu_color(color, alpha));
        self.ctx.stroke_path(&path);
    }
}

fn backing_dim(v: u32, axis: &str) -> EngineResult<u16> {
    match u16::try_from(v) {
        Ok(0) => Err(EngineError::surface(format!("backing {axis} is zero"))),
        Ok(d) => Ok(d),
        Err(_) => Err(EngineError::surface(format!(
            "backing {axis} {v} exceeds {}",
            u16::MAX
        ))),
    }
}

fn visible(alpha: f64) -> bool {
    alpha.is_finite() && alpha > 0.0
}

fn cpu_color(color: Rgb8, alpha: f64) -> vello_cpu::peniko::Color {
    let a = (clamp01(alpha) * 255.0).round() as u8;
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, a)
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    vello_cpu::kurbo::Circle::new(vello_cpu::kurbo::Point::new(center.x, center.y), radius)
        .to_path(CURVE_TOLERANCE)
}
