use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::{EngineError, EngineResult};
use crate::geometry::shapes::{
    Rhombus, clipped_grid_points, fixed_points, path_samples, ring_points, rounded_block_points,
    shell_points,
};

/// Most target points an emblem may generate, per shape and in total.
pub const MAX_POINTS: usize = 20_000;

/// Emblem part a target point belongs to; selects palette and connection eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// The globe body. Only this group participates in connection lines.
    Sphere,
    /// Mortarboard and skull band.
    Cap,
    /// Hanging cord and knot.
    Tassel,
    /// Specular accent dots.
    Highlight,
}

/// One particle destination in normalized viewport space (`0..1` on both axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPoint {
    /// Horizontal viewport fraction.
    pub x: f64,
    /// Vertical viewport fraction.
    pub y: f64,
    /// Owning emblem part.
    pub group: Group,
}

/// A primitive shape in view-box coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Evenly spaced outline of a circle.
    Ring {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Number of points.
        count: usize,
    },
    /// Concentric phase-shifted rings filling a disk.
    Shells {
        /// Shared center.
        center: Point,
        /// Shell radii, outermost first.
        radii: Vec<f64>,
        /// Points per shell.
        counts: Vec<usize>,
    },
    /// Row-scanned rhombus fill.
    Rhombus {
        /// Rhombus vertices.
        rhombus: Rhombus,
        /// Number of row intervals; `rows + 1` rows are emitted.
        rows: usize,
        /// Target spacing between columns.
        column_spacing: f64,
    },
    /// Grid inside a rounded rectangle.
    RoundedBlock {
        /// Block bounds.
        rect: Rect,
        /// Corner radius.
        corner_radius: f64,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },
    /// Arc-length samples along a polyline.
    Polyline {
        /// Control points in drawing order.
        points: Vec<Point>,
        /// Number of samples.
        samples: usize,
    },
    /// Explicit accent points.
    Dots {
        /// The points.
        points: Vec<Point>,
    },
}

impl ShapeSpec {
    /// Generate this shape's points in view-box coordinates.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Ring {
                center,
                radius,
                count,
            } => ring_points(*center, *radius, *count),
            Self::Shells {
                center,
                radii,
                counts,
            } => shell_points(*center, radii, counts),
            Self::Rhombus {
                rhombus,
                rows,
                column_spacing,
            } => clipped_grid_points(*rhombus, *rows, *column_spacing),
            Self::RoundedBlock {
                rect,
                corner_radius,
                rows,
                cols,
            } => rounded_block_points(*rect, *corner_radius, *rows, *cols),
            Self::Polyline { points, samples } => path_samples(points, *samples),
            Self::Dots { points } => fixed_points(points),
        }
    }

    /// Upper bound on how many points [`points`](Self::points) yields, computed without
    /// generating them.
    pub fn point_bound(&self) -> f64 {
        match self {
            Self::Ring { count, .. } => *count as f64,
            Self::Shells { radii, counts, .. } => {
                counts.iter().take(radii.len()).map(|&n| n as f64).sum()
            }
            Self::Rhombus {
                rhombus,
                rows,
                column_spacing,
            } => {
                let half = (rhombus.right.x - rhombus.left.x).abs() * 0.5;
                let cols = (half / column_spacing).round().max(2.0);
                (*rows as f64 + 1.0) * cols
            }
            Self::RoundedBlock { rows, cols, .. } => {
                (*rows).max(2) as f64 * (*cols).max(2) as f64
            }
            Self::Polyline { samples, .. } => *samples as f64,
            Self::Dots { points } => points.len() as f64,
        }
    }

    fn validate(&self) -> EngineResult<()> {
        let finite = |p: &Point| p.x.is_finite() && p.y.is_finite();
        let ok = match self {
            Self::Ring { center, radius, .. } => finite(center) && radius.is_finite(),
            Self::Shells { center, radii, .. } => {
                finite(center) && radii.iter().all(|r| r.is_finite())
            }
            Self::Rhombus {
                rhombus,
                column_spacing,
                ..
            } => {
                [rhombus.top, rhombus.left, rhombus.right, rhombus.bottom]
                    .iter()
                    .all(finite)
                    && column_spacing.is_finite()
                    && *column_spacing > 0.0
            }
            Self::RoundedBlock {
                rect,
                corner_radius,
                ..
            } => {
                finite(&rect.origin()) && finite(&Point::new(rect.x1, rect.y1))
                    && corner_radius.is_finite()
            }
            Self::Polyline { points, .. } | Self::Dots { points } => points.iter().all(finite),
        };
        if !ok {
            return Err(EngineError::validation(
                "emblem shape contains non-finite coordinates or non-positive spacing",
            ));
        }
        let bound = self.point_bound();
        if !(bound <= MAX_POINTS as f64) {
            return Err(EngineError::validation(format!(
                "emblem shape would generate {bound} points (max {MAX_POINTS})"
            )));
        }
        Ok(())
    }
}

/// A shape tagged with the emblem part it draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeLayer {
    /// Owning part.
    pub group: Group,
    /// Geometry.
    pub shape: ShapeSpec,
}

/// Declarative emblem description in an icon-style view-box coordinate space.
///
/// Layer order defines target order, which defines particle order. Fields missing from a
/// serialized spec fall back to [`EmblemSpec::graduate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EmblemSpec {
    /// Coordinate space the layers are expressed in.
    pub view_box: Rect,
    /// Focal point (globe center) in view-box coordinates.
    pub anchor: Point,
    /// Viewport position, as fractions, of the view-box center.
    pub center: Point,
    /// View-box height as a fraction of viewport height.
    pub height_fraction: f64,
    /// Upper bound on view-box width as a fraction of viewport width.
    pub width_fraction: f64,
    /// Shapes in target order.
    pub layers: Vec<ShapeLayer>,
}

impl Default for EmblemSpec {
    fn default() -> Self {
        Self::graduate()
    }
}

impl EmblemSpec {
    /// Built-in emblem: a globe wearing a mortarboard with a hanging tassel.
    pub fn graduate() -> Self {
        let globe = Point::new(256.0, 300.0);
        Self {
            view_box: Rect::new(0.0, 0.0, 512.0, 512.0),
            anchor: globe,
            center: Point::new(0.5, 0.5),
            height_fraction: 0.55,
            width_fraction: 0.85,
            layers: vec![
                ShapeLayer {
                    group: Group::Sphere,
                    shape: ShapeSpec::Ring {
                        center: globe,
                        radius: 150.0,
                        count: 36,
                    },
                },
                ShapeLayer {
                    group: Group::Sphere,
                    shape: ShapeSpec::Shells {
                        center: globe,
                        radii: vec![110.0, 70.0, 32.0],
                        counts: vec![26, 16, 7],
                    },
                },
                ShapeLayer {
                    group: Group::Cap,
                    shape: ShapeSpec::Rhombus {
                        rhombus: Rhombus {
                            top: Point::new(256.0, 70.0),
                            left: Point::new(76.0, 150.0),
                            right: Point::new(436.0, 150.0),
                            bottom: Point::new(256.0, 230.0),
                        },
                        rows: 10,
                        column_spacing: 24.0,
                    },
                },
                ShapeLayer {
                    group: Group::Cap,
                    shape: ShapeSpec::RoundedBlock {
                        rect: Rect::new(171.0, 190.0, 341.0, 250.0),
                        corner_radius: 18.0,
                        rows: 3,
                        cols: 7,
                    },
                },
                ShapeLayer {
                    group: Group::Tassel,
                    shape: ShapeSpec::Polyline {
                        points: vec![
                            Point::new(256.0, 150.0),
                            Point::new(400.0, 162.0),
                            Point::new(414.0, 250.0),
                            Point::new(414.0, 300.0),
                        ],
                        samples: 16,
                    },
                },
                ShapeLayer {
                    group: Group::Tassel,
                    shape: ShapeSpec::Dots {
                        points: vec![
                            Point::new(406.0, 312.0),
                            Point::new(414.0, 318.0),
                            Point::new(422.0, 312.0),
                            Point::new(414.0, 306.0),
                        ],
                    },
                },
                ShapeLayer {
                    group: Group::Highlight,
                    shape: ShapeSpec::Dots {
                        points: vec![
                            Point::new(196.0, 256.0),
                            Point::new(212.0, 240.0),
                            Point::new(184.0, 276.0),
                            Point::new(230.0, 232.0),
                        ],
                    },
                },
            ],
        }
    }

    /// Check that every coordinate is finite and the placement fractions are usable.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.view_box.width().abs() > 0.0 && self.view_box.height().abs() > 0.0) {
            return Err(EngineError::validation(
                "emblem view_box must have non-zero area",
            ));
        }
        for f in [self.height_fraction, self.width_fraction] {
            if !(f.is_finite() && f > 0.0) {
                return Err(EngineError::validation(
                    "emblem height_fraction/width_fraction must be > 0",
                ));
            }
        }
        if !(self.anchor.x.is_finite()
            && self.anchor.y.is_finite()
            && self.center.x.is_finite()
            && self.center.y.is_finite())
        {
            return Err(EngineError::validation(
                "emblem anchor/center must be finite",
            ));
        }
        for layer in &self.layers {
            layer.shape.validate()?;
        }
        let total: f64 = self.layers.iter().map(|l| l.shape.point_bound()).sum();
        if !(total <= MAX_POINTS as f64) {
            return Err(EngineError::validation(format!(
                "emblem would generate {total} points (max {MAX_POINTS})"
            )));
        }
        Ok(())
    }

    /// Number of target points this spec generates; independent of projection.
    pub fn point_count(&self) -> usize {
        self.layers
            .iter()
            .fold(0usize, |acc, l| acc.saturating_add(l.shape.points().len()))
    }
}

/// Maps view-box coordinates into normalized viewport space.
///
/// The scale is uniform in pixel space: `aspect = height / width` compensates the x axis so the
/// emblem keeps its proportions on non-square viewports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// View-box units to viewport-height fractions.
    pub scale: f64,
    /// Normalized position of the view-box origin.
    pub offset: Vec2,
    /// Viewport height over width.
    pub aspect: f64,
}

impl Projection {
    /// Leaves coordinates unchanged.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
        aspect: 1.0,
    };

    /// Fit `spec` into a viewport with the given `aspect` (height / width).
    pub fn fit(spec: &EmblemSpec, aspect: f64) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let vb = spec.view_box.abs();
        let by_height = spec.height_fraction / vb.height().max(f64::EPSILON);
        let by_width = spec.width_fraction / (vb.width().max(f64::EPSILON) * aspect);
        let scale = by_height.min(by_width);
        let c = vb.center();
        Self {
            scale,
            offset: Vec2::new(
                spec.center.x - c.x * scale * aspect,
                spec.center.y - c.y * scale,
            ),
            aspect,
        }
    }

    /// Project one point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.offset.x + p.x * self.scale * self.aspect,
            self.offset.y + p.y * self.scale,
        )
    }
}

/// The projected point cloud plus the reference points the simulator and renderer need.
#[derive(Clone, Debug, PartialEq)]
pub struct EmblemGeometry {
    /// Target points; index `i` belongs to particle `i`.
    pub points: Vec<TargetPoint>,
    /// Indices of [`Group::Sphere`] points, in order.
    pub sphere_indices: Vec<usize>,
    /// Projected focal point.
    pub anchor: Point,
    /// Projected tassel attachment point, if the emblem has a tassel.
    pub tassel_pivot: Option<Point>,
    /// View-box height in viewport-height fractions.
    pub height: f64,
    /// Aspect the geometry was projected for.
    pub aspect: f64,
}

impl EmblemGeometry {
    /// Number of target points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the emblem produced no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Generate the ordered target cloud for `spec` under `projection`.
pub fn generate(spec: &EmblemSpec, projection: Projection) -> EmblemGeometry {
    let mut points = Vec::new();
    let mut sphere_indices = Vec::new();
    let mut tassel_pivot = None;

    for layer in &spec.layers {
        let raw = layer.shape.points();
        if layer.group == Group::Tassel && tassel_pivot.is_none() {
            let attach = match &layer.shape {
                ShapeSpec::Polyline { points, .. } => points.first().copied(),
                _ => raw.first().copied(),
            };
            tassel_pivot = attach.map(|p| projection.apply(p));
        }
        for p in raw {
            if layer.group == Group::Sphere {
                sphere_indices.push(points.len());
            }
            let q = projection.apply(p);
            points.push(TargetPoint {
                x: q.x,
                y: q.y,
                group: layer.group,
            });
        }
    }

    EmblemGeometry {
        points,
        sphere_indices,
        anchor: projection.apply(spec.anchor),
        tassel_pivot,
        height: spec.view_box.height().abs() * projection.scale,
        aspect: projection.aspect,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/emblem.rs"]
mod tests;
