use super::*;

#[test]
fn builtin_emblem_is_valid_and_counts_match() {
    let spec = EmblemSpec::graduate();
    spec.validate().unwrap();
    let g = generate(&spec, Projection::fit(&spec, 1.0));
    assert_eq!(g.len(), spec.point_count());
    assert_eq!(g.sphere_indices.len(), 36 + 26 + 16 + 7);
    for &i in &g.sphere_indices {
        assert_eq!(g.points[i].group, Group::Sphere);
    }
    for group in [Group::Cap, Group::Tassel, Group::Highlight] {
        assert!(g.points.iter().any(|p| p.group == group), "{group:?} missing");
    }
    assert!(g.tassel_pivot.is_some());
    assert!(g.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn generation_is_deterministic() {
    let spec = EmblemSpec::graduate();
    let p = Projection::fit(&spec, 0.6);
    assert_eq!(generate(&spec, p), generate(&spec, p));
}

#[test]
fn reprojection_keeps_order_and_groups() {
    let spec = EmblemSpec::graduate();
    let a = generate(&spec, Projection::fit(&spec, 1.0));
    let b = generate(&spec, Projection::fit(&spec, 0.4));
    assert_eq!(a.len(), b.len());
    assert_eq!(a.sphere_indices, b.sphere_indices);
    for (pa, pb) in a.points.iter().zip(&b.points) {
        assert_eq!(pa.group, pb.group);
    }
}

#[test]
fn identity_projection_is_a_no_op() {
    let p = Point::new(3.5, -2.0);
    assert_eq!(Projection::IDENTITY.apply(p), p);
}

#[test]
fn fit_is_uniform_in_pixel_space() {
    let spec = EmblemSpec {
        layers: vec![ShapeLayer {
            group: Group::Sphere,
            shape: ShapeSpec::Ring {
                center: Point::new(256.0, 256.0),
                radius: 100.0,
                count: 24,
            },
        }],
        anchor: Point::new(256.0, 256.0),
        ..EmblemSpec::graduate()
    };
    let (w, h) = (1600.0, 800.0);
    let g = generate(&spec, Projection::fit(&spec, h / w));
    let anchor_px = Point::new(g.anchor.x * w, g.anchor.y * h);
    let radii: Vec<f64> = g
        .points
        .iter()
        .map(|p| (Point::new(p.x * w, p.y * h) - anchor_px).hypot())
        .collect();
    let r0 = radii[0];
    assert!(r0 > 0.0);
    assert!(radii.iter().all(|r| (r - r0).abs() < 1e-6));
    // View-box center lands on the configured viewport center.
    assert!((g.anchor.x - 0.5).abs() < 1e-12);
    assert!((g.anchor.y - 0.5).abs() < 1e-12);
}

#[test]
fn fit_respects_width_bound_on_narrow_viewports() {
    let spec = EmblemSpec::graduate();
    let narrow = Projection::fit(&spec, 3.0);
    let width_fraction = spec.view_box.width() * narrow.scale * narrow.aspect;
    assert!(width_fraction <= spec.width_fraction + 1e-12);
}

#[test]
fn empty_emblem_generates_nothing() {
    let spec = EmblemSpec {
        layers: Vec::new(),
        ..EmblemSpec::graduate()
    };
    let g = generate(&spec, Projection::IDENTITY);
    assert!(g.is_empty());
    assert!(g.sphere_indices.is_empty());
    assert!(g.tassel_pivot.is_none());
}

#[test]
fn validate_rejects_bad_specs() {
    let zero_box = EmblemSpec {
        view_box: Rect::new(0.0, 0.0, 0.0, 10.0),
        ..EmblemSpec::graduate()
    };
    assert!(zero_box.validate().is_err());

    let bad_spacing = EmblemSpec {
        layers: vec![ShapeLayer {
            group: Group::Cap,
            shape: ShapeSpec::Rhombus {
                rhombus: Rhombus {
                    top: Point::new(0.0, 0.0),
                    left: Point::new(-1.0, 1.0),
                    right: Point::new(1.0, 1.0),
                    bottom: Point::new(0.0, 2.0),
                },
                rows: 4,
                column_spacing: 0.0,
            },
        }],
        ..EmblemSpec::graduate()
    };
    assert!(bad_spacing.validate().is_err());

    let dense = EmblemSpec {
        layers: vec![ShapeLayer {
            group: Group::Cap,
            shape: ShapeSpec::Rhombus {
                rhombus: Rhombus {
                    top: Point::new(0.0, 0.0),
                    left: Point::new(-1000.0, 1.0),
                    right: Point::new(1000.0, 1.0),
                    bottom: Point::new(0.0, 2.0),
                },
                rows: 4,
                column_spacing: 0.01,
            },
        }],
        ..EmblemSpec::graduate()
    };
    assert!(dense.validate().is_err());
}

#[test]
fn point_bound_covers_generated_points() {
    let spec = EmblemSpec::graduate();
    let bound: f64 = spec.layers.iter().map(|l| l.shape.point_bound()).sum();
    assert!(bound >= spec.point_count() as f64);
    assert!(bound <= MAX_POINTS as f64);
}

#[test]
fn layers_parse_from_tagged_json() {
    let json = r#"{ "group": "highlight", "shape": { "kind": "dots", "points": [{ "x": 1.0, "y": 2.0 }] } }"#;
    let layer: ShapeLayer = serde_json::from_str(json).unwrap();
    assert_eq!(layer.group, Group::Highlight);
    assert_eq!(layer.shape.points(), vec![Point::new(1.0, 2.0)]);
}
