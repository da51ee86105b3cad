use super::*;

#[test]
fn defaults_validate() {
    EngineConfig::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = EngineConfig::from_json_str(
        r#"{ "seed": 7, "choreography": { "fade_out": { "start": 0.7, "end": 0.85 } } }"#,
    )
    .unwrap();
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.choreography.fade_out.start, 0.7);
    assert_eq!(cfg.choreography.formation, Choreography::default().formation);
    assert_eq!(cfg.emblem, EmblemSpec::graduate());
}

#[test]
fn json_round_trips_through_serde() {
    let cfg = EngineConfig::default();
    let text = serde_json::to_string(&cfg).unwrap();
    let back = EngineConfig::from_json_str(&text).unwrap();
    assert_eq!(back.seed, cfg.seed);
    assert_eq!(back.emblem.point_count(), cfg.emblem.point_count());
    assert!((back.step_secs - cfg.step_secs).abs() < 1e-12);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = EngineConfig::from_json_str("{ seed: ").unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn rejects_bad_values() {
    for json in [
        r#"{ "step_secs": 0.0 }"#,
        r#"{ "sizing": { "max_dpr": 0.0 } }"#,
        r#"{ "choreography": { "formation": { "start": 0.5, "end": 0.1 } } }"#,
        r#"{ "simulation": { "wrap_margin": -1.0 } }"#,
    ] {
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn oversized_emblems_are_rejected_before_generation() {
    for shape in [
        r#"{ "kind": "shells", "center": { "x": 0.0, "y": 0.0 }, "radii": [1.0, 2.0], "counts": [18446744073709551615, 2] }"#,
        r#"{ "kind": "rhombus", "rhombus": { "top": { "x": 0.0, "y": 0.0 }, "left": { "x": -100.0, "y": 1.0 }, "right": { "x": 100.0, "y": 1.0 }, "bottom": { "x": 0.0, "y": 2.0 } }, "rows": 4, "column_spacing": 1e-9 }"#,
        r#"{ "kind": "ring", "center": { "x": 0.0, "y": 0.0 }, "radius": 1.0, "count": 20001 }"#,
    ] {
        let json = format!(
            r#"{{ "emblem": {{ "layers": [{{ "group": "sphere", "shape": {shape} }}] }} }}"#
        );
        let err = EngineConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)), "{shape}: {err}");
    }

    // Layers that are each within bounds but too many together.
    let ring = r#"{ "group": "sphere", "shape": { "kind": "ring", "center": { "x": 0.0, "y": 0.0 }, "radius": 1.0, "count": 15000 } }"#;
    let json = format!(r#"{{ "emblem": {{ "layers": [{ring}, {ring}] }} }}"#);
    assert!(matches!(
        EngineConfig::from_json_str(&json),
        Err(EngineError::Validation(_))
    ));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = EngineConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("not/here.json"));
}
