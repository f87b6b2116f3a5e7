use curvelab_core::{parse_timing_curve_json, timing_curve_to_json, CurveError, TimingCurve};

#[test]
fn all_shapes_normalize_to_same_curve() {
    let from_array = parse_timing_curve_json("[0.42, 0, 1, 1]").unwrap();
    let from_name = parse_timing_curve_json(r#"{ "name": "ease-in" }"#).unwrap();
    let from_points =
        parse_timing_curve_json(r#"{ "x1": 0.42, "y1": 0, "x2": 1, "y2": 1 }"#).unwrap();

    assert_eq!(from_array, from_name);
    assert_eq!(from_array, from_points);
    assert_eq!(from_array.control_points(), [0.42, 0.0, 1.0, 1.0]);
}

#[test]
fn canonical_form_roundtrips() {
    let curve = TimingCurve::new(0.25, 0.5, 0.75, 1.0);
    let json = timing_curve_to_json(&curve);
    assert_eq!(json, serde_json::json!([0.25, 0.5, 0.75, 1.0]));
    let back = parse_timing_curve_json(&json.to_string()).unwrap();
    assert_eq!(back, curve);
}

#[test]
fn wrong_array_length_surfaces_count_error() {
    match parse_timing_curve_json("[0.1, 0.2, 0.3]") {
        Err(CurveError::InvalidControlPointCount { count: 3 }) => {}
        other => panic!("expected InvalidControlPointCount, got {other:?}"),
    }
}

#[test]
fn unknown_name_surfaces_preset_error() {
    assert!(matches!(
        parse_timing_curve_json(r#"{ "name": "zippy" }"#),
        Err(CurveError::UnknownPreset(_))
    ));
}

#[test]
fn malformed_json_rejected() {
    assert!(matches!(
        parse_timing_curve_json("{ not json"),
        Err(CurveError::Json(_))
    ));
    assert!(matches!(
        parse_timing_curve_json(r#"{ "x1": 0.1 }"#),
        Err(CurveError::Json(_))
    ));
    assert!(matches!(
        parse_timing_curve_json(r#"["a", "b", "c", "d"]"#),
        Err(CurveError::Json(_))
    ));
}
