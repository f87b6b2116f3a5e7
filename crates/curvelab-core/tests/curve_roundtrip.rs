use curvelab_core::{CurveError, Preset, TimingCurve};

#[test]
fn scalars_roundtrip_exact() {
    let cases: [[f32; 4]; 4] = [
        [0.42, 0.0, 1.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.25, 0.1, 0.25, 1.0],
        // Overshoot stays unclamped
        [0.3, -0.4, 0.7, 1.6],
    ];
    for scalars in cases {
        let curve = TimingCurve::from_scalars(&scalars).expect("valid scalars");
        assert_eq!(curve.control_points(), scalars);
        assert_eq!(TimingCurve::from_scalars(&curve.control_points()), Ok(curve));
    }
}

#[test]
fn wrong_length_rejected() {
    for scalars in [&[][..], &[0.1][..], &[0.1, 0.2, 0.3][..], &[0.1, 0.2, 0.3, 0.4, 0.5][..]] {
        match TimingCurve::from_scalars(scalars) {
            Err(CurveError::InvalidControlPointCount { count }) => {
                assert_eq!(count, scalars.len());
            }
            other => panic!("expected InvalidControlPointCount, got {other:?}"),
        }
    }
}

#[test]
fn non_finite_scalars_rejected() {
    assert!(matches!(
        TimingCurve::from_scalars(&[f32::NAN, 0.0, 1.0, 1.0]),
        Err(CurveError::NonFiniteControlPoint(_))
    ));
    assert!(matches!(
        TimingCurve::from_scalars(&[0.0, 0.0, f32::INFINITY, 1.0]),
        Err(CurveError::NonFiniteControlPoint(_))
    ));
}

#[test]
fn preset_literals_match_standard() {
    let ease_in = TimingCurve::from_preset_name("ease-in").expect("known preset");
    assert_eq!(ease_in.control_points(), [0.42, 0.0, 1.0, 1.0]);

    assert_eq!(
        TimingCurve::from_preset(Preset::EaseOut).control_points(),
        [0.0, 0.0, 0.58, 1.0]
    );
    assert_eq!(
        TimingCurve::from_preset(Preset::EaseInEaseOut).control_points(),
        [0.42, 0.0, 0.58, 1.0]
    );
    assert_eq!(
        TimingCurve::from_preset(Preset::Linear).control_points(),
        [0.0, 0.0, 1.0, 1.0]
    );
    assert_eq!(
        TimingCurve::from_preset(Preset::Default).control_points(),
        [0.25, 0.1, 0.25, 1.0]
    );
    // Toolkit default doubles as Default::default()
    assert_eq!(TimingCurve::default().control_points(), [0.25, 0.1, 0.25, 1.0]);
}

#[test]
fn preset_names_parse_both_spellings() {
    for (name, preset) in [
        ("linear", Preset::Linear),
        ("ease-in", Preset::EaseIn),
        ("easeIn", Preset::EaseIn),
        ("EASE-OUT", Preset::EaseOut),
        ("ease-in-ease-out", Preset::EaseInEaseOut),
        ("easeInEaseOut", Preset::EaseInEaseOut),
        ("default", Preset::Default),
    ] {
        assert_eq!(name.parse::<Preset>(), Ok(preset), "name {name:?}");
    }
}

#[test]
fn unknown_preset_rejected() {
    match TimingCurve::from_preset_name("bouncy") {
        Err(CurveError::UnknownPreset(name)) => assert_eq!(name, "bouncy"),
        other => panic!("expected UnknownPreset, got {other:?}"),
    }
}

#[test]
fn point_replacement_builds_new_value() {
    let base = TimingCurve::from_preset(Preset::EaseIn);
    let snapshot = base;
    let moved = base.with_point_a(curvelab_core::Vec2::new(0.1, 0.9));
    assert_eq!(moved.control_points(), [0.1, 0.9, 1.0, 1.0]);
    // The original snapshot is untouched.
    assert_eq!(snapshot.control_points(), [0.42, 0.0, 1.0, 1.0]);
}
