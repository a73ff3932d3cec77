use super::*;

#[test]
fn endpoints_are_exact() {
    let curves = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        FLIP_REMOVE_CURVE,
        FLIP_INSERT_CURVE,
    ];
    for curve in curves {
        assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
        assert_eq!(curve.apply(1.0), 1.0, "{curve:?} at 1");
    }
}

#[test]
fn apply_clamps_input() {
    assert_eq!(FLIP_REMOVE_CURVE.apply(-0.5), 0.0);
    assert_eq!(FLIP_REMOVE_CURVE.apply(1.5), 1.0);
}

#[test]
fn flip_curves_are_monotone() {
    for curve in [FLIP_REMOVE_CURVE, FLIP_INSERT_CURVE] {
        let mut prev = curve.apply(0.0);
        for i in 1..=100 {
            let v = curve.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{curve:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn mirrored_maps_remove_to_insert_exactly() {
    assert_eq!(FLIP_REMOVE_CURVE.mirrored(), FLIP_INSERT_CURVE);
    assert_eq!(FLIP_INSERT_CURVE.mirrored(), FLIP_REMOVE_CURVE);
}

#[test]
fn mirrored_named_eases_pair_up() {
    assert_eq!(Ease::InQuad.mirrored(), Ease::OutQuad);
    assert_eq!(Ease::OutCubic.mirrored(), Ease::InCubic);
    assert_eq!(Ease::Linear.mirrored(), Ease::Linear);
    assert_eq!(Ease::InOutCubic.mirrored(), Ease::InOutCubic);
}

#[test]
fn insert_is_point_reflection_of_remove() {
    // m(t) == 1 - f(1 - t) across the whole interval, so the pair is
    // velocity-continuous at the phase handoff.
    for i in 0..=100 {
        let t = f64::from(i) / 100.0;
        let reflected = 1.0 - FLIP_REMOVE_CURVE.apply(1.0 - t);
        assert!(
            (FLIP_INSERT_CURVE.apply(t) - reflected).abs() < 1e-9,
            "mismatch at t={t}"
        );
    }
}

#[test]
fn remove_curve_eases_in() {
    // The phase-1 curve starts slow: at 25% time it has covered well under
    // 25% of the motion.
    assert!(FLIP_REMOVE_CURVE.apply(0.25) < 0.20);
    // And its mirror finishes slow.
    assert!(FLIP_INSERT_CURVE.apply(0.75) > 0.80);
}
