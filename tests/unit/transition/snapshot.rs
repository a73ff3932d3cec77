use super::*;
use crate::transition::controller::FlipConfig;

fn flipping_controller() -> FlipController {
    let mut c = FlipController::new(FlipConfig::default()).unwrap();
    c.set_flipped(true, 0.0);
    c
}

#[test]
fn outgoing_face_maps_progress_to_hinge_parameters() {
    let c = flipping_controller();
    let snap = c.snapshot(0.15, 320.0);
    let p = snap.front.progress;
    assert!(p > 0.0 && p < 1.0);
    assert_eq!(snap.front.rotation_angle_degrees, -90.0);
    assert_eq!(snap.front.rotation_anchor, AnchorEdge::Trailing);
    assert_eq!(snap.front.horizontal_offset, 320.0 * p * -0.5);
    assert_eq!(snap.front.shading_opacity, p);
}

#[test]
fn incoming_face_enters_at_full_rotation() {
    let c = flipping_controller();
    let snap = c.snapshot(0.3, 320.0);
    assert!(snap.back.visible);
    assert_eq!(snap.back.progress, 1.0);
    assert_eq!(snap.back.rotation_angle_degrees, 90.0);
    assert_eq!(snap.back.rotation_anchor, AnchorEdge::Leading);
    assert_eq!(snap.back.horizontal_offset, 160.0);
    assert_eq!(snap.back.shading_opacity, 1.0);
}

#[test]
fn idle_faces_rest_at_identity() {
    let c = FlipController::new(FlipConfig::default()).unwrap();
    let snap = c.snapshot(5.0, 320.0);
    assert_eq!(snap.front.progress, 0.0);
    assert_eq!(snap.front.rotation_angle_degrees, 0.0);
    assert_eq!(snap.front.horizontal_offset, 0.0);
    assert_eq!(snap.front.shading_opacity, 0.0);
}

#[test]
fn some_face_is_visible_at_every_sampled_instant() {
    let mut c = flipping_controller();
    for i in 0..=120 {
        let now = f64::from(i) * 0.005;
        c.advance_to(now);
        let snap = c.snapshot(now, 320.0);
        assert!(
            snap.front.visible || snap.back.visible,
            "no face visible at t={now}"
        );
    }
}

#[test]
fn faces_never_overlap_outside_the_handoff() {
    let mut c = flipping_controller();
    for i in 0..=120 {
        let now = f64::from(i) * 0.005;
        c.advance_to(now);
        let snap = c.snapshot(now, 320.0);
        assert!(
            !(snap.front.visible && snap.back.visible),
            "both faces visible at t={now}"
        );
    }
}

#[test]
fn snapshot_carries_backdrop_and_tightening() {
    let mut c = FlipController::new(FlipConfig {
        background: Rgba8::from_rgb8(30, 30, 34),
        ..FlipConfig::default()
    })
    .unwrap();
    assert!(c.snapshot(0.0, 320.0).content_tightening);
    c.set_flipped(true, 0.0);
    let snap = c.snapshot(0.1, 320.0);
    assert_eq!(snap.background, Rgba8::from_rgb8(30, 30, 34));
    assert!(!snap.content_tightening);
    c.advance_to(0.6);
    assert!(c.snapshot(0.6, 320.0).content_tightening);
}

#[test]
fn sampling_does_not_mutate() {
    let c = flipping_controller();
    let a = c.snapshot(0.2, 320.0);
    let b = c.snapshot(0.2, 320.0);
    assert_eq!(a, b);
    assert!(!c.is_settled());
}
