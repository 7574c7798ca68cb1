// Host-side tests for the smoothing filter and input mappings.

use glam::{DVec2, DVec3};
use holobox_core::{
    gravity_vector, motion_target, pointer_target, rotation_from_screen_angle, tracks_pointer,
    OrientationMode, PerspectiveState,
};

mod common;
use common::approx;

#[test]
fn one_step_moves_a_tenth_of_the_way() {
    let mut s = PerspectiveState::new(DVec2::splat(50.0), DVec2::splat(100.0));
    s.step(0.1);
    assert!(approx(s.current.x, 55.0));
    assert!(approx(s.current.y, 55.0));
    // target untouched by the filter
    assert_eq!(s.target, DVec2::splat(100.0));
}

#[test]
fn repeated_steps_converge_monotonically() {
    let mut s = PerspectiveState::new(DVec2::ZERO, DVec2::splat(100.0));
    let mut prev = s.current.x;
    for _ in 0..50 {
        s.step(0.1);
        assert!(s.current.x > prev);
        assert!(s.current.x < 100.0);
        prev = s.current.x;
    }
    assert!(s.current.x > 99.4, "got {}", s.current.x);
    assert!(s.current.y > 99.4, "got {}", s.current.y);
}

#[test]
fn default_state_rests_at_centre() {
    let s = PerspectiveState::default();
    assert_eq!(s.current, DVec2::new(50.0, 50.0));
    assert_eq!(s.target, DVec2::new(50.0, 50.0));
}

#[test]
fn origin_formats_as_css_percentages() {
    let s = PerspectiveState::new(DVec2::new(63.0, 41.5), DVec2::ZERO);
    assert_eq!(s.origin().to_string(), "63% 41.5%");
}

#[test]
fn pointer_at_viewport_centre_targets_fifty() {
    assert_eq!(
        pointer_target(400.0, 300.0, 800.0, 600.0),
        Some(DVec2::new(50.0, 50.0))
    );
}

#[test]
fn pointer_target_rounds_to_whole_percent() {
    assert_eq!(pointer_target(1.0, 2.0, 3.0, 3.0), Some(DVec2::new(33.0, 67.0)));
    // half-up
    assert_eq!(pointer_target(1.0, 0.0, 200.0, 10.0), Some(DVec2::new(1.0, 0.0)));
}

#[test]
fn pointer_target_is_not_clamped() {
    assert_eq!(
        pointer_target(1200.0, -60.0, 800.0, 600.0),
        Some(DVec2::new(150.0, -10.0))
    );
}

#[test]
fn pointer_target_ignores_empty_viewport() {
    assert_eq!(pointer_target(10.0, 10.0, 0.0, 600.0), None);
    assert_eq!(pointer_target(10.0, 10.0, 800.0, -1.0), None);
    assert_eq!(pointer_target(f64::NAN, 10.0, 800.0, 600.0), None);
}

#[test]
fn motion_portrait_reads_x_for_horizontal() {
    let t = motion_target(DVec3::new(-2.5, 4.0, -5.0), OrientationMode::Portrait, 5.0).unwrap();
    assert!(approx(t.x, 100.0));
    assert!(approx(t.y, 50.0));
}

#[test]
fn motion_landscape_reads_y_for_horizontal() {
    let t = motion_target(DVec3::new(4.0, 2.5, 0.0), OrientationMode::Landscape, 5.0).unwrap();
    assert!(approx(t.x, 0.0));
    assert!(approx(t.y, -50.0));
}

#[test]
fn motion_vertical_axis_is_the_same_in_both_modes() {
    let accel = DVec3::new(1.0, -1.0, -3.0);
    let p = motion_target(accel, OrientationMode::Portrait, 5.0).unwrap();
    let l = motion_target(accel, OrientationMode::Landscape, 5.0).unwrap();
    assert!(approx(p.y, l.y));
    assert!(approx(p.y, 10.0));
    assert!(!approx(p.x, l.x));
}

#[test]
fn motion_extremes_leave_the_box() {
    let t = motion_target(DVec3::new(-20.0, 0.0, 0.0), OrientationMode::Portrait, 5.0).unwrap();
    assert!(t.x > 100.0);
}

#[test]
fn motion_rejects_non_finite_samples() {
    let bad = DVec3::new(f64::NAN, 0.0, 0.0);
    assert_eq!(motion_target(bad, OrientationMode::Portrait, 5.0), None);
}

#[test]
fn orientation_from_rotation() {
    assert_eq!(OrientationMode::from_rotation(90.0), OrientationMode::Landscape);
    assert_eq!(OrientationMode::from_rotation(-90.0), OrientationMode::Landscape);
    assert_eq!(OrientationMode::from_rotation(0.0), OrientationMode::Portrait);
    assert_eq!(OrientationMode::from_rotation(180.0), OrientationMode::Portrait);
    assert_eq!(OrientationMode::default(), OrientationMode::Portrait);
}

#[test]
fn screen_angle_folds_into_window_rotation() {
    assert_eq!(rotation_from_screen_angle(0), 0.0);
    assert_eq!(rotation_from_screen_angle(90), 90.0);
    assert_eq!(rotation_from_screen_angle(180), 180.0);
    assert_eq!(rotation_from_screen_angle(270), -90.0);
}

#[test]
fn orientation_from_screen_angle() {
    assert_eq!(OrientationMode::from_screen_angle(90), OrientationMode::Landscape);
    assert_eq!(OrientationMode::from_screen_angle(270), OrientationMode::Landscape);
    assert_eq!(OrientationMode::from_screen_angle(0), OrientationMode::Portrait);
    assert_eq!(OrientationMode::from_screen_angle(180), OrientationMode::Portrait);
}

#[test]
fn gravity_vector_needs_every_axis() {
    assert_eq!(
        gravity_vector(Some(1.0), Some(-2.0), Some(9.8)),
        Some(DVec3::new(1.0, -2.0, 9.8))
    );
    assert_eq!(gravity_vector(None, Some(-2.0), Some(9.8)), None);
    assert_eq!(gravity_vector(Some(1.0), None, Some(9.8)), None);
    assert_eq!(gravity_vector(Some(1.0), Some(-2.0), None), None);
}

#[test]
fn only_mouse_pointers_steer_the_box() {
    assert!(tracks_pointer("mouse"));
    assert!(!tracks_pointer("touch"));
    assert!(!tracks_pointer("pen"));
    assert!(!tracks_pointer(""));
}
