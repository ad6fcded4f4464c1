// Host-side tests for the scene: gestures, zoom, the animation tick, pause,
// click-to-activate and bounce cancellation.

use glam::Vec3;
use heart_core::animation::pulse_scale;
use heart_core::constants::*;
use heart_core::geometry::{extrude, heart_outline, ExtrudeSettings};
use heart_core::input::{InputController, PointerPhase};
use heart_core::{Scene, SceneEvent, Viewport};

fn scene() -> Scene {
    Scene::with_seed(11, Viewport::new(800.0, 600.0)).expect("scene")
}

/// Viewport position of a point well inside the heart's silhouette.
fn point_on_heart(scene: &Scene) -> (f32, f32) {
    // (5, 7) in outline space lies between the notch and the tip
    let raw = extrude(&heart_outline(CURVE_SEGMENTS), &ExtrudeSettings::default()).expect("mesh");
    let c = raw.bounding_box().center();
    let local = Vec3::new(5.0 - c.x, -7.0 - c.y, 0.0);
    let world = scene.heart().model_matrix().transform_point3(local);
    let p = scene.camera.project(world, scene.viewport()).expect("in front of camera");
    (p.x, p.y)
}

#[test]
fn click_without_movement_requests_one_hit_test() {
    let mut c = InputController::default();
    c.pointer_down(50.0, 50.0);
    assert_eq!(c.phase(), PointerPhase::Pressed);
    assert!(c.pointer_up(50.0, 50.0).is_some());
    assert_eq!(c.phase(), PointerPhase::Idle);
    assert!(c.pointer_up(50.0, 50.0).is_none());
}

#[test]
fn drag_release_requests_no_hit_test() {
    let mut c = InputController::default();
    c.pointer_down(50.0, 50.0);
    c.pointer_move(55.0, 50.0);
    assert!(c.is_dragging());
    assert!(c.pointer_up(55.0, 50.0).is_none());
    assert!(!c.is_dragging());
}

#[test]
fn zoom_is_clamped_at_both_ends() {
    let mut s = scene();
    assert_eq!(s.camera.distance(), CAMERA_Z_DEFAULT);
    s.wheel(1000.0);
    assert!((s.camera.distance() - 7.0).abs() < 1e-5);
    for _ in 0..1000 {
        s.wheel(1.0e6);
    }
    assert_eq!(s.camera.distance(), CAMERA_Z_MAX);
    s.wheel(-1.0e9);
    assert_eq!(s.camera.distance(), CAMERA_Z_MIN);
}

#[test]
fn rotation_contracts_by_fixed_factor() {
    let mut s = scene();
    s.config.is_animating = false;
    s.pointer_down(0.0, 0.0);
    s.pointer_move(100.0, 0.0);
    assert!(s.pointer_up(100.0, 0.0).is_none());
    let target = s.input().target_rotation().y;
    assert!((target - 1.0).abs() < 1e-5);

    let mut gap = target - s.input().current_rotation().y;
    for _ in 0..50 {
        s.tick();
        let next = target - s.input().current_rotation().y;
        assert!(next >= 0.0, "overshoot");
        assert!((next / gap - (1.0 - ROTATION_SMOOTHING)).abs() < 1e-3);
        gap = next;
    }
}

#[test]
fn idle_auto_rotation_pauses_while_pressed() {
    let mut s = scene();
    s.tick();
    let after_one = s.input().target_rotation().y;
    assert!((after_one - AUTO_ROTATE_STEP).abs() < 1e-7);
    s.pointer_down(10.0, 10.0);
    s.tick();
    assert_eq!(s.input().target_rotation().y, after_one);
}

#[test]
fn cancelled_press_resumes_auto_rotation() {
    let mut s = scene();
    let (x, y) = point_on_heart(&s);
    s.pointer_down(x, y);
    s.pointer_cancel();
    assert!(!s.input().is_pressed());
    let before = s.input().target_rotation().y;
    s.tick();
    assert!((s.input().target_rotation().y - before - AUTO_ROTATE_STEP).abs() < 1e-7);
    // The release that follows a cancel is not a click
    assert!(s.pointer_up(x, y).is_none());
    assert!(!s.overlay().is_visible());
}

#[test]
fn time_advances_by_speed_scaled_step() {
    let mut s = scene();
    s.set_speed(2.0);
    for _ in 0..10 {
        s.tick();
    }
    assert!((s.time() - 10.0 * (TIME_STEP * 2.0) as f64).abs() < 1e-5);
    s.set_speed(100.0);
    assert_eq!(s.config.speed(), SPEED_MAX);
}

#[test]
fn time_keeps_advancing_on_long_runs() {
    let mut s = scene();
    // Paused ticks skip the particle work, so the long run stays cheap
    s.toggle_animation();
    s.set_speed(SPEED_MAX);
    while s.time() < 32_768.0 {
        s.tick();
    }
    s.toggle_animation();
    s.set_speed(SPEED_MIN);
    let start = s.time();
    s.tick();
    let first_scale = s.heart().scale;
    for _ in 0..599 {
        s.tick();
    }
    let expected = 600.0 * (TIME_STEP * SPEED_MIN) as f64;
    assert!((s.time() - start - expected).abs() < 1e-6, "time {start} -> {}", s.time());
    assert_ne!(s.heart().scale, first_scale);
}

#[test]
fn pulse_scales_heart_while_animating() {
    let mut s = scene();
    for _ in 0..30 {
        s.tick();
        let expected = HEART_BASE_SCALE * pulse_scale(s.time());
        assert!((s.heart().scale - expected).abs() < 1e-6);
    }
}

#[test]
fn pause_freezes_cosmetics_but_not_manual_rotation() {
    let mut s = scene();
    for _ in 0..20 {
        s.tick();
    }
    assert!(!s.toggle_animation());

    s.tick();
    let color = s.heart().color;
    let positions: Vec<Vec3> = s.particles().particles().iter().map(|p| p.position).collect();
    let cloud_rotation = s.particles().rotation;
    for _ in 0..20 {
        s.tick();
        assert_eq!(s.heart().scale, HEART_BASE_SCALE);
        assert_eq!(s.heart().color, color);
        assert_eq!(s.particles().rotation, cloud_rotation);
    }
    let after: Vec<Vec3> = s.particles().particles().iter().map(|p| p.position).collect();
    assert_eq!(positions, after);

    let before = s.heart().rotation;
    s.pointer_down(100.0, 100.0);
    s.pointer_move(160.0, 130.0);
    s.tick();
    s.pointer_up(160.0, 130.0);
    let rotated = s.heart().rotation;
    assert!(rotated.y > before.y);
    assert!(rotated.x > before.x);
}

#[test]
fn clicking_the_heart_shows_the_overlay() {
    let mut s = scene();
    let (x, y) = point_on_heart(&s);
    assert!(s.hit_test(x, y).is_some());
    s.pointer_down(x, y);
    let event = s.pointer_up(x, y);
    assert!(matches!(event, Some(SceneEvent::HeartActivated { .. })));
    assert!(s.overlay().is_visible());

    let url = s.acknowledge_overlay().expect("link while visible");
    assert!(url.starts_with("https://wa.me/7990469514?text="));
    assert!(!s.overlay().is_visible());
}

#[test]
fn clicking_the_background_does_nothing() {
    let mut s = scene();
    s.pointer_down(10.0, 10.0);
    assert!(s.pointer_up(10.0, 10.0).is_none());
    assert!(!s.overlay().is_visible());
    assert_eq!(s.heart().scale, HEART_BASE_SCALE);
}

#[test]
fn resize_updates_aspect_and_picking() {
    let mut s = scene();
    s.resize(Viewport::new(400.0, 900.0));
    assert!((s.camera.aspect - 400.0 / 900.0).abs() < 1e-6);
    assert_eq!(s.viewport(), Viewport::new(400.0, 900.0));
    s.tick();

    s.pointer_down(2.0, 2.0);
    assert!(s.pointer_up(2.0, 2.0).is_none());

    let (x, y) = point_on_heart(&s);
    assert!((0.0..400.0).contains(&x) && (0.0..900.0).contains(&y));
    s.pointer_down(x, y);
    assert!(matches!(s.pointer_up(x, y), Some(SceneEvent::HeartActivated { .. })));
    assert!(s.overlay().is_visible());
}

#[test]
fn dragging_across_the_heart_does_not_activate_it() {
    let mut s = scene();
    let (x, y) = point_on_heart(&s);
    s.pointer_down(x - 20.0, y);
    s.pointer_move(x, y);
    assert!(s.pointer_up(x, y).is_none());
    assert!(!s.overlay().is_visible());
}

#[test]
fn bounce_overrides_pulse_until_restored() {
    let mut s = scene();
    let (x, y) = point_on_heart(&s);
    s.pointer_down(x, y);
    let Some(SceneEvent::HeartActivated { ticket }) = s.pointer_up(x, y) else {
        panic!("expected activation");
    };
    let bounced = HEART_BASE_SCALE * BOUNCE_FACTOR;
    assert!((s.heart().scale - bounced).abs() < 1e-6);
    for _ in 0..5 {
        s.tick();
        assert!((s.heart().scale - bounced).abs() < 1e-6);
    }
    assert!(s.finish_bounce(&ticket));
    assert_eq!(s.heart().scale, HEART_BASE_SCALE);
    s.tick();
    let expected = HEART_BASE_SCALE * pulse_scale(s.time());
    assert!((s.heart().scale - expected).abs() < 1e-6);
}

#[test]
fn restore_after_shutdown_is_a_no_op() {
    let mut s = scene();
    let SceneEvent::HeartActivated { ticket } = s.activate_heart();
    s.shutdown();
    assert!(ticket.is_cancelled());
    assert!(!s.finish_bounce(&ticket));
}
