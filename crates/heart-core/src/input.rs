use crate::constants::{DRAG_SENSITIVITY, DRAG_THRESHOLD, ROTATION_SMOOTHING};
use glam::Vec2;

/// Pointer gesture state: a press becomes a drag once it travels far enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Idle,
    Pressed,
    Dragging,
}

/// A release that never turned into a drag; the host should hit-test here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRequest {
    pub x: f32,
    pub y: f32,
}

/// Pointer state plus the rotation it drives.
///
/// `target_rotation` accumulates drag deltas (x from vertical motion, y from
/// horizontal motion); `current_rotation` eases toward it once per frame.
#[derive(Clone, Debug, Default)]
pub struct InputController {
    phase: PointerPhase,
    press_origin: Vec2,
    last: Vec2,
    target_rotation: Vec2,
    current_rotation: Vec2,
}

impl InputController {
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.phase = PointerPhase::Pressed;
        self.press_origin = Vec2::new(x, y);
        self.last = self.press_origin;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.phase == PointerPhase::Idle {
            return;
        }
        let pos = Vec2::new(x, y);
        if self.phase == PointerPhase::Pressed {
            let travel = (pos - self.press_origin).abs();
            if travel.x > DRAG_THRESHOLD || travel.y > DRAG_THRESHOLD {
                self.phase = PointerPhase::Dragging;
                log::debug!("[input] drag started");
            }
        }
        if self.phase == PointerPhase::Dragging {
            let delta = pos - self.last;
            self.target_rotation.y += delta.x * DRAG_SENSITIVITY;
            self.target_rotation.x += delta.y * DRAG_SENSITIVITY;
        }
        self.last = pos;
    }

    /// Ends the gesture. Returns a hit request only for a press that never
    /// crossed the drag threshold.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<HitRequest> {
        let was = self.phase;
        self.phase = PointerPhase::Idle;
        match was {
            PointerPhase::Pressed => Some(HitRequest { x, y }),
            PointerPhase::Dragging | PointerPhase::Idle => None,
        }
    }

    /// The platform aborted the gesture: back to idle without a hit request.
    pub fn pointer_cancel(&mut self) {
        self.phase = PointerPhase::Idle;
    }

    #[inline]
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.phase != PointerPhase::Idle
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == PointerPhase::Dragging
    }

    #[inline]
    pub fn target_rotation(&self) -> Vec2 {
        self.target_rotation
    }

    #[inline]
    pub fn current_rotation(&self) -> Vec2 {
        self.current_rotation
    }

    /// One step of exponential smoothing toward the target.
    pub fn ease_rotation(&mut self) {
        self.current_rotation += (self.target_rotation - self.current_rotation) * ROTATION_SMOOTHING;
    }

    /// Idle spin around Y.
    pub fn auto_rotate(&mut self, step: f32) {
        self.target_rotation.y += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_returns_to_idle_without_request() {
        let mut c = InputController::default();
        c.pointer_down(10.0, 10.0);
        c.pointer_cancel();
        assert_eq!(c.phase(), PointerPhase::Idle);
        assert!(!c.is_pressed());
        assert_eq!(c.pointer_up(10.0, 10.0), None);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut c = InputController::default();
        c.pointer_move(100.0, 100.0);
        assert_eq!(c.phase(), PointerPhase::Idle);
        assert_eq!(c.target_rotation(), Vec2::ZERO);
    }

    #[test]
    fn small_wiggle_stays_pressed() {
        let mut c = InputController::default();
        c.pointer_down(10.0, 10.0);
        c.pointer_move(12.0, 13.0);
        c.pointer_move(7.0, 8.0);
        assert_eq!(c.phase(), PointerPhase::Pressed);
        assert_eq!(c.target_rotation(), Vec2::ZERO);
        assert!(c.pointer_up(7.0, 8.0).is_some());
    }

    #[test]
    fn slow_drag_accumulates_past_threshold() {
        let mut c = InputController::default();
        c.pointer_down(0.0, 0.0);
        for i in 1..=4 {
            c.pointer_move(i as f32, 0.0);
        }
        assert!(c.is_dragging());
    }

    #[test]
    fn drag_maps_axes_to_rotation() {
        let mut c = InputController::default();
        c.pointer_down(0.0, 0.0);
        c.pointer_move(10.0, 0.0);
        c.pointer_move(10.0, 20.0);
        let r = c.target_rotation();
        assert!((r.y - 0.10).abs() < 1e-6);
        assert!((r.x - 0.20).abs() < 1e-6);
    }

    #[test]
    fn release_without_press_requests_nothing() {
        let mut c = InputController::default();
        assert_eq!(c.pointer_up(5.0, 5.0), None);
    }

    #[test]
    fn easing_never_overshoots() {
        let mut c = InputController::default();
        c.auto_rotate(1.0);
        for _ in 0..500 {
            c.ease_rotation();
            assert!(c.current_rotation().y <= 1.0);
        }
        assert!((c.current_rotation().y - 1.0).abs() < 1e-6);
    }
}
