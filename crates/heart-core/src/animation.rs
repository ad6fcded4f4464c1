//! Per-frame animation parameters: the user-facing config and the heart's
//! transform/material state that the tick writes.

use crate::color::{hex_to_linear, hsl_to_srgb, srgb_to_linear};
use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Runtime knobs read once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub is_animating: bool,
    speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            is_animating: true,
            speed: SPEED_DEFAULT,
        }
    }
}

impl AnimationConfig {
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if speed.is_finite() {
            speed.clamp(SPEED_MIN, SPEED_MAX)
        } else {
            SPEED_DEFAULT
        };
    }

    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_animating = !self.is_animating;
        self.is_animating
    }

    /// Simulation time advanced by one refresh.
    #[inline]
    pub fn time_step(&self) -> f32 {
        TIME_STEP * self.speed
    }
}

/// Multiplier on the base scale at `time`.
#[inline]
pub fn pulse_scale(time: f64) -> f32 {
    1.0 + (time * PULSE_FREQUENCY as f64).sin() as f32 * PULSE_AMPLITUDE
}

/// Red-pink material colour at `time`, linear RGB.
pub fn cycling_color(time: f64) -> Vec3 {
    let h = (((time * HUE_FREQUENCY as f64).sin() + 1.0) * 0.5) as f32;
    srgb_to_linear(hsl_to_srgb(
        HUE_BASE - HUE_SPAN * h,
        HUE_SATURATION,
        HUE_LIGHTNESS_BASE + HUE_LIGHTNESS_SPAN * h,
    ))
}

/// Heart transform and material as last written by the tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartState {
    /// Uniform scale, base scale included.
    pub scale: f32,
    /// Euler XYZ angles (x, y); z stays 0.
    pub rotation: Vec2,
    /// Linear RGB.
    pub color: Vec3,
    /// Linear RGB, intensity applied.
    pub emissive: Vec3,
    /// Linear RGB.
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for HeartState {
    fn default() -> Self {
        Self {
            scale: HEART_BASE_SCALE,
            rotation: Vec2::ZERO,
            color: hex_to_linear(HEART_COLOR_HEX),
            emissive: hex_to_linear(HEART_EMISSIVE_HEX) * HEART_EMISSIVE_INTENSITY,
            specular: hex_to_linear(HEART_SPECULAR_HEX),
            shininess: HEART_SHININESS,
        }
    }
}

impl HeartState {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0),
            Vec3::ZERO,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn speed_is_clamped() {
        let mut cfg = AnimationConfig::default();
        cfg.set_speed(10.0);
        assert_eq!(cfg.speed(), SPEED_MAX);
        cfg.set_speed(0.0);
        assert_eq!(cfg.speed(), SPEED_MIN);
        cfg.set_speed(f32::NAN);
        assert_eq!(cfg.speed(), SPEED_DEFAULT);
        cfg.set_speed(2.0);
        assert_relative_eq!(cfg.time_step(), 0.032);
    }

    #[test]
    fn toggle_flips_state() {
        let mut cfg = AnimationConfig::default();
        assert!(cfg.is_animating);
        assert!(!cfg.toggle());
        assert!(cfg.toggle());
    }

    #[test]
    fn pulse_stays_in_band() {
        for i in 0..200 {
            let s = pulse_scale(i as f64 * 0.05);
            assert!((1.0 - PULSE_AMPLITUDE - 1e-6..=1.0 + PULSE_AMPLITUDE + 1e-6).contains(&s));
        }
        assert_relative_eq!(pulse_scale(0.0), 1.0);
    }

    #[test]
    fn cycling_color_stays_red_dominant() {
        for i in 0..100 {
            let c = cycling_color(i as f64 * 0.1);
            assert!(c.x >= c.y && c.x >= c.z, "{c:?}");
        }
    }

    #[test]
    fn pulse_keeps_moving_at_large_times() {
        let t = 40_000.0;
        let step = TIME_STEP as f64 * SPEED_MIN as f64;
        assert_ne!(pulse_scale(t), pulse_scale(t + step));
        assert_ne!(cycling_color(t), cycling_color(t + 10.0 * step));
    }
}
