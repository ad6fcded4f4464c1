//! Perspective camera on the Z axis, looking at the origin.
//!
//! Only the distance varies at runtime (wheel zoom, clamped); the aspect ratio
//! follows the viewport.

use crate::constants::*;
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Size of the drawing region in the same units as pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map a point in viewport space (origin top-left, y down) to NDC.
    #[inline]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new((x / self.width) * 2.0 - 1.0, 1.0 - (y / self.height) * 2.0)
    }
}

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z_DEFAULT),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye.z
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    /// Dolly along Z by a wheel delta; positive deltas move away.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        let z = self.eye.z + delta_y * ZOOM_PER_WHEEL_UNIT;
        self.eye.z = z.clamp(CAMERA_Z_MIN, CAMERA_Z_MAX);
    }

    /// World-space ray from the eye through a viewport point.
    pub fn ray_through(&self, x: f32, y: f32, viewport: Viewport) -> Ray {
        let ndc = viewport.to_ndc(x, y);
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray::new(self.eye, (far - self.eye).normalize())
    }

    /// Viewport position of a world point, or `None` when it is behind the eye.
    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc.y) * 0.5 * viewport.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(400.0, 300.0), Vec2::ZERO);
    }

    #[test]
    fn center_ray_looks_down_negative_z() {
        let mut cam = Camera::default();
        let vp = Viewport::new(800.0, 600.0);
        cam.set_viewport(vp);
        let ray = cam.ray_through(400.0, 300.0, vp);
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, CAMERA_Z_DEFAULT));
    }

    #[test]
    fn projection_inverts_ray() {
        let mut cam = Camera::default();
        let vp = Viewport::new(1024.0, 768.0);
        cam.set_viewport(vp);
        let p = cam.project(Vec3::new(1.0, -0.5, 0.0), vp).unwrap();
        let ray = cam.ray_through(p.x, p.y, vp);
        let t = -ray.origin.z / ray.direction.z;
        assert!(ray.at(t).abs_diff_eq(Vec3::new(1.0, -0.5, 0.0), 1e-3));
    }

    #[test]
    fn zero_sized_viewport_is_clamped() {
        let vp = Viewport::new(0.0, 0.0);
        assert_eq!(vp.aspect(), 1.0);
    }
}
