use crate::color::hex_to_linear;
use crate::constants::{AMBIENT_LIGHT, DIRECTIONAL_LIGHT, POINT_LIGHTS};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Linear RGB, intensity applied.
    pub color: Vec3,
    /// Unit vector from the surface toward the light.
    pub direction: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// Linear RGB, intensity applied.
    pub color: Vec3,
    pub position: Vec3,
    /// Contribution reaches zero at this distance.
    pub range: f32,
}

/// Fixed scene lighting.
#[derive(Clone, Debug, PartialEq)]
pub struct Lights {
    pub ambient: Vec3,
    pub directional: DirectionalLight,
    pub points: [PointLight; 2],
}

impl Default for Lights {
    fn default() -> Self {
        let (ambient_hex, ambient_intensity) = AMBIENT_LIGHT;
        let (dir_hex, dir_intensity, dir_pos) = DIRECTIONAL_LIGHT;
        Self {
            ambient: hex_to_linear(ambient_hex) * ambient_intensity,
            directional: DirectionalLight {
                color: hex_to_linear(dir_hex) * dir_intensity,
                direction: Vec3::from(dir_pos).normalize(),
            },
            points: POINT_LIGHTS.map(|(hex, intensity, pos, range)| PointLight {
                color: hex_to_linear(hex) * intensity,
                position: Vec3::from(pos),
                range,
            }),
        }
    }
}
