//! Ambient particle cloud around the heart.
//!
//! The cloud is seeded once and never resized or re-seeded. Per-frame motion
//! is a rigid rotation of the whole cloud plus a small per-particle drift.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Linear RGB.
    pub color: Vec3,
    pub size: f32,
}

impl Particle {
    /// Spherical-shell sample. Polar and azimuthal angles are drawn
    /// independently, which clusters points near the poles.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let radius = rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX);
        let theta = rng.gen_range(0.0..TAU);
        let phi = rng.gen_range(0.0..PI);
        let position = Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        );
        let tint: f32 = rng.gen();
        let color = Vec3::new(1.0, tint * PARTICLE_GREEN_SPAN, tint * PARTICLE_BLUE_SPAN);
        let size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
        Self {
            position,
            color,
            size,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleCloud {
    particles: Vec<Particle>,
    /// Rigid rotation of the whole cloud (x, y), Euler XYZ.
    pub rotation: Vec2,
}

impl ParticleCloud {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_count(PARTICLE_COUNT, rng)
    }

    pub fn with_count<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::sample(rng)).collect();
        Self {
            particles,
            rotation: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spin around Y at a constant rate and wobble around X.
    pub fn set_rigid_rotation(&mut self, time: f64) {
        self.rotation = Vec2::new(
            (time * CLOUD_WOBBLE_FREQUENCY as f64).sin() as f32 * CLOUD_WOBBLE_AMPLITUDE,
            // wrapped so the angle keeps its precision on long runs
            (time * CLOUD_SPIN_RATE as f64).rem_euclid(std::f64::consts::TAU) as f32,
        );
    }

    /// Nudge every particle by a small sinusoid keyed to its index.
    pub fn shimmer(&mut self, time: f64) {
        let ty = time * SHIMMER_Y_FREQUENCY as f64;
        let tx = time * SHIMMER_X_FREQUENCY as f64;
        for (k, p) in self.particles.iter_mut().enumerate() {
            let phase = (k * 3) as f64 * SHIMMER_PHASE_STEP as f64;
            p.position.y += (ty + phase).sin() as f32 * SHIMMER_Y_AMPLITUDE;
            p.position.x += (tx + phase).cos() as f32 * SHIMMER_X_AMPLITUDE;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            0.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shimmer_moves_particles_by_small_amounts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cloud = ParticleCloud::with_count(16, &mut rng);
        let before: Vec<Vec3> = cloud.particles().iter().map(|p| p.position).collect();
        cloud.shimmer(1.0);
        for (b, p) in before.iter().zip(cloud.particles()) {
            let d = p.position - *b;
            assert!(d.x.abs() <= SHIMMER_X_AMPLITUDE + 1e-6);
            assert!(d.y.abs() <= SHIMMER_Y_AMPLITUDE + 1e-6);
            assert_eq!(d.z, 0.0);
        }
        assert_eq!(cloud.len(), 16);
    }

    #[test]
    fn rigid_rotation_follows_time() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cloud = ParticleCloud::with_count(1, &mut rng);
        cloud.set_rigid_rotation(10.0);
        assert!((cloud.rotation.y - 1.0).abs() < 1e-6);
        assert!(cloud.rotation.x.abs() <= CLOUD_WOBBLE_AMPLITUDE);
    }
}
