use crate::geometry::{Aabb, MeshData};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Apply `m` to the ray. The direction is not renormalised, so a parameter
    /// `t` names the same point before and after the transform.
    pub fn transformed(&self, m: &Mat4) -> Ray {
        Ray {
            origin: m.transform_point3(self.origin),
            direction: m.transform_vector3(self.direction),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Ray parameter; world distance when the ray direction is unit length.
    pub distance: f32,
    pub point: Vec3,
    pub triangle: usize,
}

/// Slab test. Returns the entry parameter, or 0 when the origin is inside.
pub fn ray_aabb(ray: &Ray, bounds: &Aabb) -> Option<f32> {
    let inv = ray.direction.recip();
    let t0 = (bounds.min - ray.origin) * inv;
    let t1 = (bounds.max - ray.origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    if t_far < t_near.max(0.0) {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Moller-Trumbore, both faces.
pub fn ray_triangle(ray: &Ray, [a, b, c]: [Vec3; 3]) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = b - a;
    let e2 = c - a;
    let p = ray.direction.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t > EPS).then_some(t)
}

/// All hits of a world-space `ray` on `mesh` placed by `model`, nearest first.
///
/// `bounds` is the mesh's local bounding box and lets a miss skip the
/// triangle loop. An empty result is a miss.
pub fn intersect_mesh(
    ray: &Ray,
    mesh: &MeshData,
    bounds: &Aabb,
    model: &Mat4,
) -> SmallVec<[Intersection; 4]> {
    let mut hits = SmallVec::new();
    let det = model.determinant();
    if det.abs() < f32::EPSILON {
        return hits;
    }
    let local = ray.transformed(&model.inverse());
    if ray_aabb(&local, bounds).is_none() {
        return hits;
    }
    for i in 0..mesh.triangle_count() {
        if let Some(t) = ray_triangle(&local, mesh.triangle(i)) {
            hits.push(Intersection {
                distance: t,
                point: ray.at(t),
                triangle: i,
            });
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
