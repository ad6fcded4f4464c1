//! Heart mesh construction: a Bezier outline extruded along Z with rounded
//! (bevelled) edges, then re-centred on its bounding box.
//!
//! Output is an indexed triangle list with per-vertex normals. The side walls
//! share vertices between neighbouring rings so their normals are smoothed;
//! the two caps carry their own flat vertices.

use crate::constants::*;
use glam::{Vec2, Vec3};
use lyon::geom::{point, CubicBezierSegment};
use lyon::path::Path;
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};
use std::f32::consts::FRAC_PI_2;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("outline needs at least 3 distinct points, got {0}")]
    DegenerateOutline(usize),
    #[error("cap tessellation failed: {0:?}")]
    Tessellation(lyon::tessellation::TessellationError),
}

/// Parameters of the sweep. Defaults are the heart's fixed constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub steps: usize,
    pub bevel_segments: usize,
    pub bevel_size: f32,
    pub bevel_thickness: f32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: EXTRUDE_DEPTH,
            steps: EXTRUDE_STEPS,
            bevel_segments: BEVEL_SEGMENTS,
            bevel_size: BEVEL_SIZE,
            bevel_thickness: BEVEL_THICKNESS,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f32; 3]>) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in points {
            let v = Vec3::from(*p);
            min = min.min(v);
            max = max.max(v);
        }
        Self { min, max }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner positions of triangle `i`.
    #[inline]
    pub fn triangle(&self, i: usize) -> [Vec3; 3] {
        let base = i * 3;
        [
            Vec3::from(self.positions[self.indices[base] as usize]),
            Vec3::from(self.positions[self.indices[base + 1] as usize]),
            Vec3::from(self.positions[self.indices[base + 2] as usize]),
        ]
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }

    /// Translate every vertex so the bounding-box centre sits at the origin.
    pub fn center(&mut self) {
        let c = self.bounding_box().center();
        for p in &mut self.positions {
            p[0] -= c.x;
            p[1] -= c.y;
            p[2] -= c.z;
        }
    }
}

/// Sample the heart outline: `curve_segments` points per cubic, consecutive
/// duplicates and the repeated closing point dropped. The outline is
/// mirrored on Y so the tip points down in a Y-up world.
pub fn heart_outline(curve_segments: usize) -> Vec<Vec2> {
    let divisions = curve_segments.max(1);
    let [sx, sy] = HEART_OUTLINE_START;
    let mut from = point(sx, sy);
    let mut pts = vec![Vec2::new(sx, -sy)];
    for [c1, c2, to] in HEART_OUTLINE_CUBICS {
        let seg = CubicBezierSegment {
            from,
            ctrl1: point(c1[0], c1[1]),
            ctrl2: point(c2[0], c2[1]),
            to: point(to[0], to[1]),
        };
        for d in 1..=divisions {
            let p = seg.sample(d as f32 / divisions as f32);
            let v = Vec2::new(p.x, -p.y);
            if pts.last().map_or(true, |last| last.distance_squared(v) > 1e-10) {
                pts.push(v);
            }
        }
        from = seg.to;
    }
    if pts.len() > 1 && pts[0].distance_squared(pts[pts.len() - 1]) <= 1e-10 {
        pts.pop();
    }
    pts
}

/// Shoelace area; positive for counter-clockwise winding.
pub fn signed_area(outline: &[Vec2]) -> f32 {
    let n = outline.len();
    let mut acc = 0.0;
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        acc += a.x * b.y - b.x * a.y;
    }
    acc * 0.5
}

/// Direction in which vertex `i` moves when the outline grows by one unit.
///
/// Each adjacent edge shifts outward by exactly one unit; the resulting
/// miter is capped so its squared length stays within `BEVEL_MITER_LIMIT_SQ`.
/// Expects counter-clockwise winding.
fn bevel_vector(prev: Vec2, pt: Vec2, next: Vec2) -> Vec2 {
    let d_in = (pt - prev).normalize_or_zero();
    let d_out = (next - pt).normalize_or_zero();
    let n_in = Vec2::new(d_in.y, -d_in.x);
    let n_out = Vec2::new(d_out.y, -d_out.x);
    let denom = 1.0 + n_in.dot(n_out);
    let v = if denom > 1e-6 {
        (n_in + n_out) / denom
    } else {
        n_in
    };
    let len_sq = v.length_squared();
    if len_sq > BEVEL_MITER_LIMIT_SQ {
        v / (len_sq / BEVEL_MITER_LIMIT_SQ).sqrt()
    } else {
        v
    }
}

/// `(outline offset, z)` for every ring from the front bevel to the back bevel.
fn ring_profile(s: &ExtrudeSettings) -> Vec<(f32, f32)> {
    let mut rings = Vec::with_capacity(s.bevel_segments * 2 + s.steps + 1);
    let steps = s.steps.max(1);
    if s.bevel_segments == 0 {
        for i in 0..=steps {
            rings.push((0.0, s.depth * i as f32 / steps as f32));
        }
        return rings;
    }
    let bevel = |b: usize| {
        let t = b as f32 / s.bevel_segments as f32;
        (
            s.bevel_size * (t * FRAC_PI_2).sin(),
            s.bevel_thickness * (t * FRAC_PI_2).cos(),
        )
    };
    for b in 0..s.bevel_segments {
        let (offset, z) = bevel(b);
        rings.push((offset, -z));
    }
    for i in 0..=steps {
        rings.push((s.bevel_size, s.depth * i as f32 / steps as f32));
    }
    for b in (0..s.bevel_segments).rev() {
        let (offset, z) = bevel(b);
        rings.push((offset, s.depth + z));
    }
    rings
}

fn triangulate(outline: &[Vec2]) -> Result<VertexBuffers<Vec2, u32>, GeometryError> {
    let mut builder = Path::builder();
    builder.begin(point(outline[0].x, outline[0].y));
    for p in &outline[1..] {
        builder.line_to(point(p.x, p.y));
    }
    builder.close();
    let path = builder.build();

    let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    FillTessellator::new()
        .tessellate_path(
            &path,
            &FillOptions::tolerance(0.001),
            &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
                let p = v.position();
                Vec2::new(p.x, p.y)
            }),
        )
        .map_err(GeometryError::Tessellation)?;
    Ok(buffers)
}

/// Sweep `outline` along +Z according to `settings`.
pub fn extrude(outline: &[Vec2], settings: &ExtrudeSettings) -> Result<MeshData, GeometryError> {
    if outline.len() < 3 {
        return Err(GeometryError::DegenerateOutline(outline.len()));
    }
    let mut contour = outline.to_vec();
    if signed_area(&contour) < 0.0 {
        contour.reverse();
    }
    let n = contour.len();
    let moves: Vec<Vec2> = (0..n)
        .map(|i| bevel_vector(contour[(i + n - 1) % n], contour[i], contour[(i + 1) % n]))
        .collect();
    let rings = ring_profile(settings);

    let mut mesh = MeshData::default();

    // Side walls
    for &(offset, z) in &rings {
        for (pt, mv) in contour.iter().zip(&moves) {
            let p = *pt + *mv * offset;
            mesh.positions.push([p.x, p.y, z]);
        }
    }
    for r in 0..rings.len() - 1 {
        let row = (r * n) as u32;
        let next_row = ((r + 1) * n) as u32;
        for i in 0..n as u32 {
            let j = (i + 1) % n as u32;
            let (a, b, c, d) = (row + i, row + j, next_row + j, next_row + i);
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh.normals = smooth_normals(&mesh.positions, &mesh.indices);

    // Caps sit on the innermost front and back rings
    let caps = triangulate(&contour)?;
    let front_z = rings[0].1;
    let back_z = rings[rings.len() - 1].1;
    for (z, normal_z) in [(front_z, -1.0f32), (back_z, 1.0)] {
        let base = mesh.positions.len() as u32;
        for v in &caps.vertices {
            mesh.positions.push([v.x, v.y, z]);
            mesh.normals.push([0.0, 0.0, normal_z]);
        }
        for tri in caps.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            let pa = caps.vertices[a as usize];
            let pb = caps.vertices[b as usize];
            let pc = caps.vertices[c as usize];
            let ccw = (pb - pa).perp_dot(pc - pa) > 0.0;
            // Front cap faces -Z, back cap faces +Z
            if ccw == (normal_z > 0.0) {
                mesh.indices.extend_from_slice(&[base + a, base + b, base + c]);
            } else {
                mesh.indices.extend_from_slice(&[base + a, base + c, base + b]);
            }
        }
    }
    Ok(mesh)
}

fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let a = Vec3::from(positions[tri[0] as usize]);
        let b = Vec3::from(positions[tri[1] as usize]);
        let c = Vec3::from(positions[tri[2] as usize]);
        // Area-weighted
        let n = (b - a).cross(c - a);
        for &i in tri {
            acc[i as usize] += n;
        }
    }
    acc.into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect()
}

/// The heart solid with the fixed constants, centred on its own origin.
pub fn build_heart_geometry() -> Result<MeshData, GeometryError> {
    let outline = heart_outline(CURVE_SEGMENTS);
    let mut mesh = extrude(&outline, &ExtrudeSettings::default())?;
    mesh.center();
    log::info!(
        "[geometry] heart mesh: {} vertices, {} triangles",
        mesh.positions.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn outline_has_expected_sample_count() {
        // 6 cubics * 12 samples, shared start/end point counted once
        assert_eq!(heart_outline(CURVE_SEGMENTS).len(), 72);
    }

    #[test]
    fn outline_is_closed_without_duplicate_endpoint() {
        let o = heart_outline(CURVE_SEGMENTS);
        assert!(o[0].distance(o[o.len() - 1]) > 1e-4);
        assert_abs_diff_eq!(o[0].x, 5.0);
        assert_abs_diff_eq!(o[0].y, -5.0);
    }

    #[test]
    fn bevel_vector_on_straight_edge_is_unit_normal() {
        // CCW square bottom edge: outward is -Y
        let v = bevel_vector(Vec2::new(-1.0, 0.0), Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(v.abs_diff_eq(Vec2::new(0.0, -1.0), 1e-6));
    }

    #[test]
    fn bevel_vector_is_capped_on_sharp_corners() {
        let v = bevel_vector(Vec2::new(-1.0, 0.0), Vec2::ZERO, Vec2::new(-1.0, 0.05));
        assert!(v.length_squared() <= BEVEL_MITER_LIMIT_SQ + 1e-4);
    }

    #[test]
    fn ring_profile_is_monotonic_in_z() {
        let rings = ring_profile(&ExtrudeSettings::default());
        assert_eq!(rings.len(), BEVEL_SEGMENTS * 2 + EXTRUDE_STEPS + 1);
        for w in rings.windows(2) {
            assert!(w[1].1 > w[0].1, "rings must advance along +Z: {w:?}");
        }
        assert_abs_diff_eq!(rings[0].0, 0.0);
        assert_abs_diff_eq!(rings[0].1, -BEVEL_THICKNESS);
        assert_abs_diff_eq!(rings[rings.len() - 1].1, EXTRUDE_DEPTH + BEVEL_THICKNESS);
    }

    #[test]
    fn extrude_rejects_degenerate_outline() {
        let err = extrude(&[Vec2::ZERO, Vec2::X], &ExtrudeSettings::default());
        assert!(matches!(err, Err(GeometryError::DegenerateOutline(2))));
    }

    #[test]
    fn extruded_square_has_closed_caps() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let settings = ExtrudeSettings {
            bevel_segments: 0,
            steps: 1,
            ..ExtrudeSettings::default()
        };
        let mesh = extrude(&square, &settings).unwrap();
        // 4 side quads + 2 triangles per cap
        assert_eq!(mesh.triangle_count(), 8 + 4);
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        let bb = mesh.bounding_box();
        assert!(bb.size().abs_diff_eq(Vec3::new(1.0, 1.0, EXTRUDE_DEPTH), 1e-6));
    }
}
