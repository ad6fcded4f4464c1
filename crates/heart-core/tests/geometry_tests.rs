// Host-side tests for the heart mesh and the particle cloud.

use heart_core::constants::*;
use heart_core::geometry::{build_heart_geometry, extrude, heart_outline, signed_area, ExtrudeSettings};
use heart_core::ParticleCloud;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn heart_mesh_is_centered_and_non_degenerate() {
    let mesh = build_heart_geometry().expect("heart geometry");
    assert!(mesh.triangle_count() > 100);
    assert_eq!(mesh.positions.len(), mesh.normals.len());
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.positions.len()));

    let bb = mesh.bounding_box();
    assert!(bb.center().length() < 1e-4, "center {:?}", bb.center());
    // Outline spans 22 x 9.5 before bevelling
    assert!(bb.size().x > 22.0 && bb.size().x < 24.0);
    assert!(bb.size().y > 9.5 && bb.size().y < 11.5);
    let depth = EXTRUDE_DEPTH + 2.0 * BEVEL_THICKNESS;
    assert!((bb.size().z - depth).abs() < 1e-4);
}

#[test]
fn heart_mesh_is_deterministic() {
    let a = build_heart_geometry().expect("first build");
    let b = build_heart_geometry().expect("second build");
    assert_eq!(a, b);
}

#[test]
fn heart_normals_are_unit_length() {
    let mesh = build_heart_geometry().expect("heart geometry");
    for n in &mesh.normals {
        let len = glam::Vec3::from(*n).length();
        assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
    }
}

#[test]
fn heart_tip_points_down() {
    let outline = heart_outline(CURVE_SEGMENTS);
    let lowest = outline
        .iter()
        .copied()
        .min_by(|a, b| a.y.total_cmp(&b.y))
        .expect("outline");
    // Tip sits on the vertical through the notch
    assert!((lowest.x - 5.0).abs() < 1e-3);
    assert!((lowest.y + 9.5).abs() < 1e-3);
}

#[test]
fn extrusion_accepts_either_winding() {
    let outline = heart_outline(CURVE_SEGMENTS);
    let mut reversed = outline.clone();
    reversed.reverse();
    assert!(signed_area(&outline) * signed_area(&reversed) < 0.0);
    let a = extrude(&outline, &ExtrudeSettings::default()).expect("forward");
    let b = extrude(&reversed, &ExtrudeSettings::default()).expect("reversed");
    assert_eq!(a.triangle_count(), b.triangle_count());
    assert!(a.bounding_box().size().abs_diff_eq(b.bounding_box().size(), 1e-4));
}

#[test]
fn particle_cloud_has_fixed_size_and_ranges() {
    for seed in [1u64, 7, 42] {
        let mut rng = StdRng::seed_from_u64(seed);
        let cloud = ParticleCloud::generate(&mut rng);
        assert_eq!(cloud.len(), 800);
        for p in cloud.particles() {
            let r = p.position.length();
            assert!((PARTICLE_RADIUS_MIN - 1e-3..=PARTICLE_RADIUS_MAX + 1e-3).contains(&r), "radius {r}");
            assert!((PARTICLE_SIZE_MIN..=PARTICLE_SIZE_MAX).contains(&p.size), "size {}", p.size);
            assert_eq!(p.color.x, 1.0);
            assert!(p.color.y <= PARTICLE_GREEN_SPAN && p.color.z <= PARTICLE_BLUE_SPAN);
        }
    }
}

#[test]
fn particle_cloud_is_reproducible_per_seed() {
    let a = ParticleCloud::generate(&mut StdRng::seed_from_u64(9));
    let b = ParticleCloud::generate(&mut StdRng::seed_from_u64(9));
    assert_eq!(a.particles(), b.particles());
}
