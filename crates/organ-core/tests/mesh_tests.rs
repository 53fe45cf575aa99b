// Host-side tests for procedural geometry, noise and organ assembly.

use glam::Vec3;
use organ_core::mesh::{cone, icosahedron, torus, uv_sphere};
use organ_core::noise::SimplexNoise;
use organ_core::organs;
use organ_core::{hex_to_linear, Subject, Topology};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_indices_in_range(mesh: &organ_core::MeshData) {
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let m = uv_sphere(2.0, 32, 32);
    assert_eq!(m.vertices.len(), 33 * 33);
    // Pole rows contribute one triangle per segment instead of two.
    assert_eq!(m.primitive_count(), 32 * 32 * 2 - 2 * 32);
    assert_indices_in_range(&m);
    for v in &m.vertices {
        assert!((Vec3::from(v.position).length() - 2.0).abs() < 1e-4);
        assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn scaled_sphere_bounds_follow_scale() {
    let m = uv_sphere(2.0, 32, 32).scale(Vec3::new(0.8, 1.25, 0.8));
    let (lo, hi) = m.bounds();
    assert!((hi.y - 2.5).abs() < 1e-4 && (lo.y + 2.5).abs() < 1e-4);
    assert!(hi.x <= 1.6 + 1e-4);
}

#[test]
fn torus_arc_stays_within_tube() {
    let m = torus(1.5, 0.55, 16, 32, 2.6);
    assert_eq!(m.primitive_count(), 16 * 32 * 2);
    assert_indices_in_range(&m);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        let ring = Vec3::new(p.x, p.y, 0.0).normalize() * 1.5;
        assert!(((p - ring).length() - 0.55).abs() < 1e-4);
        let angle = p.y.atan2(p.x).rem_euclid(std::f32::consts::TAU);
        assert!(angle <= 2.6 + 1e-4);
    }
}

#[test]
fn icosahedron_detail_counts() {
    let base = icosahedron(1.0, 0);
    assert_eq!(base.vertices.len(), 12);
    assert_eq!(base.primitive_count(), 20);
    let fine = icosahedron(2.4, 5);
    assert_eq!(fine.primitive_count(), 20 * 36);
    // Euler characteristic of a closed sphere: V - E + F = 2.
    let edges = fine.wireframe().primitive_count();
    assert_eq!(fine.vertices.len() + fine.primitive_count() - edges, 2);
    for v in &fine.vertices {
        assert!((Vec3::from(v.position).length() - 2.4).abs() < 1e-4);
    }
}

#[test]
fn wireframe_has_unique_edges() {
    let m = icosahedron(1.0, 1);
    let wire = m.wireframe();
    assert_eq!(wire.topology, Topology::Lines);
    let mut edges: Vec<(u32, u32)> = wire
        .indices
        .chunks_exact(2)
        .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
        .collect();
    let total = edges.len();
    edges.sort_unstable();
    edges.dedup();
    assert_eq!(edges.len(), total);
    assert_eq!(total, m.primitive_count() * 3 / 2);
}

#[test]
fn cone_spans_height_and_radius() {
    let m = cone(2.0, 4.0, 32);
    assert_indices_in_range(&m);
    let (lo, hi) = m.bounds();
    assert!((hi.y - 2.0).abs() < 1e-5 && (lo.y + 2.0).abs() < 1e-5);
    assert!((hi.x - 2.0).abs() < 1e-3);
    assert_eq!(m.primitive_count(), 64);
}

#[test]
fn noise_is_deterministic_and_bounded() {
    let a = SimplexNoise::new(5);
    let b = SimplexNoise::new(5);
    let c = SimplexNoise::new(6);
    let mut differs = false;
    for i in 0..500 {
        let p = Vec3::new(i as f32 * 0.37, i as f32 * -0.21, i as f32 * 0.13);
        let va = a.noise3(p.x, p.y, p.z);
        assert_eq!(va, b.noise3(p.x, p.y, p.z));
        assert!(va.abs() <= 1.1, "noise {va} at {p:?}");
        differs |= va != c.noise3(p.x, p.y, p.z);
    }
    assert!(differs);
}

#[test]
fn hex_colors_convert_to_linear() {
    for c in hex_to_linear(0xffffff) {
        assert!((c - 1.0).abs() < 1e-5);
    }
    assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let [r, g, b] = hex_to_linear(0x880000);
    assert!((r - 0.2462).abs() < 1e-3);
    assert_eq!((g, b), (0.0, 0.0));
}

#[test]
fn organ_models_have_expected_parts() {
    let mut rng = StdRng::seed_from_u64(1);
    let expected = [
        (Subject::Heart, 5),
        (Subject::Brain, 4),
        (Subject::Liver, 2),
        (Subject::Cells, 15),
    ];
    for (subject, parts) in expected {
        let model = organs::build(subject, &mut rng);
        assert_eq!(model.objects.len(), parts, "{subject}");
        for obj in &model.objects {
            assert!(obj.mesh < model.meshes.len());
            assert!(obj.material < model.materials.len());
        }
    }
}

#[test]
fn brain_overlay_is_translucent_wireframe() {
    let model = organs::brain();
    let overlays: Vec<_> = model
        .objects
        .iter()
        .filter(|o| model.meshes[o.mesh].topology == Topology::Lines)
        .collect();
    assert_eq!(overlays.len(), 2);
    for o in overlays {
        let mat = &model.materials[o.material];
        assert!(mat.is_transparent());
        assert!((mat.opacity - 0.14).abs() < 1e-6);
    }
    let surface = model
        .meshes
        .iter()
        .find(|m| m.topology == Topology::Triangles);
    let Some(surface) = surface else {
        panic!("brain has no surface mesh");
    };
    // Noise displacement moves vertices off the 2.4 sphere, within the noise depth.
    let radii: Vec<f32> = surface
        .vertices
        .iter()
        .map(|v| Vec3::from(v.position).length())
        .collect();
    assert!(radii.iter().any(|r| (r - 2.4).abs() > 1e-3));
    assert!(radii.iter().all(|r| (r - 2.4).abs() <= 2.4 * 0.14));
}

#[test]
fn cells_split_red_and_white() {
    let model = organs::cells(&mut StdRng::seed_from_u64(3));
    let meshes: Vec<usize> = model.objects.iter().map(|o| o.mesh).collect();
    assert!(meshes[..13].iter().all(|&m| m == meshes[0]));
    assert!(meshes[13..].iter().all(|&m| m != meshes[0]));
}
