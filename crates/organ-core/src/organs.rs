//! Procedural organ models.
//!
//! Each builder assembles a handful of primitives into an [`OrganModel`]:
//! shared meshes and materials plus the objects that place them in the group.

use crate::animator::{AnimatableObject, ObjectList, Transform};
use crate::constants::*;
use crate::material::Material;
use crate::mesh::{self, MeshData};
use crate::noise::SimplexNoise;
use crate::subject::Subject;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Debug, Default)]
pub struct OrganModel {
    pub meshes: Vec<MeshData>,
    pub materials: Vec<Material>,
    pub objects: ObjectList,
}

impl OrganModel {
    fn add_mesh(&mut self, mesh: MeshData) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    fn place(&mut self, mesh: usize, material: usize, transform: Transform) {
        self.objects.push(AnimatableObject {
            transform,
            mesh,
            material,
        });
    }
}

pub fn build(subject: Subject, rng: &mut impl Rng) -> OrganModel {
    match subject {
        Subject::Heart => heart(),
        Subject::Brain => brain(),
        Subject::Liver => liver(),
        Subject::Cells => cells(rng),
    }
}

pub fn heart() -> OrganModel {
    let mut m = OrganModel::default();
    let muscle = m.add_material(
        Material::from_hex(0x880000)
            .roughness(0.45)
            .metalness(0.15)
            .clearcoat(0.9),
    );
    let artery = m.add_material(
        Material::from_hex(0xaa1122)
            .roughness(0.5)
            .metalness(0.05)
            .clearcoat(0.3),
    );

    // Ventricles
    let lv = m.add_mesh(mesh::uv_sphere(2.0, 32, 32).scale(Vec3::new(0.8, 1.25, 0.8)));
    m.place(lv, muscle, Transform::at(Vec3::new(0.8, -0.4, 0.0)));
    let rv = m.add_mesh(mesh::uv_sphere(1.8, 32, 32).scale(Vec3::new(0.9, 1.1, 0.75)));
    m.place(rv, muscle, Transform::at(Vec3::new(-0.75, 0.0, 0.4)));

    // Atria
    let la = m.add_mesh(mesh::uv_sphere(1.3, 28, 28));
    m.place(la, muscle, Transform::at(Vec3::new(1.0, 1.4, -0.5)));
    let ra = m.add_mesh(mesh::uv_sphere(1.4, 24, 24));
    m.place(ra, muscle, Transform::at(Vec3::new(-1.2, 1.2, 0.0)));

    let aorta = m.add_mesh(mesh::torus(1.5, 0.55, 16, 32, 2.6));
    m.place(
        aorta,
        artery,
        Transform::at(Vec3::new(0.5, 2.4, 0.0)).rotated(Vec3::new(0.0, 0.6, 2.5)),
    );
    m
}

pub fn brain() -> OrganModel {
    let mut m = OrganModel::default();
    let tissue = m.add_material(
        Material::from_hex(0xffbbbb)
            .roughness(0.6)
            .clearcoat(0.3)
            .flat(),
    );
    let synapse = m.add_material(Material::from_hex(0x3b82f6).opacity(0.14));

    let noise = SimplexNoise::new(BRAIN_NOISE_SEED);
    let surface = mesh::icosahedron(2.4, 5).displace_radial(|p| {
        let q = p * BRAIN_NOISE_FREQUENCY;
        noise.noise3(q.x, q.y, q.z) * BRAIN_NOISE_DEPTH
    });
    let wire = m.add_mesh(surface.wireframe());
    let hemi = m.add_mesh(surface);

    let left = Transform::at(Vec3::new(-1.1, 0.0, 0.0));
    let right = Transform::at(Vec3::new(1.1, 0.0, 0.0)).rotated(Vec3::new(0.0, PI, 0.0));
    m.place(hemi, tissue, left);
    m.place(hemi, tissue, right);
    m.place(wire, synapse, left);
    m.place(wire, synapse, right);
    m
}

pub fn liver() -> OrganModel {
    let mut m = OrganModel::default();
    let tissue = m.add_material(Material::from_hex(0x5a2a2a).roughness(0.35).clearcoat(0.5));

    let right = m.add_mesh(mesh::uv_sphere(2.4, 48, 48).scale(Vec3::new(1.2, 0.8, 0.8)));
    m.place(right, tissue, Transform::at(Vec3::new(0.6, 0.0, 0.0)));

    let left = m.add_mesh(mesh::cone(2.0, 4.0, 32).scale(Vec3::new(0.8, 0.4, 0.8)));
    m.place(
        left,
        tissue,
        Transform::at(Vec3::new(-1.7, 0.6, 0.2)).rotated(Vec3::new(0.0, 0.0, 1.4)),
    );
    m
}

/// Red and white blood cells scattered through a box; layout comes from `rng`.
pub fn cells(rng: &mut impl Rng) -> OrganModel {
    let mut m = OrganModel::default();
    let red = m.add_material(Material::from_hex(0xaa0000).roughness(0.5).clearcoat(0.2));
    let white = m.add_material(Material::from_hex(0xffffff).roughness(1.0));
    let rbc = m.add_mesh(mesh::torus(0.55, 0.22, 16, 32, std::f32::consts::TAU));
    let wbc = m.add_mesh(mesh::icosahedron(0.8, 1));

    let spread = Vec3::from(CELL_SPREAD);
    for i in 0..CELL_COUNT {
        let (mesh, material) = if i < RED_CELL_COUNT {
            (rbc, red)
        } else {
            (wbc, white)
        };
        let position = Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        ) * spread;
        let rotation = Vec3::new(rng.gen(), rng.gen(), rng.gen()) * CELL_MAX_ROTATION;
        m.place(mesh, material, Transform::at(position).rotated(rotation));
    }
    m
}
