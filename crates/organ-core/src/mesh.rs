//! Procedural mesh primitives.
//!
//! Every generator returns an indexed [`MeshData`] with per-vertex normals.
//! Triangle winding is counter-clockwise when seen from outside.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    Triangles,
    Lines,
}

#[derive(Clone, Debug)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl MeshData {
    fn triangles(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            topology: Topology::Triangles,
        }
    }

    pub fn primitive_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            Topology::Lines => self.indices.len() / 2,
        }
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    /// Non-uniform scale baked into the vertices; normals follow the inverse.
    pub fn scale(mut self, s: Vec3) -> Self {
        let inv = s.recip();
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) * s).to_array();
            v.normal = (Vec3::from(v.normal) * inv).normalize_or_zero().to_array();
        }
        self
    }

    /// Push every vertex along its position vector by `1 + offset(p)`.
    pub fn displace_radial(mut self, offset: impl Fn(Vec3) -> f32) -> Self {
        for v in &mut self.vertices {
            let p = Vec3::from(v.position);
            v.position = (p * (1.0 + offset(p))).to_array();
        }
        self.compute_vertex_normals();
        self
    }

    /// Area-weighted smooth normals from the current triangles.
    pub fn compute_vertex_normals(&mut self) {
        if self.topology != Topology::Triangles {
            return;
        }
        let mut acc = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = Vec3::from(self.vertices[a].position);
            let pb = Vec3::from(self.vertices[b].position);
            let pc = Vec3::from(self.vertices[c].position);
            let n = (pb - pa).cross(pc - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        for (v, n) in self.vertices.iter_mut().zip(acc) {
            v.normal = n.normalize_or_zero().to_array();
        }
    }

    /// Unique triangle edges as a line list sharing this mesh's vertices.
    pub fn wireframe(&self) -> MeshData {
        let mut seen = FnvHashSet::default();
        let mut indices = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let edge = (a.min(b), a.max(b));
                if seen.insert(edge) {
                    indices.extend_from_slice(&[edge.0, edge.1]);
                }
            }
        }
        MeshData {
            vertices: self.vertices.clone(),
            indices,
            topology: Topology::Lines,
        }
    }
}

pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let theta = PI * iy as f32 / h as f32;
        for ix in 0..=w {
            let phi = TAU * ix as f32 / w as f32;
            let n = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(Vertex::new(n * radius, n));
        }
    }
    let row = w + 1;
    let mut indices = Vec::with_capacity((w * h * 6) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // Pole rows collapse to a single triangle per quad.
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData::triangles(vertices, indices)
}

/// Torus in the XY plane, optionally open: `arc` is the swept angle in radians.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32, arc: f32) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut vertices = Vec::with_capacity(((radial + 1) * (tubular + 1)) as usize);
    for j in 0..=radial {
        let v = TAU * j as f32 / radial as f32;
        for i in 0..=tubular {
            let u = arc * i as f32 / tubular as f32;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            vertices.push(Vertex::new(p, p - center));
        }
    }
    let row = tubular + 1;
    let mut indices = Vec::with_capacity((radial * tubular * 6) as usize);
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    MeshData::triangles(vertices, indices)
}

/// Closed cone with its apex on +Y, centered on the origin.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segs = radial_segments.max(3);
    let half = height * 0.5;
    let slope = radius / height;
    let mut vertices = Vec::with_capacity(((segs + 1) * 3 + 1) as usize);
    let mut indices = Vec::with_capacity((segs * 6) as usize);

    // Side: apex row then base row, one apex vertex per segment so normals stay smooth.
    for row in 0..2u32 {
        let r = radius * row as f32;
        let y = half - height * row as f32;
        for x in 0..=segs {
            let theta = TAU * x as f32 / segs as f32;
            let n = Vec3::new(theta.sin(), slope, theta.cos());
            vertices.push(Vertex::new(
                Vec3::new(r * theta.sin(), y, r * theta.cos()),
                n,
            ));
        }
    }
    let row = segs + 1;
    for x in 0..segs {
        indices.extend_from_slice(&[row + x, row + x + 1, x + 1]);
    }

    // Base cap.
    let center = vertices.len() as u32;
    vertices.push(Vertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    let ring = vertices.len() as u32;
    for x in 0..=segs {
        let theta = TAU * x as f32 / segs as f32;
        vertices.push(Vertex::new(
            Vec3::new(radius * theta.sin(), -half, radius * theta.cos()),
            Vec3::NEG_Y,
        ));
    }
    for x in 0..segs {
        indices.extend_from_slice(&[ring + x + 1, ring + x, center]);
    }
    MeshData::triangles(vertices, indices)
}

/// Icosahedron projected onto a sphere; `detail` splits every edge into
/// `detail + 1` segments.
pub fn icosahedron(radius: f32, detail: u32) -> MeshData {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let cols = detail + 1;
    let mut welder = Welder::default();
    let mut indices = Vec::with_capacity(FACES.len() * (cols * cols * 3) as usize);
    for [a, b, c] in FACES {
        // Row i sits at weight i on corner c; j walks from corner a to corner b.
        let grid: Vec<Vec<u32>> = (0..=cols)
            .map(|i| {
                (0..=cols - i)
                    .map(|j| welder.vertex(&corners, [(a, cols - i - j), (b, j), (c, i)], cols, radius))
                    .collect()
            })
            .collect();
        for i in 0..cols as usize {
            let span = 2 * (cols as usize - i) - 1;
            for j in 0..span {
                let k = j / 2;
                if j % 2 == 0 {
                    indices.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
                } else {
                    indices.extend_from_slice(&[
                        grid[i][k + 1],
                        grid[i + 1][k + 1],
                        grid[i + 1][k],
                    ]);
                }
            }
        }
    }
    let mut mesh = MeshData::triangles(welder.vertices, indices);
    mesh.compute_vertex_normals();
    mesh
}

/// Shares subdivision vertices between faces.
///
/// A vertex is keyed by its integer barycentric weights over the base corners,
/// so points on a shared edge resolve to one index regardless of which face
/// produced them.
#[derive(Default)]
struct Welder {
    lookup: FnvHashMap<[(usize, u32); 3], u32>,
    vertices: Vec<Vertex>,
}

impl Welder {
    fn vertex(
        &mut self,
        corners: &[Vec3],
        weights: [(usize, u32); 3],
        total: u32,
        radius: f32,
    ) -> u32 {
        let mut key = weights.map(|(i, w)| if w == 0 { (usize::MAX, 0) } else { (i, w) });
        key.sort_unstable();
        let vertices = &mut self.vertices;
        *self.lookup.entry(key).or_insert_with(|| {
            let p = key
                .iter()
                .filter(|(_, w)| *w > 0)
                .fold(Vec3::ZERO, |acc, &(i, w)| acc + corners[i] * (w as f32 / total as f32));
            let p = p.normalize() * radius;
            vertices.push(Vertex::new(p, p));
            (vertices.len() - 1) as u32
        })
    }
}
