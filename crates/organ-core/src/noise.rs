//! Seeded 3D simplex noise used to wrinkle the brain surface.
//!
//! Output lies in roughly \[-1, 1\]. The same seed always yields the same field.

use rand::prelude::*;

/// 12 gradients pointing at the edge midpoints of a cube.
const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

pub struct SimplexNoise {
    /// 256-entry permutation, doubled so lookups never wrap.
    perm: [u8; 512],
}

impl SimplexNoise {
    const F3: f32 = 1.0 / 3.0;
    const G3: f32 = 1.0 / 6.0;

    pub fn new(seed: u64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        table.shuffle(&mut StdRng::seed_from_u64(seed));
        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = table[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn hash(&self, i: i32, j: i32, k: i32) -> usize {
        let (i, j, k) = ((i & 255) as usize, (j & 255) as usize, (k & 255) as usize);
        self.perm[i + self.perm[j + self.perm[k] as usize] as usize] as usize % 12
    }

    #[inline]
    fn corner(&self, gi: usize, x: f32, y: f32, z: f32) -> f32 {
        let t = 0.6 - x * x - y * y - z * z;
        if t < 0.0 {
            return 0.0;
        }
        let g = GRAD3[gi];
        let t2 = t * t;
        t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
    }

    pub fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        // Skew into the simplex grid to find the containing cell.
        let s = (x + y + z) * Self::F3;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;
        let k = (z + s).floor() as i32;
        let t = (i + j + k) as f32 * Self::G3;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);
        let z0 = z - (k as f32 - t);

        // Pick which of the six tetrahedra we are in.
        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - i1 as f32 + Self::G3;
        let y1 = y0 - j1 as f32 + Self::G3;
        let z1 = z0 - k1 as f32 + Self::G3;
        let x2 = x0 - i2 as f32 + 2.0 * Self::G3;
        let y2 = y0 - j2 as f32 + 2.0 * Self::G3;
        let z2 = z0 - k2 as f32 + 2.0 * Self::G3;
        let x3 = x0 - 1.0 + 3.0 * Self::G3;
        let y3 = y0 - 1.0 + 3.0 * Self::G3;
        let z3 = z0 - 1.0 + 3.0 * Self::G3;

        let n0 = self.corner(self.hash(i, j, k), x0, y0, z0);
        let n1 = self.corner(self.hash(i + i1, j + j1, k + k1), x1, y1, z1);
        let n2 = self.corner(self.hash(i + i2, j + j2, k + k2), x2, y2, z2);
        let n3 = self.corner(self.hash(i + 1, j + 1, k + 1), x3, y3, z3);

        32.0 * (n0 + n1 + n2 + n3)
    }
}
