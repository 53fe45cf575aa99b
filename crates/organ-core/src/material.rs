/// Surface description for one organ part, in linear color space.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub clearcoat: f32,
    pub opacity: f32,
    pub flat_shading: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            roughness: 1.0,
            metalness: 0.0,
            clearcoat: 0.0,
            opacity: 1.0,
            flat_shading: false,
        }
    }
}

impl Material {
    /// Opaque material from an sRGB hex color such as `0x880000`.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            color: hex_to_linear(hex),
            ..Self::default()
        }
    }

    pub fn roughness(mut self, v: f32) -> Self {
        self.roughness = v;
        self
    }

    pub fn metalness(mut self, v: f32) -> Self {
        self.metalness = v;
        self
    }

    pub fn clearcoat(mut self, v: f32) -> Self {
        self.clearcoat = v;
        self
    }

    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = v.clamp(0.0, 1.0);
        self
    }

    pub fn flat(mut self) -> Self {
        self.flat_shading = true;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert `0xRRGGBB` into linear RGB in \[0, 1\].
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}
