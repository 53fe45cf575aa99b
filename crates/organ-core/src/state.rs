//! Visual-side state types shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The web frontend consumes them to
//! build camera matrices and fill the lighting uniforms.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 12.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: 45f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Match the aspect ratio to a pixel size; zero-sized targets are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Light position; the light shines from here towards the origin.
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
}

/// Studio lighting for the organ models: ambient, key, fill and back light.
#[derive(Clone, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
    pub back: PointLight,
    pub exposure: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.25,
            key: DirectionalLight {
                color: [1.0, 1.0, 1.0],
                intensity: 1.1,
                position: Vec3::new(-5.0, 5.0, 6.0),
            },
            fill: DirectionalLight {
                color: crate::material::hex_to_linear(0x3b82f6),
                intensity: 0.6,
                position: Vec3::new(6.0, 0.0, 5.0),
            },
            back: PointLight {
                color: [1.0, 1.0, 1.0],
                intensity: 0.8,
                position: Vec3::new(0.0, 5.0, -10.0),
            },
            exposure: 2.2,
        }
    }
}
