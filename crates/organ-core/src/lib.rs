pub mod animator;
pub mod constants;
pub mod material;
pub mod mesh;
pub mod noise;
pub mod organs;
pub mod state;
pub mod subject;
pub mod waveform;

// Shaders bundled as string constants
pub static ORGAN_WGSL: &str = include_str!("../shaders/organ.wgsl");

pub use animator::*;
pub use material::*;
pub use mesh::{MeshData, Topology, Vertex};
pub use organs::OrganModel;
pub use state::*;
pub use subject::*;
pub use waveform::*;
