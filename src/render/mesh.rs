use organ_core::{OrganModel, Topology};
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) topology: Topology,
}

/// Device-side copy of a subject's meshes, indexed like `OrganModel::meshes`.
pub(crate) struct GpuModel {
    pub(crate) meshes: Vec<GpuMesh>,
}

impl GpuModel {
    pub(crate) fn upload(device: &wgpu::Device, model: &OrganModel, label: &str) -> Self {
        let meshes = model
            .meshes
            .iter()
            .enumerate()
            .map(|(i, m)| GpuMesh {
                vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label}_vb{i}")),
                    contents: bytemuck::cast_slice(&m.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label}_ib{i}")),
                    contents: bytemuck::cast_slice(&m.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: m.indices.len() as u32,
                topology: m.topology,
            })
            .collect();
        log::info!(
            "[gpu] uploaded {label}: {} meshes",
            model.meshes.len()
        );
        Self { meshes }
    }
}
