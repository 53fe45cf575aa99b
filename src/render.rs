use crate::constants::{GLOBAL_UNIFORM_SIZE, MAX_DRAWS, OBJECT_UNIFORM_SIZE, OBJECT_UNIFORM_STRIDE};
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use organ_core::{Camera, Lighting, Material, SceneAnimator, Subject, Topology};
use web_sys as web;

mod helpers;
mod mesh;
use helpers::PipelineSpec;
use mesh::GpuModel;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4], // w = exposure
    key_dir: [f32; 4],
    key_color: [f32; 4],
    fill_dir: [f32; 4],
    fill_color: [f32; 4],
    back_pos: [f32; 4],
    back_color: [f32; 4],
}

impl GlobalUniforms {
    fn new(camera: &Camera, lighting: &Lighting) -> Self {
        let scaled = |c: [f32; 3], k: f32| [c[0] * k, c[1] * k, c[2] * k, 0.0];
        let dir = |p: Vec3| p.normalize_or_zero().extend(0.0).to_array();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: {
                let mut a = scaled([1.0; 3], lighting.ambient);
                a[3] = lighting.exposure;
                a
            },
            key_dir: dir(lighting.key.position),
            key_color: scaled(lighting.key.color, lighting.key.intensity),
            fill_dir: dir(lighting.fill.position),
            fill_color: scaled(lighting.fill.color, lighting.fill.intensity),
            back_pos: lighting.back.position.extend(1.0).to_array(),
            back_color: scaled(lighting.back.color, lighting.back.intensity),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],   // a = opacity
    surface: [f32; 4], // roughness, metalness, clearcoat, flat shading
}

impl ObjectUniforms {
    fn new(world: Mat4, material: &Material) -> Self {
        let [r, g, b] = material.color;
        Self {
            model: world.to_cols_array_2d(),
            color: [r, g, b, material.opacity],
            surface: [
                material.roughness,
                material.metalness,
                material.clearcoat,
                if material.flat_shading { 1.0 } else { 0.0 },
            ],
        }
    }
}

const _: () = assert!(std::mem::size_of::<GlobalUniforms>() as u64 == GLOBAL_UNIFORM_SIZE);
const _: () = assert!(std::mem::size_of::<ObjectUniforms>() as u64 == OBJECT_UNIFORM_SIZE);

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    global_buffer: wgpu::Buffer,
    global_bg: wgpu::BindGroup,
    object_buffer: wgpu::Buffer,
    object_bg: wgpu::BindGroup,
    object_staging: Vec<u8>,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    // Geometry is deterministic per subject, so uploads are reused across switches.
    models: FnvHashMap<Subject, GpuModel>,

    pub camera: Camera,
    pub lighting: Lighting,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    overflow_logged: bool,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // The page background shows through empty canvas areas.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("organ_shader"),
            source: wgpu::ShaderSource::Wgsl(organ_core::ORGAN_WGSL.into()),
        });
        let global_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(false, GLOBAL_UNIFORM_SIZE)],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("objects_bgl"),
            entries: &[helpers::uniform_layout_entry(true, OBJECT_UNIFORM_SIZE)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("organ_pl"),
            bind_group_layouts: &[&global_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = helpers::make_mesh_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineSpec {
                label: "mesh_pipeline",
                frag_entry: "fs_main",
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_write: true,
            },
        );
        let line_pipeline = helpers::make_mesh_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineSpec {
                label: "line_pipeline",
                frag_entry: "fs_line",
                topology: wgpu::PrimitiveTopology::LineList,
                depth_write: false,
            },
        );

        let global_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: GLOBAL_UNIFORM_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let global_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &global_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: global_buffer.as_entire_binding(),
            }],
        });
        let object_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("objects"),
            size: OBJECT_UNIFORM_STRIDE * MAX_DRAWS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let object_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("objects_bg"),
            layout: &object_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &object_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(OBJECT_UNIFORM_SIZE),
                }),
            }],
        });

        let mut camera = Camera::default();
        camera.set_viewport(width, height);
        log::info!("[gpu] ready {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            line_pipeline,
            global_buffer,
            global_bg,
            object_buffer,
            object_bg,
            object_staging: Vec::with_capacity(OBJECT_UNIFORM_STRIDE as usize * MAX_DRAWS),
            _depth_tex: depth_tex,
            depth_view,
            models: FnvHashMap::default(),
            camera,
            lighting: Lighting::default(),
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
            overflow_logged: false,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = tex;
            self.depth_view = view;
            self.camera.set_viewport(width, height);
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, animator: &SceneAnimator) -> Result<(), wgpu::SurfaceError> {
        let subject = animator.subject();
        let model = animator.model();
        let device = &self.device;
        let gpu_model = self
            .models
            .entry(subject)
            .or_insert_with(|| GpuModel::upload(device, model, subject.as_str()));

        let globals = GlobalUniforms::new(&self.camera, &self.lighting);
        self.queue
            .write_buffer(&self.global_buffer, 0, bytemuck::bytes_of(&globals));

        let count = model.objects.len().min(MAX_DRAWS);
        if count < model.objects.len() && !self.overflow_logged {
            log::warn!(
                "[gpu] {} objects exceed the per-frame limit of {}",
                model.objects.len(),
                MAX_DRAWS
            );
            self.overflow_logged = true;
        }
        let stride = OBJECT_UNIFORM_STRIDE as usize;
        self.object_staging.clear();
        self.object_staging.resize(count * stride, 0);
        for (i, (obj, world)) in model
            .objects
            .iter()
            .zip(animator.world_matrices())
            .take(count)
            .enumerate()
        {
            let u = ObjectUniforms::new(world, &model.materials[obj.material]);
            let at = i * stride;
            self.object_staging[at..at + OBJECT_UNIFORM_SIZE as usize]
                .copy_from_slice(bytemuck::bytes_of(&u));
        }
        if count > 0 {
            self.queue
                .write_buffer(&self.object_buffer, 0, &self.object_staging);
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("organ_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.global_bg, &[]);
            // Solid surfaces first, translucent wires on top.
            for (pipeline, topology) in [
                (&self.mesh_pipeline, Topology::Triangles),
                (&self.line_pipeline, Topology::Lines),
            ] {
                rpass.set_pipeline(pipeline);
                for (i, obj) in model.objects.iter().take(count).enumerate() {
                    let Some(mesh) = gpu_model.meshes.get(obj.mesh) else {
                        continue;
                    };
                    if mesh.topology != topology {
                        continue;
                    }
                    let offset = (i * stride) as u32;
                    rpass.set_bind_group(1, &self.object_bg, &[offset]);
                    rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
