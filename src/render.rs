use crate::constants::*;
use crate::core::{
    generate_box, generate_torus, Camera, GroupKind, MeshBuffers, SceneContext, BOX_SIZE,
    PRIMITIVE_ATTEMPTS, TORUS_RADIAL_SEGMENTS, TORUS_RADIUS, TORUS_TUBE, TORUS_TUBULAR_SEGMENTS,
};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod mesh;
mod pipeline;
mod targets;

use mesh::{GpuMesh, InstanceBuffer, InstanceRaw};
use pipeline::{SceneResources, SceneUniforms};
use targets::RenderTargets;

// Flat tangent-space normal used until the normal map arrives.
const FLAT_NORMAL_RGBA: [u8; 4] = [128, 128, 255, 255];

/// Material of one group: base tint and whether it samples the normal map.
#[derive(Clone, Copy)]
struct GroupMaterial {
    tint: [f32; 4],
    normal_mapped: bool,
}

fn material_for(kind: GroupKind) -> GroupMaterial {
    match kind {
        GroupKind::Text => GroupMaterial {
            tint: TEXT_COLOR,
            normal_mapped: false,
        },
        GroupKind::Toruses => GroupMaterial {
            tint: TORUS_COLOR,
            normal_mapped: true,
        },
        GroupKind::Boxes => GroupMaterial {
            tint: BOX_COLOR,
            normal_mapped: true,
        },
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene: SceneResources,
    bind_group: wgpu::BindGroup,
    normal_map: (wgpu::Texture, wgpu::TextureView),

    // one mesh and one instance buffer per group, indexed by GroupKind::index
    meshes: [Option<GpuMesh>; 3],
    instances: [InstanceBuffer; 3],
    // reused every frame to stage one group's instance data
    instance_scratch: Vec<InstanceRaw>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
                    // default limits; older WebGPU impls reject unknown fields
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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, config.width, config.height);
        let scene = pipeline::create_scene_resources(&device, format);
        let normal_map = helpers::upload_rgba_texture(
            &device,
            &queue,
            "normal_map_flat",
            1,
            1,
            &FLAT_NORMAL_RGBA,
        );
        let bind_group = pipeline::create_bind_group(&device, &scene, &normal_map.1);

        let box_mesh = GpuMesh::upload(
            &device,
            "box_mesh",
            &generate_box(BOX_SIZE, BOX_SIZE, BOX_SIZE),
        );
        let torus_mesh = GpuMesh::upload(
            &device,
            "torus_mesh",
            &generate_torus(
                TORUS_RADIUS,
                TORUS_TUBE,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
        );
        let instances = [
            InstanceBuffer::new(&device, "text_instances", 1),
            InstanceBuffer::new(&device, "torus_instances", PRIMITIVE_ATTEMPTS),
            InstanceBuffer::new(&device, "box_instances", PRIMITIVE_ATTEMPTS),
        ];
        log::info!("[gpu] surface {}x{} format={:?}", config.width, config.height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            bind_group,
            normal_map,
            meshes: [None, torus_mesh, box_mesh],
            instances,
            instance_scratch: Vec::with_capacity(PRIMITIVE_ATTEMPTS),
            width: width.max(1),
            height: height.max(1),
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    /// Replace the flat normal map with decoded RGBA8 pixels.
    pub fn set_normal_map(&mut self, width: u32, height: u32, rgba: &[u8]) {
        if width == 0 || height == 0 || rgba.len() < (width * height * 4) as usize {
            log::error!("[gpu] normal map has bad dimensions {}x{}", width, height);
            return;
        }
        self.normal_map = helpers::upload_rgba_texture(
            &self.device,
            &self.queue,
            "normal_map",
            width,
            height,
            rgba,
        );
        self.bind_group =
            pipeline::create_bind_group(&self.device, &self.scene, &self.normal_map.1);
    }

    pub fn set_text_mesh(&mut self, mesh: &MeshBuffers) {
        self.meshes[GroupKind::Text.index()] = GpuMesh::upload(&self.device, "text_mesh", mesh);
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
            self.targets.recreate(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        scene: &SceneContext,
    ) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: (Vec3::from_array(AMBIENT_COLOR) * AMBIENT_INTENSITY)
                .extend(1.0)
                .to_array(),
            sun_dir: Vec3::from_array(SUN_DIRECTION)
                .normalize_or_zero()
                .extend(SUN_INTENSITY)
                .to_array(),
            point_pos: Vec3::from_array(POINT_LIGHT_POSITION)
                .extend(POINT_LIGHT_INTENSITY)
                .to_array(),
            material: [NORMAL_MAP_STRENGTH, SPECULAR_SHININESS, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        // instance data for every visible, non-empty group with a mesh
        let mut draw = [false; 3];
        for kind in GroupKind::ALL {
            let i = kind.index();
            if !scene.is_visible(kind) || self.meshes[i].is_none() {
                continue;
            }
            let mat = material_for(kind);
            self.instance_scratch.clear();
            self.instance_scratch.extend(
                scene
                    .world_transforms_iter(kind)
                    .map(|m| InstanceRaw::new(m, mat.tint, mat.normal_mapped)),
            );
            self.instances[i].write(&self.device, &self.queue, &self.instance_scratch);
            draw[i] = !self.instance_scratch.is_empty();
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
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            for kind in GroupKind::ALL {
                let i = kind.index();
                let (Some(mesh), true) = (&self.meshes[i], draw[i]) else {
                    continue;
                };
                let inst = &self.instances[i];
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, inst.buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..inst.len);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
