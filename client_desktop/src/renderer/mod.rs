pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::font::Font;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use anyhow::Result;
use game_core::Snapshot;
use resources::{GameBuffers, InstanceData};
use tracing::debug;
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    // Pipeline
    pub shape_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    // State
    pub instance_counts: (u32, u32), // rects, circles
    pub last_instance_data: Option<(Vec<InstanceData>, Vec<InstanceData>)>,
}

impl Renderer {
    /// Set up wgpu for `window`, drawing a fixed `width` x `height` logical arena
    pub async fn new(window: Arc<Window>, width: f32, height: f32) -> Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_shape_pipeline(&ctx.device, ctx.config.format);

        // Meshes
        let (rect_vertices, rect_indices) = create_rectangle();
        let (circle_vertices, circle_indices) = create_circle(32);
        let rect_mesh = Mesh::new(&ctx.device, "Rect", &rect_vertices, &rect_indices);
        let circle_mesh = Mesh::new(&ctx.device, "Circle", &circle_vertices, &circle_indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            shape_pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            instance_counts: (0, 0),
            last_instance_data: None,
        })
    }

    /// Follow a window resize; the arena keeps its logical size and is stretched
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        debug!(width, height, "resizing surface");
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    /// Re-apply the current surface configuration after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, snapshot: &Snapshot, font: &Font) -> Result<(), SurfaceError> {
        draw::draw_frame(self, snapshot, font)
    }
}
