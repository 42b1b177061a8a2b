pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_rectangle, Mesh};
use crate::scene::InstanceData;
use resources::GameBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub rect_mesh: Mesh,
}

impl Renderer {
    /// Set up the GPU for an `arena_width` x `arena_height` view.
    /// The arena is fixed, so the camera is uploaded once here.
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        arena_width: f32,
        arena_height: f32,
    ) -> Result<Self, String> {
        let gpu = init::connect(canvas).await?;
        let camera = Camera::orthographic(arena_width, arena_height);

        let buffers = resources::create_buffers(&gpu.device, &camera);
        let pipes = pipeline::create_pipelines(&gpu.device, gpu.format);
        let rect_mesh = create_rectangle(&gpu.device);

        let camera_bind_group = gpu.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: gpu.device,
            queue: gpu.queue,
            surface: gpu.surface,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            rect_mesh,
        })
    }

    pub fn draw(&mut self, instances: &[InstanceData]) -> Result<(), String> {
        draw::draw_frame(self, instances)
    }
}
