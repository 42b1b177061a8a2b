use super::resources::MAX_INSTANCES;
use super::Renderer;
use crate::scene::{InstanceData, BACKGROUND};
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, instances: &[InstanceData]) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let count = update_buffers(renderer, instances);

    {
        let [r, g, b, a] = BACKGROUND;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color { r, g, b, a }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload this frame's rects; anything past the buffer capacity is dropped
fn update_buffers(renderer: &Renderer, instances: &[InstanceData]) -> u32 {
    let visible = &instances[..instances.len().min(MAX_INSTANCES)];
    if !visible.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(visible));
    }
    visible.len() as u32
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.rect_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.draw_indexed(0..renderer.rect_mesh.index_count, 0, 0..count);
}
