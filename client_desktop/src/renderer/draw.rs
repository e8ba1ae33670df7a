use super::resources::{InstanceData, MAX_CIRCLE_INSTANCES, MAX_RECT_INSTANCES};
use super::Renderer;
use crate::font::Font;
use game_core::{Aabb, BallView, Params, Snapshot};
use tracing::warn;
use wgpu::*;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

pub fn draw_frame(
    renderer: &mut Renderer,
    snapshot: &Snapshot,
    font: &Font,
) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, snapshot, font);
    render_basic(renderer, &mut encoder, &view);

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn rect_instance(aabb: &Aabb) -> InstanceData {
    let size = aabb.size();
    InstanceData {
        transform: [
            aabb.min.x as f32,
            aabb.min.y as f32,
            size.x as f32,
            size.y as f32,
        ],
        tint: WHITE,
    }
}

/// Split a snapshot into rectangle and circle instances
pub fn build_instances(
    snapshot: &Snapshot,
    font: &Font,
) -> (Vec<InstanceData>, Vec<InstanceData>) {
    let mut rects = vec![rect_instance(&snapshot.paddle)];
    let mut circles = Vec::new();

    match snapshot.ball {
        BallView::Rect(aabb) => rects.push(rect_instance(&aabb)),
        BallView::Circle { center, radius } => circles.push(InstanceData {
            transform: [
                center.x as f32,
                center.y as f32,
                radius as f32,
                radius as f32,
            ],
            tint: WHITE,
        }),
    }

    for line in &snapshot.hud {
        rects.extend(
            font.layout(&line.text, line.offset, Params::HUD_FONT_SIZE)
                .iter()
                .map(rect_instance),
        );
    }

    (rects, circles)
}

fn update_buffers(renderer: &mut Renderer, snapshot: &Snapshot, font: &Font) {
    let (mut rects, mut circles) = build_instances(snapshot, font);

    if rects.len() > MAX_RECT_INSTANCES {
        warn!(count = rects.len(), "too many rect instances, truncating");
        rects.truncate(MAX_RECT_INSTANCES);
    }
    circles.truncate(MAX_CIRCLE_INSTANCES);

    let needs_update = renderer
        .last_instance_data
        .as_ref()
        .map(|(last_rects, last_circles)| *last_rects != rects || *last_circles != circles)
        .unwrap_or(true);

    if needs_update {
        if !rects.is_empty() {
            renderer
                .queue
                .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(&rects));
        }
        if !circles.is_empty() {
            renderer
                .queue
                .write_buffer(&renderer.buffers.circles, 0, bytemuck::cast_slice(&circles));
        }
        renderer.instance_counts = (rects.len() as u32, circles.len() as u32);
        renderer.last_instance_data = Some((rects, circles));
    }
}

fn render_basic(renderer: &Renderer, encoder: &mut CommandEncoder, view: &TextureView) {
    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(Color::BLACK),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    draw_objects(renderer, &mut pass);
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    let (rect_count, circle_count) = renderer.instance_counts;

    pass.set_pipeline(&renderer.shape_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (paddle, square ball, HUD text)
    if rect_count > 0 {
        let mesh = &renderer.meshes.0;
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..mesh.index_count, 0, 0..rect_count);
    }

    // Circle (round ball)
    if circle_count > 0 {
        let mesh = &renderer.meshes.1;
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
        pass.draw_indexed(0..mesh.index_count, 0, 0..circle_count);
    }
}
