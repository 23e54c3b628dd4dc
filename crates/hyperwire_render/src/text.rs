//! Label text through egui
//!
//! [`Canvas`](crate::Canvas) records text as [`TextRun`]s. Each frame the
//! runs are laid out with egui's painter, tessellated, and drawn by
//! `egui_wgpu` in a second pass over the overlay.

use hyperwire_core::Color;

/// Label height in logical pixels
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// One piece of text anchored at its top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner in logical pixels
    pub position: [f32; 2],
    pub color: Color,
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Run one egui pass that paints `runs` on the background layer
///
/// `logical_size` is the screen size in points (logical pixels).
pub fn layout_runs(
    ctx: &egui::Context,
    runs: &[TextRun],
    logical_size: [f32; 2],
    pixels_per_point: f32,
) -> egui::FullOutput {
    ctx.set_pixels_per_point(pixels_per_point);

    let raw_input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(logical_size[0], logical_size[1]),
        )),
        ..Default::default()
    };

    ctx.run(raw_input, |ctx| {
        let painter = ctx.layer_painter(egui::LayerId::background());
        for run in runs {
            painter.text(
                egui::pos2(run.position[0], run.position[1]),
                egui::Align2::LEFT_TOP,
                &run.text,
                egui::FontId::monospace(LABEL_FONT_SIZE),
                to_color32(run.color),
            );
        }
    })
}

/// Draws [`TextRun`]s on top of an already rendered frame
pub struct TextRenderer {
    egui_ctx: egui::Context,
    renderer: egui_wgpu::Renderer,
}

impl TextRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let renderer = egui_wgpu::Renderer::new(device, format, None, 1, false);
        Self {
            egui_ctx: egui::Context::default(),
            renderer,
        }
    }

    /// Lay out `runs` and record their draw into `encoder`
    ///
    /// The pass loads the existing contents of `view`.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        runs: &[TextRun],
        size_in_pixels: [u32; 2],
        pixels_per_point: f32,
    ) {
        let logical_size = [
            size_in_pixels[0] as f32 / pixels_per_point,
            size_in_pixels[1] as f32 / pixels_per_point,
        ];
        let output = layout_runs(&self.egui_ctx, runs, logical_size, pixels_per_point);

        for (id, image_delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let paint_jobs = self
            .egui_ctx
            .tessellate(output.shapes, output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: output.pixels_per_point,
        };

        let user_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);
        if !user_buffers.is_empty() {
            queue.submit(user_buffers);
        }

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Text Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui_wgpu wants a 'static pass; it is dropped before the encoder finishes
            let mut render_pass = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
