//! GPU rendering system
//!
//! Collects one frame of drawing calls in a [`Canvas`] and presents it
//! through the overlay pipeline, with labels drawn by the text renderer.

use std::sync::Arc;
use winit::window::Window;
use hyperwire_core::{Color, Rect, ScreenPoint, Surface};
use hyperwire_render::{
    Canvas, ContextError, OverlayPipeline, OverlayUniforms, RenderContext, TextRenderer,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated; it has been reconfigured
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
///
/// Implements [`Surface`] by recording into its canvas; nothing reaches the
/// screen until [`present_frame`](Self::present_frame).
pub struct RenderSystem {
    context: RenderContext,
    pipeline: OverlayPipeline,
    text: TextRenderer,
    canvas: Canvas,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = OverlayPipeline::new(&context.device, context.config.format);
        let text = TextRenderer::new(&context.device, context.config.format);
        let canvas = Canvas::new(context.is_srgb());

        log::info!(
            "Surface format {:?} ({}x{} physical)",
            context.config.format,
            context.size.width,
            context.size.height
        );

        Ok(Self {
            context,
            pipeline,
            text,
            canvas,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.context.set_scale_factor(scale_factor);
    }

    /// Upload the recorded frame and present it
    pub fn present_frame(&mut self) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let (width, height) = self.context.logical_size();
        self.pipeline
            .update_uniforms(&self.context.queue, &OverlayUniforms::new(width, height));
        self.pipeline.upload_vertices(
            &self.context.device,
            &self.context.queue,
            self.canvas.vertices(),
        );

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, self.canvas.wgpu_clear_color());
        self.text.render(
            &self.context.device,
            &self.context.queue,
            &mut encoder,
            &view,
            self.canvas.text_runs(),
            [self.context.config.width, self.context.config.height],
            self.context.scale_factor as f32,
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl Surface for RenderSystem {
    fn clear_screen(&mut self, color: Color) {
        self.canvas.clear_screen(color);
    }

    fn draw_circle(&mut self, center: ScreenPoint, radius: f32, color: Color) {
        self.canvas.draw_circle(center, radius, color);
    }

    fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: Color, thickness: f32) {
        self.canvas.draw_line(a, b, color, thickness);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.draw_rect(rect, color);
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint, color: Color) {
        self.canvas.draw_text(text, position, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
