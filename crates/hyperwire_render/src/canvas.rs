//! CPU-side tessellation of drawing primitives
//!
//! [`Canvas`] records one frame of circles, lines and rects as a triangle
//! list in logical pixel coordinates. The render system uploads the result
//! through [`OverlayPipeline`](crate::OverlayPipeline). Text is kept as
//! [`TextRun`]s for the [`TextRenderer`](crate::TextRenderer).

use hyperwire_core::{Color, Rect, ScreenPoint, Surface};

use crate::text::TextRun;
use crate::types::OverlayVertex;

/// Triangles per circle fan
pub const CIRCLE_SEGMENTS: usize = 24;

/// One frame's worth of screen-space geometry
#[derive(Clone, Debug)]
pub struct Canvas {
    vertices: Vec<OverlayVertex>,
    text_runs: Vec<TextRun>,
    clear_color: Color,
    /// Emit linear-light colors (sRGB render target)
    linear: bool,
}

impl Canvas {
    /// Create an empty canvas
    ///
    /// `linear` should be true when the render target applies sRGB
    /// encoding on write.
    pub fn new(linear: bool) -> Self {
        Self {
            vertices: Vec::new(),
            text_runs: Vec::new(),
            clear_color: Color::BLACK,
            linear,
        }
    }

    pub fn vertices(&self) -> &[OverlayVertex] {
        &self.vertices
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    /// The clear color in the render target's color space
    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.encode(self.clear_color);
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }

    fn encode(&self, color: Color) -> [f32; 4] {
        if self.linear {
            color.to_linear_rgba()
        } else {
            let [r, g, b] = color.to_srgb_f32();
            [r, g, b, 1.0]
        }
    }

    fn push_triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], color: [f32; 4]) {
        self.vertices.extend_from_slice(&[
            OverlayVertex::new(a, color),
            OverlayVertex::new(b, color),
            OverlayVertex::new(c, color),
        ]);
    }

    fn push_quad(&mut self, corners: [[f32; 2]; 4], color: [f32; 4]) {
        let [p0, p1, p2, p3] = corners;
        self.push_triangle(p0, p1, p2, color);
        self.push_triangle(p0, p2, p3, color);
    }

    fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) {
        self.push_quad(
            [
                [x, y],
                [x + width, y],
                [x + width, y + height],
                [x, y + height],
            ],
            color,
        );
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Surface for Canvas {
    fn clear_screen(&mut self, color: Color) {
        self.vertices.clear();
        self.text_runs.clear();
        self.clear_color = color;
    }

    fn draw_circle(&mut self, center: ScreenPoint, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let color = self.encode(color);
        let c = [center.x as f32, center.y as f32];
        let step = std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
        for i in 0..CIRCLE_SEGMENTS {
            let a0 = step * i as f32;
            let a1 = step * (i + 1) as f32;
            let p0 = [c[0] + radius * a0.cos(), c[1] + radius * a0.sin()];
            let p1 = [c[0] + radius * a1.cos(), c[1] + radius * a1.sin()];
            self.push_triangle(c, p0, p1, color);
        }
    }

    fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: Color, thickness: f32) {
        if thickness <= 0.0 {
            return;
        }
        let color = self.encode(color);
        let half = thickness * 0.5;
        let (ax, ay) = (a.x as f32, a.y as f32);
        let (bx, by) = (b.x as f32, b.y as f32);
        let (dx, dy) = (bx - ax, by - ay);
        let len = (dx * dx + dy * dy).sqrt();

        if len == 0.0 {
            self.push_rect(ax - half, ay - half, thickness, thickness, color);
            return;
        }

        // Unit normal scaled to half the thickness
        let nx = -dy / len * half;
        let ny = dx / len * half;
        self.push_quad(
            [
                [ax + nx, ay + ny],
                [bx + nx, by + ny],
                [bx - nx, by - ny],
                [ax - nx, ay - ny],
            ],
            color,
        );
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let color = self.encode(color);
        self.push_rect(rect.x, rect.y, rect.width, rect.height, color);
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint, color: Color) {
        if text.is_empty() {
            return;
        }
        self.text_runs.push(TextRun {
            text: text.to_string(),
            position: [position.x as f32, position.y as f32],
            color,
        });
    }
}
