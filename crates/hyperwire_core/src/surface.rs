//! Rendering surface contract
//!
//! The animation driver and widgets draw through [`Surface`]; the GPU
//! backend lives in `hyperwire_render`. All coordinates are window pixels
//! with the origin at the top-left corner.

/// 8-bit sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components as floats in [0, 1], still sRGB encoded
    pub fn to_srgb_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Opaque linear-light RGBA, for sRGB render targets
    pub fn to_linear_rgba(self) -> [f32; 4] {
        let [r, g, b] = self.to_srgb_f32().map(srgb_to_linear);
        [r, g, b, 1.0]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A pixel position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel space
///
/// Containment is half-open: the left/top edges are inside, the
/// right/bottom edges are not.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the rectangle by `margin` on every side
    pub fn expanded(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Drawing primitives the core writes to each frame
pub trait Surface {
    /// Fill the whole frame with one color
    fn clear_screen(&mut self, color: Color);

    /// Filled circle centered at `center`
    fn draw_circle(&mut self, center: ScreenPoint, radius: f32, color: Color);

    /// Line segment `thickness` pixels wide
    fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: Color, thickness: f32);

    /// Filled rectangle
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: ScreenPoint, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::new(50.0, 50.0, 200.0, 10.0);
        assert!(r.contains(50.0, 50.0));
        assert!(r.contains(249.9, 59.9));
        assert!(!r.contains(250.0, 55.0));
        assert!(!r.contains(100.0, 60.0));
        assert!(!r.contains(49.9, 55.0));
    }

    #[test]
    fn test_rect_expanded() {
        let r = Rect::new(10.0, 20.0, 0.0, 10.0).expanded(10.0);
        assert_eq!(r, Rect::new(0.0, 10.0, 20.0, 30.0));
    }

    #[test]
    fn test_color_linear_endpoints() {
        assert_eq!(Color::BLACK.to_linear_rgba(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::WHITE.to_linear_rgba();
        for c in &white[..3] {
            assert!((c - 1.0).abs() < 0.0001);
        }
    }

    #[test]
    fn test_color_linear_is_darker_midtone() {
        let [r, _, _, _] = Color::rgb(128, 0, 0).to_linear_rgba();
        assert!(r < 0.5 && r > 0.2);
    }
}
