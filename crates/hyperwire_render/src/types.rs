//! GPU-compatible data types for the overlay pipeline
//!
//! These types match the layouts in `shaders/overlay.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A screen-space vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    /// Position in logical pixels, origin top-left
    pub position: [f32; 2],
    /// RGBA color in the render target's color space
    pub color: [f32; 4],
}

impl OverlayVertex {
    #[inline]
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the overlay pipeline
///
/// Layout: 16 bytes (must match overlay.wgsl Uniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct OverlayUniforms {
    /// Viewport size in logical pixels
    pub screen_size: [f32; 2],
    pub _padding: [f32; 2],
}

impl OverlayUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for OverlayUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
