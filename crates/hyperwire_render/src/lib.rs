//! Rendering Library
//!
//! This crate provides the wgpu implementation of the
//! [`Surface`](hyperwire_core::Surface) drawing primitives.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`canvas::Canvas`] - Tessellates circles, lines and rects into triangles
//! - [`pipeline::OverlayPipeline`] - Draws screen-space colored triangles
//! - [`text::TextRenderer`] - Draws label text with egui on top of the overlay

pub mod canvas;
pub mod context;
pub mod pipeline;
pub mod text;
pub mod types;

pub use canvas::Canvas;
pub use context::{ContextError, RenderContext};
pub use pipeline::OverlayPipeline;
pub use text::{TextRenderer, TextRun};
pub use types::{OverlayUniforms, OverlayVertex};
