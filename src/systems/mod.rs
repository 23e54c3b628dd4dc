//! Application systems
//!
//! Window and GPU state kept out of main.rs so the event loop stays small.

mod render;
mod window;

pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
