//! Window management system
//!
//! Handles window creation and redraw requests.

use std::sync::Arc;
use winit::{event_loop::ActiveEventLoop, window::Window};

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create a fixed-size window with the given logical size
    pub fn create(
        event_loop: &ActiveEventLoop,
        title: &str,
        (width, height): (u32, u32),
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(title)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!("Created {}x{} window \"{}\"", width, height, title);

        Ok(Self { window })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
