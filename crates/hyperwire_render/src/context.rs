//! WGPU device, queue, and surface management

use std::fmt;
use std::sync::Arc;
use winit::window::Window;

/// Error type for render context creation
#[derive(Debug)]
pub enum ContextError {
    /// The window surface could not be created
    Surface(wgpu::CreateSurfaceError),
    /// No adapter can present to the window
    NoAdapter,
    /// The adapter refused to create a device
    Device(wgpu::RequestDeviceError),
    /// The surface supports no texture formats on this adapter
    NoSurfaceFormat,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::Surface(err) => write!(f, "Failed to create surface: {}", err),
            ContextError::NoAdapter => write!(f, "No compatible GPU adapter found"),
            ContextError::Device(err) => write!(f, "Failed to create device: {}", err),
            ContextError::NoSurfaceFormat => write!(f, "Surface reports no supported formats"),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContextError::Surface(err) => Some(err),
            ContextError::Device(err) => Some(err),
            ContextError::NoAdapter | ContextError::NoSurfaceFormat => None,
        }
    }
}

/// GPU state for one window
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    /// Surface size in physical pixels
    pub size: winit::dpi::PhysicalSize<u32>,
    /// Physical pixels per logical pixel
    pub scale_factor: f64,
}

impl RenderContext {
    /// Create a context, choosing the present mode from `vsync`
    pub async fn with_vsync(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .map_err(ContextError::Surface)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Hyperwire Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(ContextError::Device)?;

        let caps = surface.get_capabilities(&adapter);
        // Prefer an sRGB target so vertex colors can be given in linear space
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(ContextError::NoSurfaceFormat)?;

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            desired_maximum_frame_latency: 2,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            scale_factor,
        })
    }

    /// Reconfigure the surface for a new window size
    ///
    /// Zero-sized (minimised) windows keep the previous configuration.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reapply the current configuration (after a lost or outdated surface)
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Surface size in logical pixels
    pub fn logical_size(&self) -> (f32, f32) {
        (
            (self.config.width as f64 / self.scale_factor) as f32,
            (self.config.height as f64 / self.scale_factor) as f32,
        )
    }

    /// True if vertex colors must be given in linear space
    pub fn is_srgb(&self) -> bool {
        self.config.format.is_srgb()
    }
}
