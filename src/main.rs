//! Hyperwire - rotating wireframe polytopes
//!
//! Shows a cube, hexagonal prism or tesseract spinning in its rotation
//! planes, with sliders for the rotation speeds and zoom.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use hyperwire::config::AppConfig;
use hyperwire::systems::{RenderError, RenderSystem, WindowSystem};
use hyperwire_core::{Animator, DriverState, InputEvent, Scene, SceneError};
use hyperwire_input::EventTranslator;

/// Main application state
struct App {
    config: AppConfig,
    animator: Animator,
    translator: EventTranslator,
    /// Events received since the last frame
    pending: Vec<InputEvent>,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    next_frame: Instant,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, SceneError> {
        let scene = Scene::preset(config.scene.shape, &config.scene_options())?;
        let animator = Animator::new(scene)?;

        Ok(Self {
            config,
            animator,
            translator: EventTranslator::new(),
            pending: Vec::new(),
            window: None,
            renderer: None,
            next_frame: Instant::now(),
        })
    }

    /// Run one animation frame and present it
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let events = std::mem::take(&mut self.pending);
        if self.animator.frame(events, renderer) == DriverState::Terminated {
            event_loop.exit();
            return;
        }

        match renderer.present_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => log::warn!("Surface lost, reconfigured"),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Schedule the next tick at the configured frame rate
    fn schedule(&mut self, event_loop: &ActiveEventLoop) {
        let interval = self.config.rendering.frame_interval();
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame += interval;
            // Fell behind: do not try to catch up
            if self.next_frame < now {
                self.next_frame = now + interval;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(
            event_loop,
            &self.config.window_title(),
            self.config.window_size(),
        ) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialise renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.translator.set_scale_factor(window.scale_factor());
        self.next_frame = Instant::now();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.schedule(event_loop);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.translator.set_scale_factor(scale_factor);
                if let Some(renderer) = &mut self.renderer {
                    renderer.set_scale_factor(scale_factor);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            other => {
                if let Some(input) = self.translator.translate(&other) {
                    let exit = input.is_exit();
                    self.pending.push(input);
                    // Handle exits on the next frame even if redraws are throttled
                    if exit {
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !event_loop.exiting() {
            self.schedule(event_loop);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging; RUST_LOG overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Hyperwire ({})", config.scene.shape);

    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app)?;

    Ok(())
}
