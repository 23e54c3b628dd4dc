//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hyperwire_core::{ScreenPoint, SceneOptions, ShapeKind};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Which shape to show and how
    #[serde(default)]
    pub scene: SceneConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HW_SCENE__SHAPE=tesseract -> scene.shape = "tesseract"
        figment = figment.merge(Env::prefixed("HW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Window size in logical pixels, falling back to the shape's layout
    pub fn window_size(&self) -> (u32, u32) {
        let (default_width, default_height) = self.scene.shape.default_window_size();
        (
            self.window.width.unwrap_or(default_width),
            self.window.height.unwrap_or(default_height),
        )
    }

    /// Options for building the configured shape's scene
    pub fn scene_options(&self) -> SceneOptions {
        let (window_width, window_height) = self.window_size();
        SceneOptions {
            window_width,
            window_height,
            prism_sides: self.scene.prism_sides,
            interactive: self.scene.interactive,
            origin: self.scene.origin.map(|[x, y]| ScreenPoint::new(x, y)),
        }
    }

    /// Window title including the shape name
    pub fn window_title(&self) -> String {
        format!("{} - {} [Esc to exit]", self.window.title, self.scene.shape)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels (defaults to the shape's layout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Window height in pixels (defaults to the shape's layout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperwire".to_string(),
            width: None,
            height: None,
            vsync: true,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Which preset to show
    pub shape: ShapeKind,
    /// Side count for the prism preset
    pub prism_sides: usize,
    /// Force sliders on or off; unset keeps the preset's choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
    /// Screen position of the projected origin [x, y]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<[i32; 2]>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Cube,
            prism_sides: 6,
            interactive: None,
            origin: None,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Frames per second the animation is paced to
    pub target_fps: u32,
}

impl RenderingConfig {
    /// Time between frames; a zero rate is treated as one frame per second
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scene.shape, ShapeKind::Cube);
        assert_eq!(config.rendering.target_fps, 60);
        assert_eq!(config.window_size(), (1000, 600));
    }

    #[test]
    fn test_window_size_follows_shape() {
        let mut config = AppConfig::default();
        config.scene.shape = ShapeKind::Prism;
        assert_eq!(config.window_size(), (800, 600));

        config.window.width = Some(1280);
        assert_eq!(config.window_size(), (1280, 600));
    }

    #[test]
    fn test_scene_options() {
        let mut config = AppConfig::default();
        config.scene.shape = ShapeKind::Tesseract;
        config.scene.origin = Some([10, 20]);
        config.scene.interactive = Some(false);

        let options = config.scene_options();
        assert_eq!(options.window_width, 1000);
        assert_eq!(options.prism_sides, 6);
        assert_eq!(options.interactive, Some(false));
        assert_eq!(options.origin, Some(ScreenPoint::new(10, 20)));
    }

    #[test]
    fn test_frame_interval() {
        let rendering = RenderingConfig { target_fps: 50 };
        assert_eq!(rendering.frame_interval(), Duration::from_millis(20));

        let zero = RenderingConfig { target_fps: 0 };
        assert_eq!(zero.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_window_title() {
        let mut config = AppConfig::default();
        config.scene.shape = ShapeKind::Tesseract;
        assert_eq!(config.window_title(), "Hyperwire - tesseract [Esc to exit]");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("shape = \"cube\""));
        assert!(toml.contains("target_fps"));
    }

    #[test]
    fn test_config_deserialization_partial() {
        let config: AppConfig = toml::from_str(
            r#"
            [scene]
            shape = "prism"
            interactive = true
            "#,
        )
        .unwrap();
        assert_eq!(config.scene.shape, ShapeKind::Prism);
        assert_eq!(config.scene.interactive, Some(true));
        assert_eq!(config.scene.prism_sides, 6);
        assert_eq!(config.debug.log_level, "info");
    }
}
