//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperwire::config::AppConfig;
use hyperwire_core::{Animator, Scene, ShapeKind};
use serial_test::serial;

fn clear_env() {
    for key in [
        "HW_WINDOW__TITLE",
        "HW_SCENE__SHAPE",
        "HW_SCENE__INTERACTIVE",
        "HW_RENDERING__TARGET_FPS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_env_override() {
    clear_env();
    std::env::set_var("HW_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    clear_env();
}

#[test]
#[serial]
fn test_env_selects_shape() {
    clear_env();
    std::env::set_var("HW_SCENE__SHAPE", "tesseract");
    std::env::set_var("HW_RENDERING__TARGET_FPS", "30");
    let config = AppConfig::load().unwrap();
    clear_env();

    assert_eq!(config.scene.shape, ShapeKind::Tesseract);
    assert_eq!(config.rendering.target_fps, 30);
    assert_eq!(config.window_size(), (1000, 600));
}

#[test]
#[serial]
fn test_default_file_loads() {
    clear_env();
    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Hyperwire");
    assert_eq!(config.scene.prism_sides, 6);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    clear_env();
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.scene.shape, ShapeKind::Cube);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_invalid_shape_is_an_error() {
    clear_env();
    std::env::set_var("HW_SCENE__SHAPE", "dodecahedron");
    let result = AppConfig::load();
    clear_env();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_prism_made_interactive_from_env() {
    clear_env();
    std::env::set_var("HW_SCENE__SHAPE", "prism");
    std::env::set_var("HW_SCENE__INTERACTIVE", "true");
    let config = AppConfig::load().unwrap();
    clear_env();

    let scene = Scene::preset(config.scene.shape, &config.scene_options()).unwrap();
    assert_eq!(scene.sliders.len(), 4);
    assert!(Animator::new(scene).is_ok());
}
