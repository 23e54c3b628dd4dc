//! Scenes: a polytope plus everything needed to animate and draw it
//!
//! [`Scene::preset`] builds the three stock scenes (cube, hexagonal prism,
//! tesseract). Scenes can also be assembled by hand for custom point sets.

use crate::hypercube::Hypercube;
use crate::polytope::{GeometryError, Polytope, PolytopeGenerator};
use crate::prism::Prism;
use crate::rotation::RotationPlane;
use crate::slider::{Slider, SliderError};
use crate::surface::{Color, Rect, ScreenPoint};
use hyperwire_math::{MathError, ProjectionChain};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a per-frame value comes from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Parameter {
    /// A constant
    Fixed(f32),
    /// The current value of the scene slider at this index
    Slider(usize),
}

/// A rotation plane and the per-tick speed driving it
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneBinding {
    pub plane: RotationPlane,
    pub speed: Parameter,
}

/// Colors and sizes used when drawing the wireframe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub background: Color,
    pub point_color: Color,
    pub point_radius: f32,
    pub edge_color: Color,
    pub edge_thickness: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            point_color: Color::WHITE,
            point_radius: 5.0,
            edge_color: Color::WHITE,
            edge_thickness: 2.0,
        }
    }
}

/// The stock shapes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Cube,
    Prism,
    Tesseract,
}

impl ShapeKind {
    /// Window size the preset is laid out for
    pub fn default_window_size(self) -> (u32, u32) {
        match self {
            ShapeKind::Cube | ShapeKind::Tesseract => (1000, 600),
            ShapeKind::Prism => (800, 600),
        }
    }

    /// Whether the preset comes with sliders
    pub fn default_interactive(self) -> bool {
        !matches!(self, ShapeKind::Prism)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Cube => write!(f, "cube"),
            ShapeKind::Prism => write!(f, "prism"),
            ShapeKind::Tesseract => write!(f, "tesseract"),
        }
    }
}

/// Inputs to [`Scene::preset`]
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
    pub window_width: u32,
    pub window_height: u32,
    /// Number of sides for the prism preset
    pub prism_sides: usize,
    /// Attach sliders (`Some(true)`) or use fixed parameters (`Some(false)`);
    /// `None` keeps the preset's own choice
    pub interactive: Option<bool>,
    /// Screen position of the projected origin; `None` derives it from the window
    pub origin: Option<ScreenPoint>,
}

impl SceneOptions {
    /// Options matching a preset's default window
    pub fn for_shape(kind: ShapeKind) -> Self {
        let (window_width, window_height) = kind.default_window_size();
        Self {
            window_width,
            window_height,
            prism_sides: 6,
            interactive: None,
            origin: None,
        }
    }
}

/// Error type for scene construction
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    Geometry(GeometryError),
    Math(MathError),
    Slider(SliderError),
    /// A parameter refers to a slider that does not exist
    UnknownSlider(usize),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Geometry(err) => write!(f, "Scene geometry error: {}", err),
            SceneError::Math(err) => write!(f, "Scene math error: {}", err),
            SceneError::Slider(err) => write!(f, "Scene slider error: {}", err),
            SceneError::UnknownSlider(index) => write!(f, "Unknown slider index: {}", index),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Geometry(err) => Some(err),
            SceneError::Math(err) => Some(err),
            SceneError::Slider(err) => Some(err),
            SceneError::UnknownSlider(_) => None,
        }
    }
}

impl From<GeometryError> for SceneError {
    fn from(err: GeometryError) -> Self {
        SceneError::Geometry(err)
    }
}

impl From<MathError> for SceneError {
    fn from(err: MathError) -> Self {
        SceneError::Math(err)
    }
}

impl From<SliderError> for SceneError {
    fn from(err: SliderError) -> Self {
        SceneError::Slider(err)
    }
}

/// Everything the animator needs for one shape
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub polytope: Polytope,
    /// Rotations, applied in this order every frame
    pub planes: Vec<PlaneBinding>,
    /// Pixels per projected unit
    pub scale: Parameter,
    pub origin: ScreenPoint,
    pub projection: ProjectionChain,
    pub style: Style,
    pub sliders: Vec<Slider>,
}

/// One slider-controlled parameter of a preset
struct ParameterSpec {
    label: &'static str,
    min: f32,
    max: f32,
    initial: f32,
}

const SPEED_RANGE_3D: (f32, f32) = (0.0, 0.2);
const SPEED_RANGE_4D: (f32, f32) = (0.0, 0.1);

/// Slider track layout: first track position, spacing, size
const SLIDER_X: f32 = 50.0;
const SLIDER_Y: f32 = 50.0;
const SLIDER_SPACING: f32 = 50.0;
const SLIDER_WIDTH: f32 = 200.0;
const SLIDER_HEIGHT: f32 = 10.0;

/// Shift of the origin to the right so sliders don't cover the shape
const SLIDER_PANEL_SHIFT: i32 = 100;

impl Scene {
    /// Build one of the stock scenes
    pub fn preset(kind: ShapeKind, options: &SceneOptions) -> Result<Self, SceneError> {
        let interactive = options.interactive.unwrap_or(kind.default_interactive());

        let (polytope, planes, speeds, scale, style, precision) = match kind {
            ShapeKind::Cube | ShapeKind::Prism => {
                let polytope = if kind == ShapeKind::Cube {
                    Hypercube::cube().build()?
                } else {
                    Prism::new(options.prism_sides).build()?
                };
                let planes = vec![
                    RotationPlane::new("X", 3, 1, 2)?,
                    RotationPlane::new("Y", 3, 2, 0)?,
                    RotationPlane::new("Z", 3, 0, 1)?,
                ];
                let speeds = [
                    speed_spec("Speed X", SPEED_RANGE_3D, 0.01),
                    speed_spec("Speed Y", SPEED_RANGE_3D, 0.01),
                    speed_spec("Speed Z", SPEED_RANGE_3D, 0.005),
                ];
                let scale = ParameterSpec { label: "Scale", min: 50.0, max: 300.0, initial: 100.0 };
                let style = if kind == ShapeKind::Cube {
                    Style {
                        background: Color::rgb(20, 20, 20),
                        point_color: Color::rgb(255, 100, 100),
                        ..Style::default()
                    }
                } else {
                    Style::default()
                };
                (polytope, planes, speeds, scale, style, 2)
            }
            ShapeKind::Tesseract => {
                let polytope = Hypercube::tesseract().build()?;
                let planes = vec![
                    RotationPlane::new("ZW", 4, 2, 3)?,
                    RotationPlane::new("XW", 4, 0, 3)?,
                    RotationPlane::new("XY", 4, 0, 1)?,
                ];
                let speeds = [
                    speed_spec("Speed ZW (4D)", SPEED_RANGE_4D, 0.02),
                    speed_spec("Speed XW (4D)", SPEED_RANGE_4D, 0.0),
                    speed_spec("Speed XY (3D)", SPEED_RANGE_4D, 0.0),
                ];
                let scale = ParameterSpec { label: "Scale", min: 50.0, max: 1000.0, initial: 250.0 };
                let style = Style {
                    point_radius: 3.0,
                    edge_color: Color::rgb(100, 255, 100),
                    edge_thickness: 1.0,
                    ..Style::default()
                };
                (polytope, planes, speeds, scale, style, 3)
            }
        };

        let mut sliders = Vec::new();
        let mut bind = |spec: &ParameterSpec| -> Result<Parameter, SliderError> {
            if !interactive {
                return Ok(Parameter::Fixed(spec.initial));
            }
            let track = Rect::new(
                SLIDER_X,
                SLIDER_Y + SLIDER_SPACING * sliders.len() as f32,
                SLIDER_WIDTH,
                SLIDER_HEIGHT,
            );
            let slider = Slider::new(track, spec.min, spec.max, spec.initial, spec.label)?
                .with_precision(precision);
            sliders.push(slider);
            Ok(Parameter::Slider(sliders.len() - 1))
        };

        let mut bindings = Vec::with_capacity(planes.len());
        for (plane, spec) in planes.into_iter().zip(&speeds) {
            bindings.push(PlaneBinding { plane, speed: bind(spec)? });
        }
        let scale = bind(&scale)?;

        let shift = if interactive { SLIDER_PANEL_SHIFT } else { 0 };
        let origin = options.origin.unwrap_or(ScreenPoint::new(
            (options.window_width / 2) as i32 + shift,
            (options.window_height / 2) as i32,
        ));

        let projection = ProjectionChain::standard(polytope.dimension())?;

        Ok(Self {
            name: kind.to_string(),
            polytope,
            planes: bindings,
            scale,
            origin,
            projection,
            style,
            sliders,
        })
    }

    /// Check that parameters and projection fit the polytope
    pub fn validate(&self) -> Result<(), SceneError> {
        let parameters = self.planes.iter().map(|b| b.speed).chain(Some(self.scale));
        for parameter in parameters {
            if let Parameter::Slider(index) = parameter {
                if index >= self.sliders.len() {
                    return Err(SceneError::UnknownSlider(index));
                }
            }
        }

        let dimension = self.polytope.dimension();
        if self.projection.source_dimension() != dimension {
            return Err(MathError::DimensionMismatch {
                expected: dimension,
                found: self.projection.source_dimension(),
            }
            .into());
        }
        if let Some(binding) = self.planes.iter().find(|b| b.plane.dimension() != dimension) {
            return Err(MathError::DimensionMismatch {
                expected: dimension,
                found: binding.plane.dimension(),
            }
            .into());
        }
        Ok(())
    }
}

fn speed_spec(label: &'static str, (min, max): (f32, f32), initial: f32) -> ParameterSpec {
    ParameterSpec { label, min, max, initial }
}
