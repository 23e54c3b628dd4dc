//! Animation driver
//!
//! Owns the scene and runs the per-frame pipeline:
//! events → parameters → angles → rotation → projection → screen → draw.
//!
//! The driver is a two-state machine. It stays [`DriverState::Running`]
//! until a close request or Escape arrives, then moves to
//! [`DriverState::Terminated`] and never draws again.

use crate::event::InputEvent;
use crate::scene::{Parameter, Scene, SceneError};
use crate::slider::Slider;
use crate::surface::{ScreenPoint, Surface};
use hyperwire_math::{MathError, Matrix, VecN};

/// Frame loop state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Terminated,
}

/// Per-frame animation of one scene
pub struct Animator {
    scene: Scene,
    state: DriverState,
    frames: u64,
}

impl Animator {
    /// Create a driver for a validated scene
    pub fn new(scene: Scene) -> Result<Self, SceneError> {
        scene.validate()?;
        log::info!(
            "Animating {}: {} vertices, {} edges, {} rotation planes",
            scene.name,
            scene.polytope.vertex_count(),
            scene.polytope.edge_count(),
            scene.planes.len()
        );
        Ok(Self {
            scene,
            state: DriverState::Running,
            frames: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.scene.sliders
    }

    /// Number of frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Run one frame: handle input, advance, draw
    ///
    /// Nothing is drawn once the driver has terminated, including in the
    /// frame that received the exit event.
    pub fn frame<S, I>(&mut self, events: I, surface: &mut S) -> DriverState
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        if self.handle_events(events) == DriverState::Terminated {
            return self.state;
        }

        self.advance();
        let projected = self.project_vertices();
        self.draw(&projected, surface);
        self.frames += 1;

        self.state
    }

    /// Dispatch events to every slider and watch for exit signals
    pub fn handle_events<I>(&mut self, events: I) -> DriverState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.state == DriverState::Terminated {
                break;
            }
            for slider in &mut self.scene.sliders {
                slider.handle_event(&event);
            }
            if event.is_exit() {
                log::info!("Exit requested after {} frames", self.frames);
                self.state = DriverState::Terminated;
            }
        }
        self.state
    }

    /// Current value of a parameter
    pub fn parameter(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::Fixed(value) => value,
            // Indices are checked by Scene::validate
            Parameter::Slider(index) => self
                .scene
                .sliders
                .get(index)
                .map_or(0.0, Slider::value),
        }
    }

    /// Add each plane's speed to its angle
    pub fn advance(&mut self) {
        let speeds: Vec<f32> = self
            .scene
            .planes
            .iter()
            .map(|binding| self.parameter(binding.speed))
            .collect();
        for (binding, speed) in self.scene.planes.iter_mut().zip(speeds) {
            binding.plane.advance(speed);
        }
    }

    /// Composite rotation for the current angles
    ///
    /// Planes apply in scene order: the first plane rotates the vertex
    /// first. Rotations don't commute, so the order is part of the result.
    pub fn orientation(&self) -> Result<Matrix, MathError> {
        let mut m = Matrix::identity(self.scene.polytope.dimension());
        for binding in &self.scene.planes {
            m = binding.plane.matrix()?.mul(&m)?;
        }
        Ok(m)
    }

    /// Rotate, project and place every vertex on screen
    ///
    /// A vertex whose projection is degenerate this frame is `None`.
    pub fn project_vertices(&self) -> Vec<Option<ScreenPoint>> {
        let orientation = match self.orientation() {
            Ok(m) => m,
            Err(err) => {
                log::error!("Failed to build orientation: {}", err);
                return vec![None; self.scene.polytope.vertex_count()];
            }
        };

        let scale = self.parameter(self.scene.scale);
        self.scene
            .polytope
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let projected = orientation
                    .mul_vec(point)
                    .and_then(|rotated| self.scene.projection.apply(&rotated));
                match projected {
                    Ok(p) => Some(self.to_screen(&p, scale)),
                    Err(err) => {
                        log::debug!("Skipping vertex {} this frame: {}", i, err);
                        None
                    }
                }
            })
            .collect()
    }

    /// Scale a projected 2D point and move it to the screen origin
    ///
    /// Scaled coordinates are truncated toward zero before the offset.
    pub fn to_screen(&self, point: &VecN, scale: f32) -> ScreenPoint {
        let origin = self.scene.origin;
        ScreenPoint::new(
            (point[0] * scale) as i32 + origin.x,
            (point[1] * scale) as i32 + origin.y,
        )
    }

    /// Emit the frame: background, vertex markers, edges, sliders
    pub fn draw<S: Surface + ?Sized>(&self, projected: &[Option<ScreenPoint>], surface: &mut S) {
        let style = &self.scene.style;
        surface.clear_screen(style.background);

        for p in projected.iter().flatten() {
            surface.draw_circle(*p, style.point_radius, style.point_color);
        }

        for edge in self.scene.polytope.edges() {
            let a = projected.get(edge.a).copied().flatten();
            let b = projected.get(edge.b).copied().flatten();
            if let (Some(a), Some(b)) = (a, b) {
                surface.draw_line(a, b, style.edge_color, style.edge_thickness);
            }
        }

        for slider in &self.scene.sliders {
            slider.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, PointerButton};
    use crate::hypercube::Hypercube;
    use crate::polytope::{Edge, Polytope, PolytopeGenerator};
    use crate::rotation::RotationPlane;
    use crate::scene::{PlaneBinding, SceneOptions, ShapeKind, Style};
    use crate::surface::{Color, Rect};
    use hyperwire_math::ProjectionChain;

    /// Records draw calls instead of rendering them
    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<Color>,
        circles: Vec<ScreenPoint>,
        lines: Vec<(ScreenPoint, ScreenPoint)>,
        rects: Vec<Rect>,
        texts: Vec<String>,
    }

    impl RecordingSurface {
        fn is_empty(&self) -> bool {
            self.clears.is_empty()
                && self.circles.is_empty()
                && self.lines.is_empty()
                && self.rects.is_empty()
                && self.texts.is_empty()
        }
    }

    impl Surface for RecordingSurface {
        fn clear_screen(&mut self, color: Color) {
            self.clears.push(color);
        }
        fn draw_circle(&mut self, center: ScreenPoint, _radius: f32, _color: Color) {
            self.circles.push(center);
        }
        fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, _color: Color, _thickness: f32) {
            self.lines.push((a, b));
        }
        fn draw_rect(&mut self, rect: Rect, _color: Color) {
            self.rects.push(rect);
        }
        fn draw_text(&mut self, text: &str, _position: ScreenPoint, _color: Color) {
            self.texts.push(text.to_string());
        }
    }

    /// Still cube: no rotation, scale 100, origin (500, 300)
    fn still_cube() -> Scene {
        Scene {
            name: "cube".to_string(),
            polytope: Hypercube::cube().build().unwrap(),
            planes: vec![
                PlaneBinding { plane: RotationPlane::new("X", 3, 1, 2).unwrap(), speed: Parameter::Fixed(0.0) },
                PlaneBinding { plane: RotationPlane::new("Y", 3, 2, 0).unwrap(), speed: Parameter::Fixed(0.0) },
                PlaneBinding { plane: RotationPlane::new("Z", 3, 0, 1).unwrap(), speed: Parameter::Fixed(0.0) },
            ],
            scale: Parameter::Fixed(100.0),
            origin: ScreenPoint::new(500, 300),
            projection: ProjectionChain::new(3, &[4.0]).unwrap(),
            style: Style::default(),
            sliders: Vec::new(),
        }
    }

    #[test]
    fn test_end_to_end_cube_corner() {
        let animator = Animator::new(still_cube()).unwrap();
        let projected = animator.project_vertices();
        // Vertex 7 is (1, 1, 1): w = 1/3, 100/3 truncates to 33
        assert_eq!(projected[7], Some(ScreenPoint::new(533, 333)));
        // Vertex 0 is (-1, -1, -1): w = 1/5, -20
        assert_eq!(projected[0], Some(ScreenPoint::new(480, 280)));
    }

    #[test]
    fn test_frame_draws_points_edges_and_sliders() {
        let scene = Scene::preset(ShapeKind::Cube, &SceneOptions::for_shape(ShapeKind::Cube)).unwrap();
        let mut animator = Animator::new(scene).unwrap();
        let mut surface = RecordingSurface::default();

        let state = animator.frame(Vec::new(), &mut surface);

        assert_eq!(state, DriverState::Running);
        assert_eq!(surface.clears, vec![Color::rgb(20, 20, 20)]);
        assert_eq!(surface.circles.len(), 8);
        assert_eq!(surface.lines.len(), 12);
        // Track + knob per slider
        assert_eq!(surface.rects.len(), 8);
        assert_eq!(surface.texts.len(), 4);
        assert_eq!(animator.frame_count(), 1);
    }

    #[test]
    fn test_angles_advance_by_speed() {
        let scene = Scene::preset(ShapeKind::Tesseract, &SceneOptions::for_shape(ShapeKind::Tesseract)).unwrap();
        let mut animator = Animator::new(scene).unwrap();
        let mut surface = RecordingSurface::default();
        for _ in 0..5 {
            animator.frame(Vec::new(), &mut surface);
        }
        let angles: Vec<f32> = animator.scene().planes.iter().map(|b| b.plane.angle()).collect();
        assert!((angles[0] - 0.1).abs() < 0.0001);
        assert_eq!(angles[1], 0.0);
        assert_eq!(angles[2], 0.0);
    }

    #[test]
    fn test_close_request_terminates_without_drawing() {
        let mut animator = Animator::new(still_cube()).unwrap();
        let mut surface = RecordingSurface::default();

        let state = animator.frame(vec![InputEvent::CloseRequested], &mut surface);
        assert_eq!(state, DriverState::Terminated);
        assert!(surface.is_empty());

        // Terminated is final
        let state = animator.frame(Vec::new(), &mut surface);
        assert_eq!(state, DriverState::Terminated);
        assert!(surface.is_empty());
        assert_eq!(animator.frame_count(), 0);
    }

    #[test]
    fn test_escape_terminates() {
        let mut animator = Animator::new(still_cube()).unwrap();
        let mut surface = RecordingSurface::default();
        let events = vec![InputEvent::KeyPress(Key::Other), InputEvent::KeyPress(Key::Escape)];
        assert_eq!(animator.frame(events, &mut surface), DriverState::Terminated);
    }

    #[test]
    fn test_slider_drag_changes_speed() {
        let scene = Scene::preset(ShapeKind::Cube, &SceneOptions::for_shape(ShapeKind::Cube)).unwrap();
        let mut animator = Animator::new(scene).unwrap();
        let mut surface = RecordingSurface::default();

        // Drag "Speed X" to the right end of its track
        let events = vec![
            InputEvent::PointerDown { x: 100.0, y: 55.0, button: PointerButton::Primary },
            InputEvent::PointerMove { x: 400.0, y: 55.0 },
            InputEvent::PointerUp { button: PointerButton::Primary },
        ];
        animator.frame(events, &mut surface);

        assert_eq!(animator.sliders()[0].value(), 0.2);
        assert!((animator.scene().planes[0].plane.angle() - 0.2).abs() < 0.0001);
        // Other sliders untouched
        assert_eq!(animator.sliders()[1].value(), 0.01);
    }

    #[test]
    fn test_scale_slider_feeds_projection() {
        let mut scene = still_cube();
        scene.sliders.push(Slider::new(Rect::new(50.0, 50.0, 200.0, 10.0), 50.0, 300.0, 200.0, "Scale").unwrap());
        scene.scale = Parameter::Slider(0);
        let animator = Animator::new(scene).unwrap();

        let projected = animator.project_vertices();
        // 200/3 truncates to 66
        assert_eq!(projected[7], Some(ScreenPoint::new(566, 366)));
    }

    #[test]
    fn test_rotation_order_matters() {
        // Quarter turns about X then Z differ from Z then X
        let quarter = std::f32::consts::FRAC_PI_2;
        let mut xz = still_cube();
        xz.planes.remove(1);
        for binding in &mut xz.planes {
            binding.plane.advance(quarter);
        }
        let mut zx = xz.clone();
        zx.planes.reverse();

        let a = Animator::new(xz).unwrap().orientation().unwrap();
        let b = Animator::new(zx).unwrap().orientation().unwrap();
        assert!(!a.approx_eq(&b, 0.0001));
    }

    #[test]
    fn test_degenerate_vertex_is_skipped() {
        // Vertex 1 sits exactly at the viewer distance
        let points = vec![
            VecN::from([0.0, 0.0, 0.0]),
            VecN::from([1.0, 1.0, 4.0]),
            VecN::from([1.0, 0.0, 0.0]),
        ];
        let edges = [Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)].into_iter().flatten();
        let mut scene = still_cube();
        scene.polytope = Polytope::new(points, edges).unwrap();

        let mut animator = Animator::new(scene).unwrap();
        let mut surface = RecordingSurface::default();
        let state = animator.frame(Vec::new(), &mut surface);

        assert_eq!(state, DriverState::Running);
        assert_eq!(surface.circles.len(), 2);
        assert_eq!(surface.lines, vec![(ScreenPoint::new(500, 300), ScreenPoint::new(525, 300))]);
    }

    #[test]
    fn test_tesseract_identity_frame_is_finite_and_distinct() {
        let mut scene = Scene::preset(ShapeKind::Tesseract, &SceneOptions::for_shape(ShapeKind::Tesseract)).unwrap();
        scene.scale = Parameter::Fixed(1000.0);
        let animator = Animator::new(scene).unwrap();
        let projected: Vec<ScreenPoint> = animator.project_vertices().into_iter().flatten().collect();
        assert_eq!(projected.len(), 16);
        let unique: std::collections::HashSet<_> = projected.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_invalid_scene_rejected() {
        let mut scene = still_cube();
        scene.scale = Parameter::Slider(2);
        assert!(Animator::new(scene).is_err());
    }
}
