//! Core types for the Hyperwire wireframe renderer
//!
//! This crate provides everything between the math and the GPU: polytope
//! generation, rotation planes, the slider widget and the animation driver
//! that ties them together.
//!
//! ## Geometry
//!
//! - [`Polytope`] - Point set plus wireframe edges
//! - [`PolytopeGenerator`] - Strategy for building polytopes
//! - [`Hypercube`] - {-1, +1}^k with Hamming-distance edges
//! - [`Prism`] - n-sided prism with face-adjacency edges
//!
//! ## Animation
//!
//! - [`Animator`] - Per-frame rotate/project/draw driver
//! - [`Scene`] - Polytope, rotation planes, parameters and style
//! - [`Slider`] - Interactive control for one parameter
//! - [`Surface`] - Drawing primitives the driver writes to

pub mod animator;
pub mod event;
pub mod hypercube;
pub mod polytope;
pub mod prism;
pub mod rotation;
pub mod scene;
pub mod slider;
pub mod surface;

pub use animator::{Animator, DriverState};
pub use event::{InputEvent, Key, PointerButton};
pub use hypercube::{generate_hypercube_points, Hypercube};
pub use polytope::{derive_edges_by_hamming_distance, Edge, GeometryError, Polytope, PolytopeGenerator};
pub use prism::{generate_prism_points, Prism};
pub use rotation::RotationPlane;
pub use scene::{Parameter, PlaneBinding, Scene, SceneError, SceneOptions, ShapeKind, Style};
pub use slider::{Slider, SliderError};
pub use surface::{Color, Rect, ScreenPoint, Surface};

// Re-export math types for convenience
pub use hyperwire_math::{Matrix, MathError, ProjectionChain, VecN};
