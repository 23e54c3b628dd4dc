//! Regular prism geometry
//!
//! An n-sided prism: a regular n-gon on the unit circle, duplicated at
//! z = -0.5 (back face) and z = +0.5 (front face).

use crate::polytope::{Edge, GeometryError, PolytopeGenerator};
use hyperwire_math::VecN;
use std::f32::consts::TAU;

/// Half the prism depth along Z
const HALF_DEPTH: f32 = 0.5;

/// Generator for an n-sided prism
///
/// Vertices are interleaved: side `i` has its back vertex at index `2i`
/// and its front vertex at `2i + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prism {
    sides: usize,
}

impl Prism {
    pub fn new(sides: usize) -> Self {
        Self { sides }
    }

    /// The hexagonal prism
    pub fn hexagonal() -> Self {
        Self::new(6)
    }

    pub fn sides(&self) -> usize {
        self.sides
    }
}

/// Place `sides` vertices at angles `i·2π/sides`, each at both faces
pub fn generate_prism_points(sides: usize) -> Result<Vec<VecN>, GeometryError> {
    if sides < 3 {
        return Err(GeometryError::TooFewSides(sides));
    }

    let mut points = Vec::with_capacity(sides * 2);
    for i in 0..sides {
        let theta = i as f32 * (TAU / sides as f32);
        let (y, x) = theta.sin_cos();
        points.push(VecN::from([x, y, -HALF_DEPTH]));
        points.push(VecN::from([x, y, HALF_DEPTH]));
    }
    Ok(points)
}

/// For each side: back↔front, back↔next back, front↔next front
pub fn prism_edges(sides: usize) -> Vec<Edge> {
    let count = sides * 2;
    let mut edges = Vec::with_capacity(sides * 3);
    for i in 0..sides {
        let back = i * 2;
        let front = back + 1;
        let next_back = (back + 2) % count;
        let next_front = (front + 2) % count;

        edges.extend(Edge::new(back, front));
        edges.extend(Edge::new(back, next_back));
        edges.extend(Edge::new(front, next_front));
    }
    edges
}

impl PolytopeGenerator for Prism {
    fn dimension(&self) -> usize {
        3
    }

    fn points(&self) -> Result<Vec<VecN>, GeometryError> {
        generate_prism_points(self.sides)
    }

    fn edges(&self, _points: &[VecN]) -> Vec<Edge> {
        prism_edges(self.sides)
    }
}
