//! Hypercube (k-cube) geometry
//!
//! A k-cube has 2^k vertices (every sign combination of ±1 over k axes)
//! and k·2^(k-1) edges. k=3 is the cube, k=4 the tesseract.

use crate::polytope::{derive_edges_by_hamming_distance, Edge, GeometryError, PolytopeGenerator};
use hyperwire_math::VecN;

/// Largest supported hypercube dimension
pub const MAX_DIMENSION: usize = 8;

/// Generator for the vertices of {-1, +1}^k
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hypercube {
    dimension: usize,
}

impl Hypercube {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// The 3D cube
    pub fn cube() -> Self {
        Self::new(3)
    }

    /// The 4D tesseract
    pub fn tesseract() -> Self {
        Self::new(4)
    }
}

/// Enumerate {-1, +1}^k, axis-major.
///
/// The order matches nested loops with X outermost and the last axis
/// innermost, so vertex `i` has `+1` on axis `a` exactly when bit `k-1-a`
/// of `i` is set:
///
/// ```text
/// 0: (-1,-1,-1)   4: ( 1,-1,-1)
/// 1: (-1,-1, 1)   5: ( 1,-1, 1)
/// 2: (-1, 1,-1)   6: ( 1, 1,-1)
/// 3: (-1, 1, 1)   7: ( 1, 1, 1)
/// ```
pub fn generate_hypercube_points(dimension: usize) -> Result<Vec<VecN>, GeometryError> {
    if dimension == 0 || dimension > MAX_DIMENSION {
        return Err(GeometryError::InvalidDimension(dimension));
    }

    let points = (0..1usize << dimension)
        .map(|i| {
            let coords = (0..dimension)
                .map(|axis| {
                    if i & (1 << (dimension - 1 - axis)) != 0 { 1.0 } else { -1.0 }
                })
                .collect();
            VecN::new(coords)
        })
        .collect();
    Ok(points)
}

impl PolytopeGenerator for Hypercube {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn points(&self) -> Result<Vec<VecN>, GeometryError> {
        generate_hypercube_points(self.dimension)
    }

    fn edges(&self, points: &[VecN]) -> Vec<Edge> {
        derive_edges_by_hamming_distance(points)
    }
}
