//! Polytope point sets and their wireframe edges
//!
//! A polytope is built once at startup from a [`PolytopeGenerator`] and is
//! read-only afterwards. Only the projected copies of its points change
//! from frame to frame.

use hyperwire_math::VecN;
use std::collections::BTreeSet;
use std::fmt;

/// An edge between two vertices, stored with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge in canonical order (smaller index first)
    ///
    /// Returns `None` for a self-loop.
    pub fn new(i: usize, j: usize) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            std::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// True if the edge touches the given vertex
    #[inline]
    pub fn touches(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }
}

/// Error type for polytope construction
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Hypercube dimension outside the supported range
    InvalidDimension(usize),
    /// A prism needs at least three sides
    TooFewSides(usize),
    /// An edge refers to a vertex that does not exist
    EdgeOutOfRange { edge: Edge, vertex_count: usize },
    /// Points of a polytope must all have the same dimension
    MixedDimensions { expected: usize, found: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimension(k) => {
                write!(f, "Unsupported hypercube dimension: {}", k)
            }
            GeometryError::TooFewSides(n) => {
                write!(f, "A prism needs at least 3 sides, got {}", n)
            }
            GeometryError::EdgeOutOfRange { edge, vertex_count } => write!(
                f,
                "Edge ({}, {}) out of range for {} vertices",
                edge.a, edge.b, vertex_count
            ),
            GeometryError::MixedDimensions { expected, found } => write!(
                f,
                "Mixed point dimensions: expected {}, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// A point set with wireframe edges
#[derive(Clone, Debug, PartialEq)]
pub struct Polytope {
    points: Vec<VecN>,
    edges: Vec<Edge>,
}

impl Polytope {
    /// Create a polytope, validating the edges against the points
    ///
    /// Duplicate edges are collapsed and edges are kept in sorted order.
    pub fn new(points: Vec<VecN>, edges: impl IntoIterator<Item = Edge>) -> Result<Self, GeometryError> {
        let dimension = points.first().map_or(0, VecN::dim);
        if let Some(p) = points.iter().find(|p| p.dim() != dimension) {
            return Err(GeometryError::MixedDimensions {
                expected: dimension,
                found: p.dim(),
            });
        }

        let edges: BTreeSet<Edge> = edges.into_iter().collect();
        if let Some(&edge) = edges.iter().find(|e| e.b >= points.len()) {
            return Err(GeometryError::EdgeOutOfRange {
                edge,
                vertex_count: points.len(),
            });
        }

        Ok(Self {
            points,
            edges: edges.into_iter().collect(),
        })
    }

    /// Dimension of the points
    pub fn dimension(&self) -> usize {
        self.points.first().map_or(0, VecN::dim)
    }

    pub fn points(&self) -> &[VecN] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Strategy for building a polytope: a point-set generator plus an edge rule
pub trait PolytopeGenerator {
    /// Dimension of the generated points
    fn dimension(&self) -> usize;

    /// Generate the vertices in their fixed, deterministic order
    fn points(&self) -> Result<Vec<VecN>, GeometryError>;

    /// Derive the edges for the generated vertices
    fn edges(&self, points: &[VecN]) -> Vec<Edge>;

    /// Build the polytope
    fn build(&self) -> Result<Polytope, GeometryError> {
        let points = self.points()?;
        let edges = self.edges(&points);
        Polytope::new(points, edges)
    }
}

/// Connect every pair of points that differ in exactly one coordinate.
///
/// O(n²·k), which is nothing for the 16 vertices of a tesseract.
pub fn derive_edges_by_hamming_distance(points: &[VecN]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].differing_coordinates(&points[j]) == 1 {
                edges.extend(Edge::new(i, j));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_order() {
        assert_eq!(Edge::new(5, 2), Some(Edge { a: 2, b: 5 }));
        assert_eq!(Edge::new(2, 5), Some(Edge { a: 2, b: 5 }));
        assert_eq!(Edge::new(3, 3), None);
    }

    #[test]
    fn test_polytope_dedups_edges() {
        let points = vec![VecN::from([0.0, 0.0]), VecN::from([1.0, 0.0])];
        let edges = [Edge::new(0, 1), Edge::new(1, 0)].into_iter().flatten();
        let p = Polytope::new(points, edges).unwrap();
        assert_eq!(p.edge_count(), 1);
    }

    #[test]
    fn test_polytope_rejects_out_of_range_edge() {
        let points = vec![VecN::from([0.0, 0.0])];
        let result = Polytope::new(points, Edge::new(0, 1));
        assert!(matches!(result, Err(GeometryError::EdgeOutOfRange { .. })));
    }

    #[test]
    fn test_polytope_rejects_mixed_dimensions() {
        let points = vec![VecN::from([0.0, 0.0]), VecN::from([0.0, 0.0, 0.0])];
        let result = Polytope::new(points, None::<Edge>);
        assert_eq!(
            result,
            Err(GeometryError::MixedDimensions { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_hamming_edges_of_square() {
        let points = vec![
            VecN::from([-1.0, -1.0]),
            VecN::from([-1.0, 1.0]),
            VecN::from([1.0, -1.0]),
            VecN::from([1.0, 1.0]),
        ];
        let edges = derive_edges_by_hamming_distance(&points);
        assert_eq!(
            edges,
            vec![
                Edge { a: 0, b: 1 },
                Edge { a: 0, b: 2 },
                Edge { a: 1, b: 3 },
                Edge { a: 2, b: 3 },
            ]
        );
    }
}
