//! Math error types

use std::fmt;

/// Error type for linear algebra and projection operations
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Matrix columns do not match the vector (or matrix) it is multiplied with
    DimensionMismatch { expected: usize, found: usize },
    /// Rotation plane axes are equal or outside the space
    InvalidPlane { dimension: usize, axis_a: usize, axis_b: usize },
    /// Perspective denominator is zero (depth coordinate equals the distance)
    DegenerateProjection { depth: f32, distance: f32 },
    /// A projection chain cannot reduce this dimension to 2D
    InvalidProjection { dimension: usize },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {}, found {}", expected, found)
            }
            MathError::InvalidPlane { dimension, axis_a, axis_b } => write!(
                f,
                "Invalid rotation plane ({}, {}) in {}D space",
                axis_a, axis_b, dimension
            ),
            MathError::DegenerateProjection { depth, distance } => write!(
                f,
                "Degenerate projection: depth {} equals distance {}",
                depth, distance
            ),
            MathError::InvalidProjection { dimension } => {
                write!(f, "Cannot project {}D points down to 2D", dimension)
            }
        }
    }
}

impl std::error::Error for MathError {}
