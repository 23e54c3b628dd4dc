//! Rotation planes with accumulated angles

use hyperwire_math::{rotation_matrix, MathError, Matrix};

/// A rotation in the plane spanned by two coordinate axes
///
/// The angle accumulates without wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationPlane {
    name: String,
    dimension: usize,
    axis_a: usize,
    axis_b: usize,
    angle: f32,
}

impl RotationPlane {
    /// Create a plane at angle zero, validating the axes against `dimension`
    pub fn new(
        name: impl Into<String>,
        dimension: usize,
        axis_a: usize,
        axis_b: usize,
    ) -> Result<Self, MathError> {
        if axis_a == axis_b || axis_a >= dimension || axis_b >= dimension {
            return Err(MathError::InvalidPlane {
                dimension,
                axis_a,
                axis_b,
            });
        }
        Ok(Self {
            name: name.into(),
            dimension,
            axis_a,
            axis_b,
            angle: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axes(&self) -> (usize, usize) {
        (self.axis_a, self.axis_b)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Current angle in radians
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Add one tick's worth of rotation
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.angle += speed;
    }

    /// Rotation matrix for the current angle
    pub fn matrix(&self) -> Result<Matrix, MathError> {
        rotation_matrix(self.dimension, self.axis_a, self.axis_b, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut plane = RotationPlane::new("ZW", 4, 2, 3).unwrap();
        for _ in 0..10 {
            plane.advance(0.5);
        }
        assert!((plane.angle() - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_angle_is_not_wrapped() {
        let mut plane = RotationPlane::new("XY", 3, 0, 1).unwrap();
        plane.advance(10.0);
        assert_eq!(plane.angle(), 10.0);
    }

    #[test]
    fn test_invalid_axes() {
        assert!(RotationPlane::new("bad", 3, 0, 0).is_err());
        assert!(RotationPlane::new("bad", 3, 0, 3).is_err());
    }

    #[test]
    fn test_matrix_dimension() {
        let plane = RotationPlane::new("XW", 4, 0, 3).unwrap();
        let m = plane.matrix().unwrap();
        assert_eq!((m.rows(), m.cols()), (4, 4));
    }
}
