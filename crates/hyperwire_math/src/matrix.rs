//! Dense matrices for k-dimensional transformations
//!
//! Matrices are stored row-major and sized at runtime, so the same code
//! rotates 3D cubes and 4D tesseracts.

use crate::{MathError, VecN};

/// Row-major `rows × cols` matrix
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// `dim × dim` identity matrix
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim, dim);
        for i in 0..dim {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Build a matrix from its rows
    ///
    /// Fails with [`MathError::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, MathError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(MathError::DimensionMismatch {
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.set(j, i, self.get(i, j));
            }
        }
        t
    }

    /// Matrix product `self * other`
    ///
    /// Applied to a vector, the result transforms by `other` first, then `self`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != other.rows {
            return Err(MathError::DimensionMismatch {
                expected: self.cols,
                found: other.rows,
            });
        }

        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let sum = (0..self.cols).map(|k| self.get(i, k) * other.get(k, j)).sum::<f32>();
                result.set(i, j, sum);
            }
        }
        Ok(result)
    }

    /// Matrix-vector product `self * v`
    pub fn mul_vec(&self, v: &VecN) -> Result<VecN, MathError> {
        mat_vec_mul(self, v)
    }

    /// Approximate equality with an absolute tolerance per entry
    pub fn approx_eq(&self, other: &Matrix, epsilon: f32) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

/// Create a rotation matrix in the `(axis_a, axis_b)` plane of a
/// `dimension`-dimensional space.
///
/// The result is the identity except for the 2×2 block
/// `[[cos, -sin], [sin, cos]]` at rows/columns `axis_a`, `axis_b`. Positive
/// angles turn `axis_a` towards `axis_b`. Swapping the axes reverses the
/// direction of rotation.
///
/// # Example
/// ```
/// use hyperwire_math::rotation_matrix;
/// // ZW plane rotation of a tesseract
/// let zw = rotation_matrix(4, 2, 3, 0.5).unwrap();
/// assert_eq!(zw.rows(), 4);
/// ```
pub fn rotation_matrix(
    dimension: usize,
    axis_a: usize,
    axis_b: usize,
    angle: f32,
) -> Result<Matrix, MathError> {
    if axis_a == axis_b || axis_a >= dimension || axis_b >= dimension {
        return Err(MathError::InvalidPlane {
            dimension,
            axis_a,
            axis_b,
        });
    }

    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = Matrix::identity(dimension);
    m.set(axis_a, axis_a, cs);
    m.set(axis_a, axis_b, -sn);
    m.set(axis_b, axis_a, sn);
    m.set(axis_b, axis_b, cs);
    Ok(m)
}

/// Matrix-vector product: `result[i] = Σ_j m[i][j] * v[j]`
///
/// Rejects a vector whose length differs from the column count instead of
/// truncating it.
pub fn mat_vec_mul(m: &Matrix, v: &VecN) -> Result<VecN, MathError> {
    if m.cols != v.dim() {
        return Err(MathError::DimensionMismatch {
            expected: m.cols,
            found: v.dim(),
        });
    }

    let coords = (0..m.rows)
        .map(|i| (0..m.cols).map(|j| m.get(i, j) * v[j]).sum::<f32>())
        .collect();
    Ok(VecN::new(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn all_planes(dimension: usize) -> Vec<(usize, usize)> {
        let mut planes = Vec::new();
        for a in 0..dimension {
            for b in 0..dimension {
                if a != b {
                    planes.push((a, b));
                }
            }
        }
        planes
    }

    #[test]
    fn test_identity_transform() {
        let v = VecN::from([1.0, 2.0, 3.0, 4.0]);
        let result = mat_vec_mul(&Matrix::identity(4), &v).unwrap();
        assert!(result.approx_eq(&v, EPSILON));
    }

    #[test]
    fn test_rotation_is_orthogonal() {
        for dimension in [3, 4] {
            for (a, b) in all_planes(dimension) {
                for angle in [0.0, 0.3, 1.7, -2.5, 100.0] {
                    let r = rotation_matrix(dimension, a, b, angle).unwrap();
                    let rrt = r.mul(&r.transpose()).unwrap();
                    assert!(
                        rrt.approx_eq(&Matrix::identity(dimension), EPSILON),
                        "R·Rᵗ != I for plane ({}, {}) angle {} in {}D",
                        a, b, angle, dimension
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let points = [
            VecN::from([1.0, -1.0, 1.0, -1.0]),
            VecN::from([0.5, 2.0, -3.0, 0.25]),
        ];
        for (a, b) in all_planes(4) {
            let r = rotation_matrix(4, a, b, 0.0).unwrap();
            for p in &points {
                let rotated = mat_vec_mul(&r, p).unwrap();
                assert!(rotated.approx_eq(p, EPSILON));
            }
        }
    }

    #[test]
    fn test_rotation_xy_quarter_turn() {
        let r = rotation_matrix(3, 0, 1, FRAC_PI_2).unwrap();

        // X should go to Y
        let x = VecN::from([1.0, 0.0, 0.0]);
        let result = mat_vec_mul(&r, &x).unwrap();
        assert!(result.approx_eq(&VecN::from([0.0, 1.0, 0.0]), EPSILON),
            "X should become Y, got {:?}", result);

        // Z should be unchanged
        let z = VecN::from([0.0, 0.0, 1.0]);
        let result = mat_vec_mul(&r, &z).unwrap();
        assert!(result.approx_eq(&z, EPSILON));
    }

    #[test]
    fn test_rotation_entries_match_axis_rotations() {
        // Rotation about X is the (1, 2) plane
        let angle = 0.7f32;
        let r = rotation_matrix(3, 1, 2, angle).unwrap();
        let expected = Matrix::from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, angle.cos(), -angle.sin()],
            vec![0.0, angle.sin(), angle.cos()],
        ])
        .unwrap();
        assert!(r.approx_eq(&expected, EPSILON));

        // Rotation about Y is the (2, 0) plane
        let r = rotation_matrix(3, 2, 0, angle).unwrap();
        let expected = Matrix::from_rows(&[
            vec![angle.cos(), 0.0, angle.sin()],
            vec![0.0, 1.0, 0.0],
            vec![-angle.sin(), 0.0, angle.cos()],
        ])
        .unwrap();
        assert!(r.approx_eq(&expected, EPSILON));
    }

    #[test]
    fn test_invalid_plane_rejected() {
        assert_eq!(
            rotation_matrix(3, 1, 1, 0.5),
            Err(MathError::InvalidPlane { dimension: 3, axis_a: 1, axis_b: 1 })
        );
        assert!(rotation_matrix(3, 0, 3, 0.5).is_err());
    }

    #[test]
    fn test_mat_vec_mul_dimension_mismatch() {
        let m = Matrix::identity(3);
        let v = VecN::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            mat_vec_mul(&m, &v),
            Err(MathError::DimensionMismatch { expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_non_square_product() {
        let m = Matrix::from_rows(&[vec![1.0, 0.0, 0.0], vec![0.0, 2.0, 0.0]]).unwrap();
        let result = mat_vec_mul(&m, &VecN::from([3.0, 4.0, 5.0])).unwrap();
        assert_eq!(result, VecN::from([3.0, 8.0]));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Matrix::from_rows(&[vec![1.0, 0.0], vec![1.0]]).is_err());
    }

    #[test]
    fn test_mul_composition() {
        use std::f32::consts::FRAC_PI_4;

        // Two 45° rotations should equal one 90° rotation
        let r45 = rotation_matrix(4, 2, 3, FRAC_PI_4).unwrap();
        let r90 = rotation_matrix(4, 2, 3, FRAC_PI_2).unwrap();
        let composed = r45.mul(&r45).unwrap();
        assert!(composed.approx_eq(&r90, EPSILON));
    }

    #[test]
    fn test_mul_dimension_mismatch() {
        let a = Matrix::identity(3);
        let b = Matrix::identity(4);
        assert!(a.mul(&b).is_err());
    }
}
