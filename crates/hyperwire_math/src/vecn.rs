//! N-dimensional vector type

/// A point or vector with an arbitrary number of coordinates
///
/// Axis 0 is X, 1 is Y, 2 is Z, 3 is W.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VecN {
    coords: Vec<f32>,
}

impl VecN {
    /// Create a vector from its coordinates
    #[inline]
    pub fn new(coords: Vec<f32>) -> Self {
        Self { coords }
    }

    /// The zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self { coords: vec![0.0; dim] }
    }

    /// Number of coordinates
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Last coordinate, used as depth by the perspective divide
    #[inline]
    pub fn last(&self) -> Option<f32> {
        self.coords.last().copied()
    }

    /// Keep only the first `dim` coordinates
    pub fn truncated(&self, dim: usize) -> Self {
        Self::new(self.coords.iter().take(dim).copied().collect())
    }

    /// Number of positions at which the two vectors differ
    ///
    /// Vectors of different dimension differ in every extra position.
    pub fn differing_coordinates(&self, other: &Self) -> usize {
        let shared = self
            .coords
            .iter()
            .zip(&other.coords)
            .filter(|(a, b)| a != b)
            .count();
        shared + self.dim().abs_diff(other.dim())
    }

    /// True if every coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Approximate equality with an absolute tolerance per coordinate
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.dim() == other.dim()
            && self
                .coords
                .iter()
                .zip(&other.coords)
                .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl From<Vec<f32>> for VecN {
    fn from(coords: Vec<f32>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f32; N]> for VecN {
    fn from(coords: [f32; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl std::ops::Index<usize> for VecN {
    type Output = f32;
    #[inline]
    fn index(&self, axis: usize) -> &f32 {
        &self.coords[axis]
    }
}

impl std::ops::IndexMut<usize> for VecN {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        &mut self.coords[axis]
    }
}

impl std::ops::Mul<f32> for &VecN {
    type Output = VecN;
    fn mul(self, scalar: f32) -> VecN {
        VecN::new(self.coords.iter().map(|c| c * scalar).collect())
    }
}

impl std::ops::Mul<f32> for VecN {
    type Output = VecN;
    #[inline]
    fn mul(self, scalar: f32) -> VecN {
        &self * scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_and_index() {
        let v = VecN::from([1.0, 2.0, 3.0]);
        assert_eq!(v.dim(), 3);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.last(), Some(3.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(VecN::from([3.0, 4.0]).is_finite());
        assert!(!VecN::from([3.0, f32::NAN]).is_finite());
        assert!(!VecN::from([f32::INFINITY]).is_finite());
    }

    #[test]
    fn test_truncated() {
        let v = VecN::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.truncated(2), VecN::from([1.0, 2.0]));
    }

    #[test]
    fn test_differing_coordinates() {
        let a = VecN::from([-1.0, -1.0, 1.0]);
        let b = VecN::from([-1.0, 1.0, 1.0]);
        let c = VecN::from([1.0, 1.0, -1.0]);
        assert_eq!(a.differing_coordinates(&a), 0);
        assert_eq!(a.differing_coordinates(&b), 1);
        assert_eq!(a.differing_coordinates(&c), 3);
    }

    #[test]
    fn test_scale() {
        let v = VecN::from([1.0, -2.0]) * 3.0;
        assert_eq!(v, VecN::from([3.0, -6.0]));
    }
}
