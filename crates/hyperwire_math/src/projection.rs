//! Perspective projection from k dimensions down to 2D
//!
//! Each step divides the remaining coordinates by `distance - depth`, where
//! depth is the last coordinate. Steps are chained to go 4D → 3D → 2D.

use crate::{MathError, VecN};

/// Viewer distance for the 4D → 3D step (and any step above 3D)
pub const DEFAULT_HYPER_DISTANCE: f32 = 3.0;
/// Viewer distance for the 3D → 2D step
pub const DEFAULT_DISTANCE: f32 = 4.0;

/// Reduce a k-dimensional point to k-1 dimensions with a perspective divide.
///
/// Computes `w = 1 / (distance - point[k-1])` and returns the first k-1
/// coordinates multiplied by `w`. There is no clamping: a zero denominator
/// is reported as [`MathError::DegenerateProjection`].
pub fn project(point: &VecN, distance: f32) -> Result<VecN, MathError> {
    let depth = point
        .last()
        .ok_or(MathError::InvalidProjection { dimension: 0 })?;
    let denominator = distance - depth;
    let w = 1.0 / denominator;
    if denominator == 0.0 || !w.is_finite() {
        return Err(MathError::DegenerateProjection { depth, distance });
    }
    Ok(point.truncated(point.dim() - 1) * w)
}

/// One perspective divide in a chain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionStep {
    /// Dimension of the points this step consumes
    pub source_dimension: usize,
    /// Viewer distance along the depth axis
    pub distance: f32,
}

/// Ordered perspective divides taking k-dimensional points to 2D
///
/// Stateless: the same chain is applied to every vertex every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionChain {
    steps: Vec<ProjectionStep>,
}

impl ProjectionChain {
    /// Build a chain from `dimension` down to 2D using explicit distances,
    /// ordered from the highest dimension to 3D.
    ///
    /// # Example
    /// ```
    /// use hyperwire_math::ProjectionChain;
    /// // Tesseract: 4D → 3D at distance 3, then 3D → 2D at distance 4
    /// let chain = ProjectionChain::new(4, &[3.0, 4.0]).unwrap();
    /// assert_eq!(chain.steps().len(), 2);
    /// ```
    pub fn new(dimension: usize, distances: &[f32]) -> Result<Self, MathError> {
        if dimension < 2 {
            return Err(MathError::InvalidProjection { dimension });
        }
        if distances.len() != dimension - 2 {
            return Err(MathError::DimensionMismatch {
                expected: dimension - 2,
                found: distances.len(),
            });
        }

        let steps = distances
            .iter()
            .enumerate()
            .map(|(i, &distance)| ProjectionStep {
                source_dimension: dimension - i,
                distance,
            })
            .collect();
        Ok(Self { steps })
    }

    /// Chain with the standard distances: 3 for every step above 3D, 4 for 3D → 2D
    pub fn standard(dimension: usize) -> Result<Self, MathError> {
        let distances: Vec<f32> = (3..=dimension)
            .rev()
            .map(|d| if d == 3 { DEFAULT_DISTANCE } else { DEFAULT_HYPER_DISTANCE })
            .collect();
        Self::new(dimension, &distances)
    }

    pub fn steps(&self) -> &[ProjectionStep] {
        &self.steps
    }

    /// Dimension of the points this chain accepts
    pub fn source_dimension(&self) -> usize {
        self.steps.first().map_or(2, |s| s.source_dimension)
    }

    /// Project a point all the way down to 2D
    pub fn apply(&self, point: &VecN) -> Result<VecN, MathError> {
        if point.dim() != self.source_dimension() {
            return Err(MathError::DimensionMismatch {
                expected: self.source_dimension(),
                found: point.dim(),
            });
        }

        let mut current = point.clone();
        for step in &self.steps {
            current = project(&current, step.distance)?;
        }
        Ok(current)
    }
}
