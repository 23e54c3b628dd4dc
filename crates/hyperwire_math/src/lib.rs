//! N-dimensional Mathematics Library
//!
//! Small, dynamically sized linear algebra for rotating and projecting
//! point sets of any dimension.
//!
//! ## Core Types
//!
//! - [`VecN`] - Point/vector with an arbitrary number of coordinates
//! - [`Matrix`] - Row-major `rows × cols` matrix
//! - [`ProjectionChain`] - Successive perspective divides down to 2D
//!
//! ## Operations
//!
//! - [`rotation_matrix`] - Rotation in a coordinate plane of a k-dimensional space
//! - [`mat_vec_mul`] - Matrix-vector product with shape checking
//! - [`project`] - One perspective divide, k → k-1 dimensions

mod error;
mod vecn;
pub mod matrix;
pub mod projection;

pub use error::MathError;
pub use vecn::VecN;
pub use matrix::{Matrix, rotation_matrix, mat_vec_mul};
pub use projection::{project, ProjectionChain, ProjectionStep};
