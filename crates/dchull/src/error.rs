//! Error type shared by hull construction, merging, and the solver.

use thiserror::Error;

/// Failures of hull construction and the divide-and-conquer driver.
///
/// All variants are deterministic functions of the input; none is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// No points were supplied; a hull needs at least one.
    #[error("invalid input: point set is empty")]
    InvalidInput,

    /// A coordinate is NaN or infinite.
    #[error("invalid input: point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Input is not sorted by ascending x.
    #[error("invalid input: point {index} breaks ascending x order")]
    Unsorted { index: usize },

    /// Merge inputs are not separated: the left hull's rightmost vertex is
    /// not lexicographically smaller than the right hull's leftmost vertex.
    #[error("hulls overlap: left reaches ({left_x}, {left_y}), right starts at ({right_x}, {right_y})")]
    NotSeparated {
        left_x: f64,
        left_y: f64,
        right_x: f64,
        right_y: f64,
    },

    /// Tangent walk exceeded its step bound; one of the hulls is not convex.
    #[error("tangent search did not settle after {steps} steps (left: {left} vertices, right: {right} vertices)")]
    TangentDiverged {
        steps: usize,
        left: usize,
        right: usize,
    },
}
