//! Divide-and-conquer driver.
//!
//! - `solve`: hull of an x-sorted point list; split by index at the midpoint,
//!   recurse, merge with `Hull::combine`. O(n log n).
//! - `solve_unsorted`: sorts first, for callers without sorted input.
//!
//! The two recursive branches read disjoint slices and return owned hulls, so
//! nothing prevents running them in a fork-join pool later.

use nalgebra::Vector2;
use tracing::debug;

use crate::error::HullError;
use crate::hull::{lex_cmp, Hull};

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveCfg {
    /// Largest slice built directly instead of split. Clamped to at least 1.
    pub leaf_size: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self { leaf_size: 3 }
    }
}

/// Convex hull of `points`, which must be sorted by ascending x.
pub fn solve(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    solve_with(points, SolveCfg::default())
}

/// Like [`solve`], with an explicit configuration.
pub fn solve_with(points: &[Vector2<f64>], cfg: SolveCfg) -> Result<Hull, HullError> {
    validate(points)?;
    // Ties in x may arrive in any y order; settle them so that index splits
    // stay separable, and drop exact duplicates. Linear on sorted runs.
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    debug!(points = points.len(), distinct = pts.len(), leaf_size = cfg.leaf_size, "solve");
    let hull = split_merge(&pts, cfg.leaf_size.max(1))?;
    debug!(vertices = hull.len(), "solved");
    Ok(hull)
}

/// Sort by x (then y) and solve.
pub fn solve_unsorted(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    if points.is_empty() {
        return Err(HullError::InvalidInput);
    }
    check_finite(points)?;
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    solve(&pts)
}

fn split_merge(points: &[Vector2<f64>], leaf_size: usize) -> Result<Hull, HullError> {
    if points.len() <= leaf_size {
        return Hull::from_points(points);
    }
    let (lo, hi) = points.split_at(points.len() / 2);
    let left = split_merge(lo, leaf_size)?;
    let right = split_merge(hi, leaf_size)?;
    Hull::combine(&left, &right)
}

fn check_finite(points: &[Vector2<f64>]) -> Result<(), HullError> {
    match points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        Some(index) => Err(HullError::NonFinite { index }),
        None => Ok(()),
    }
}

fn validate(points: &[Vector2<f64>]) -> Result<(), HullError> {
    if points.is_empty() {
        return Err(HullError::InvalidInput);
    }
    check_finite(points)?;
    if let Some(k) = points.windows(2).position(|w| w[1].x < w[0].x) {
        return Err(HullError::Unsorted { index: k + 1 });
    }
    Ok(())
}
