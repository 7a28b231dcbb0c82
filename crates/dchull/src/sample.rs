//! Random point clouds (reproducible via replay tokens).
//!
//! Purpose
//! - Feed the solver, benches, and CLI with deterministic test inputs.
//!   Output is unsorted; callers sort or use `solve_unsorted`.
//!
//! Model
//! - One RNG per draw, seeded from a replay token `(seed, index)`, so the
//!   k-th cloud of a run can be regenerated without replaying the first k-1.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of the cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform in the square `[-scale, scale]²`.
    Square,
    /// Uniform in the disc of radius `scale`.
    Disc,
    /// Isotropic normal with standard deviation `scale`.
    Gaussian,
    /// On the circle of radius `scale`: every point is a hull vertex.
    Circle,
}

/// Cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub distribution: Distribution,
    pub scale: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            distribution: Distribution::Square,
            scale: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. A negative `scale` is treated as its magnitude.
///
/// Returns `None` if `scale` is not finite or a drawn point overflows `f64`.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Option<Vec<Vector2<f64>>> {
    if !cfg.scale.is_finite() {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let s = cfg.scale.abs();
    let pts: Vec<Vector2<f64>> = (0..cfg.count)
        .map(|_| match cfg.distribution {
            // Scale after sampling: rand's float range needs a finite width.
            Distribution::Square => {
                Vector2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)) * s
            }
            Distribution::Disc => {
                // sqrt for uniform area density
                let r = s * rng.gen::<f64>().sqrt();
                polar_point(r, rng.gen::<f64>() * std::f64::consts::TAU)
            }
            Distribution::Gaussian => {
                // Box-Muller; 1 - u keeps the log argument in (0, 1].
                let u: f64 = 1.0 - rng.gen::<f64>();
                let r = s * (-2.0 * u.ln()).sqrt();
                polar_point(r, rng.gen::<f64>() * std::f64::consts::TAU)
            }
            Distribution::Circle => polar_point(s, rng.gen::<f64>() * std::f64::consts::TAU),
        })
        .collect();
    if pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
        Some(pts)
    } else {
        None
    }
}

#[inline]
fn polar_point(r: f64, theta: f64) -> Vector2<f64> {
    Vector2::new(r * theta.cos(), r * theta.sin())
}
