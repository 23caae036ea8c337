//! Deterministic random shapes (replay tokens).
//!
//! Purpose
//! - Reproducible inputs for benches, the CLI `sample` command and tests.
//!   Every draw goes through the registry, so sampled shapes obey the same
//!   invariants as hand-built ones.
//!
//! Model
//! - A Bernoulli draw picks the variant, then each dimension is uniform on
//!   `[dim_min, dim_max]` (clamped to a finite, positive range).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::{SAMPLE_DIM_MAX, SAMPLE_DIM_MIN};
use crate::error::ShapeError;
use crate::registry::{create_circle, create_rectangle};
use crate::types::Shape;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Probability of drawing a circle. Clamped to [0, 1].
    pub circle_weight: f64,
    pub dim_min: f64,
    pub dim_max: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            circle_weight: 0.5,
            dim_min: 0.1,
            dim_max: 10.0,
        }
    }
}

impl SampleCfg {
    fn dim_bounds(&self) -> (f64, f64) {
        let lo = if self.dim_min.is_finite() && self.dim_min > 0.0 {
            self.dim_min.min(SAMPLE_DIM_MAX)
        } else {
            SAMPLE_DIM_MIN
        };
        let hi = if self.dim_max.is_finite() {
            self.dim_max.clamp(lo, SAMPLE_DIM_MAX)
        } else {
            SAMPLE_DIM_MAX
        };
        (lo, hi)
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
        // SplitMix64 finalizer
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

/// Draw one shape; the same `(cfg, tok)` always yields the same shape.
pub fn draw_shape(cfg: &SampleCfg, tok: ReplayToken) -> Result<Shape, ShapeError> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = cfg.dim_bounds();
    let p_circle = if cfg.circle_weight.is_nan() {
        0.5
    } else {
        cfg.circle_weight.clamp(0.0, 1.0)
    };
    if rng.gen_bool(p_circle) {
        create_circle(rng.gen_range(lo..=hi))
    } else {
        let w = rng.gen_range(lo..=hi);
        let h = rng.gen_range(lo..=hi);
        create_rectangle(w, h)
    }
}

/// Draw `count` shapes with indices `0..count` under one seed.
pub fn draw_many(cfg: &SampleCfg, seed: u64, count: usize) -> Result<Vec<Shape>, ShapeError> {
    (0..count as u64)
        .map(|index| draw_shape(cfg, ReplayToken { seed, index }))
        .collect()
}
