// ─────────────────────────────────────────────────────────────────────
// DMRI Voxel Kernels — Direction Sampling
// Compiled numerical core for diffusion-MRI tractography pipelines.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Seeded random direction sampling.
//!
//! Generators are always explicit arguments: the same seed and call sequence
//! reproduces the same directions, and parallel tracking workers each own an
//! independent state instead of racing on a shared one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::vec3::dot;

/// Squared-norm floor below which a Gaussian draw is redrawn rather than
/// normalised.
const MIN_DIRECTION_NORM2: f64 = 1e-12;

/// Uniformly distributed direction on the unit sphere.
///
/// Three standard-normal draws, normalised; draws too close to the origin are
/// rejected and redrawn. Advances the supplied generator state only.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> [f64; 3] {
    loop {
        let v = [
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
        ];
        let n2 = dot(v, v);
        if n2 >= MIN_DIRECTION_NORM2 {
            let inv = 1.0 / n2.sqrt();
            return [v[0] * inv, v[1] * inv, v[2] * inv];
        }
    }
}

/// Independent deterministic generators for parallel tracking workers.
///
/// Each worker stream is derived from the base seed with a SplitMix-style
/// spread so that neighbouring worker indices do not produce correlated
/// seeds. The same `(base_seed, workers)` pair always yields the same states.
pub fn worker_rngs(base_seed: u64, workers: usize) -> Vec<StdRng> {
    (0..workers as u64)
        .map(|i| StdRng::seed_from_u64(base_seed ^ (i.wrapping_add(1)).wrapping_mul(0x9E37_79B9_7F4A_7C15)))
        .collect()
}
