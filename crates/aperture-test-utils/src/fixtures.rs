//! Canonical profiles and deterministic grid generators.

use aperture_core::{IntensityGrid, IntensityProfile};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// The single triangular peak `[0, 4, 0]`.
///
/// Sequences to leading `{(2, 4)}`, trailing `{(1, 4)}`, total MU 4 —
/// the smallest profile that exercises both leaves.
pub fn triangle_profile() -> IntensityProfile {
    IntensityProfile::new(vec![0, 4, 0])
}

/// The two-step staircase `[0, 2, 4, 0]`: one leading event, two
/// trailing events, a mid-run transition at MU 2.
pub fn staircase_profile() -> IntensityProfile {
    IntensityProfile::new(vec![0, 2, 4, 0])
}

/// A flat-topped profile: opens once, holds, closes once.
pub fn plateau_profile(width: usize, height: u32) -> IntensityProfile {
    IntensityProfile::new(vec![height; width])
}

/// A smooth symmetric gradient grid peaking at the center, raw 8-bit
/// range. Deterministic without an RNG; good for benchmarks.
pub fn gradient_grid(rows: usize, cols: usize) -> IntensityGrid {
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            // Product of triangular ramps in both axes, scaled to 0..=255.
            let rv = ramp(r, rows);
            let cv = ramp(c, cols);
            data.push((rv * cv * 255.0).round() as u32);
        }
    }
    IntensityGrid::from_flat(rows, cols, data).expect("non-empty dims")
}

fn ramp(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    let x = i as f64 / (n - 1) as f64;
    1.0 - (2.0 * x - 1.0).abs()
}

/// A uniformly random 8-bit grid from a seeded ChaCha8 RNG: identical
/// seeds produce identical grids.
pub fn random_grid(rows: usize, cols: usize, seed: u64) -> IntensityGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..rows * cols)
        .map(|_| rng.random_range(0..=255u32))
        .collect();
    IntensityGrid::from_flat(rows, cols, data).expect("non-empty dims")
}
