//! Benchmark profiles and utilities for the Aperture pipeline.
//!
//! Provides pre-built grids and fit configurations for benchmarking and
//! examples:
//!
//! - [`reference_grid`]: 26x56 gradient portrait (one standard leaf bank)
//! - [`stress_grid`]: 64x128 seeded random grid for worst-case sequencing
//! - [`reference_fit_config`]: the device limit the benchmarks fit under

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use aperture_core::IntensityGrid;
use aperture_field::FitConfig;
use aperture_test_utils::{gradient_grid, random_grid};

/// Build the reference benchmark grid: a 26x56 centered gradient.
///
/// 26 rows matches a standard leaf-pair count; 56 columns matches the
/// default machine geometry. Smooth content, so sequencing cost is
/// dominated by trajectory building rather than breakpoint churn.
pub fn reference_grid() -> IntensityGrid {
    gradient_grid(26, 56)
}

/// Build the stress benchmark grid: 64x128 uniform random 8-bit values.
///
/// Random content maximizes breakpoint count per row, the sweep's
/// worst case. Seeded, so every run sequences the same grid.
pub fn stress_grid(seed: u64) -> IntensityGrid {
    random_grid(64, 128, seed)
}

/// The fit configuration benchmarks run under: the stock 499-point
/// device limit with default search parameters.
pub fn reference_fit_config() -> FitConfig {
    FitConfig::default()
}
