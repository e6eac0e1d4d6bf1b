//! The compression-fitter search.
//!
//! A bracket-and-converge hill climb over the intensity compression
//! factor, with one direction reversal: grow the factor until some
//! pair's trajectory would exceed the control-point limit, then back off
//! until everything fits again. Trajectory length is monotone
//! non-decreasing in the factor (scaling only grows the forward
//! differences), so the first fitting factor after excess is the best.

use aperture_core::{ConfigError, FitError, IntensityGrid, IntensityProfile, Trajectory};
use aperture_core::PairId;
use aperture_sequence::sequence_profile;

use crate::assemble::{assemble, Field};

/// Parameters for the fitter search.
#[derive(Clone, Debug)]
pub struct FitConfig {
    /// Device-imposed maximum control-point count per field. Default: 499.
    pub control_limit: usize,
    /// Starting compression factor. 255 scales raw 8-bit intensity by
    /// exactly 1. Default: 255.
    pub initial_factor: f64,
    /// Step applied when walking the factor up or down. Must be
    /// positive: a zero step would never terminate. Default: 5.
    pub increment: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            control_limit: 499,
            initial_factor: 255.0,
            increment: 5.0,
        }
    }
}

impl FitConfig {
    /// Validate all structural invariants before the search starts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a zero control limit or a
    /// non-finite or non-positive factor or increment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.control_limit == 0 {
            return Err(ConfigError::InvalidControlLimit {
                value: self.control_limit,
            });
        }
        if !self.initial_factor.is_finite() || self.initial_factor <= 0.0 {
            return Err(ConfigError::InvalidInitialFactor {
                value: self.initial_factor,
            });
        }
        if !self.increment.is_finite() || self.increment <= 0.0 {
            return Err(ConfigError::InvalidIncrement {
                value: self.increment,
            });
        }
        Ok(())
    }
}

/// The fitter's result: the winning pair trajectories and the factor
/// that produced them.
#[derive(Clone, Debug)]
pub struct FitOutcome {
    /// One trajectory per grid row, in pair order.
    pub trajectories: Vec<Trajectory>,
    /// The compression factor the search settled on.
    pub factor: f64,
    /// The longest trajectory's control-point count at that factor.
    pub max_length: usize,
}

/// Search for the largest usable compression factor.
///
/// Each iteration scales the raw grid by `factor / 255`, sequences every
/// row, and compares the worst pair's trajectory length against the
/// limit. Pair lists are discarded and rebuilt on every retry; nothing
/// carries across iterations but the factor and the excess flag.
///
/// An all-zero grid short-circuits: every pair is static and any factor
/// fits, so the initial factor is returned unchanged.
///
/// # Errors
///
/// [`FitError::Config`] for invalid parameters, and
/// [`FitError::LimitExceeded`] when even the smallest reachable factor
/// leaves some pair over the limit.
pub fn fit(grid: &IntensityGrid, config: &FitConfig) -> Result<FitOutcome, FitError> {
    config.validate()?;

    if grid.max_value() == 0 {
        let trajectories = sequence_rows(grid);
        return Ok(FitOutcome {
            trajectories,
            factor: config.initial_factor,
            max_length: 1,
        });
    }

    let mut factor = config.initial_factor;
    let mut reached_excess = false;
    loop {
        let trajectories = sequence_rows(&grid.scaled(factor));
        let (worst, max_length) = longest(&trajectories);

        if max_length > config.control_limit {
            reached_excess = true;
            let next = factor - config.increment;
            if next <= 0.0 {
                // Nowhere left to move: even the smallest factor is over.
                return Err(FitError::LimitExceeded {
                    pair: worst,
                    length: max_length,
                    limit: config.control_limit,
                    factor,
                });
            }
            factor = next;
        } else if reached_excess {
            // First fitting factor after overshoot: done.
            return Ok(FitOutcome {
                trajectories,
                factor,
                max_length,
            });
        } else {
            factor += config.increment;
        }
    }
}

/// Run the fitter and assemble the result into a normalized [`Field`].
///
/// # Errors
///
/// Propagates [`fit`] errors; an assembly failure is mapped onto
/// [`FitError::LimitExceeded`] with the winning factor attached.
pub fn fit_field(grid: &IntensityGrid, config: &FitConfig) -> Result<Field, FitError> {
    let outcome = fit(grid, config)?;
    let factor = outcome.factor;
    assemble(outcome.trajectories, config.control_limit).map_err(|e| match e {
        aperture_core::AssembleError::LimitExceeded {
            pair,
            length,
            limit,
        } => FitError::LimitExceeded {
            pair,
            length,
            limit,
            factor,
        },
    })
}

fn sequence_rows(grid: &IntensityGrid) -> Vec<Trajectory> {
    grid.iter_rows()
        .map(|row| sequence_profile(&IntensityProfile::new(row.to_vec())))
        .collect()
}

/// The first pair with the maximum trajectory length.
fn longest(trajectories: &[Trajectory]) -> (PairId, usize) {
    let mut worst = PairId(0);
    let mut max_length = 0;
    for (i, t) in trajectories.iter().enumerate() {
        if t.len() > max_length {
            worst = PairId(i as u32);
            max_length = t.len();
        }
    }
    (worst, max_length)
}
