//! Error types for the Aperture pipeline, organized by subsystem:
//! configuration validation, field assembly, and the compression fitter.

use std::error::Error;
use std::fmt;

use crate::id::PairId;

/// Errors detected before any sequencing work starts.
///
/// All of these are caller mistakes and fail fast: the fitter refuses to
/// enter its search loop with a configuration that cannot terminate.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The intensity grid has zero rows or zero columns.
    EmptyGrid,
    /// A grid row's length differs from the declared column count.
    RaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Expected column count.
        expected: usize,
        /// Actual length found.
        found: usize,
    },
    /// The device control-point limit is zero.
    InvalidControlLimit {
        /// The invalid value.
        value: usize,
    },
    /// The initial compression factor is non-positive or not finite.
    InvalidInitialFactor {
        /// The invalid value.
        value: f64,
    },
    /// The factor increment is non-positive or not finite. A zero or
    /// negative increment makes the fitter's search non-terminating.
    InvalidIncrement {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "intensity grid has no cells"),
            Self::RaggedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidControlLimit { value } => {
                write!(f, "control-point limit must be at least 1, got {value}")
            }
            Self::InvalidInitialFactor { value } => {
                write!(f, "initial factor must be finite and positive, got {value}")
            }
            Self::InvalidIncrement { value } => {
                write!(f, "factor increment must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from normalizing trajectories into a fixed-length field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssembleError {
    /// A pair's trajectory is longer than the device limit. The fitter
    /// exists to prevent this; seeing it means sequencing and the limit
    /// disagree, so it is fatal rather than recoverable.
    LimitExceeded {
        /// The offending pair.
        pair: PairId,
        /// The trajectory's control-point count.
        length: usize,
        /// The device limit it exceeded.
        limit: usize,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimitExceeded {
                pair,
                length,
                limit,
            } => write!(
                f,
                "pair {pair} trajectory has {length} control points, limit is {limit}"
            ),
        }
    }
}

impl Error for AssembleError {}

/// Errors from the compression-fitter search.
///
/// The fitter's inner computation is pure and error-free for valid
/// input; the only propagated failure is a limit violation that no
/// further factor adjustment can resolve.
#[derive(Clone, Debug, PartialEq)]
pub enum FitError {
    /// Configuration rejected before the search started.
    Config(ConfigError),
    /// Even the smallest reachable factor produces a trajectory over the
    /// device limit. No partial output is returned.
    LimitExceeded {
        /// The worst pair at the final attempted factor.
        pair: PairId,
        /// That pair's trajectory length.
        length: usize,
        /// The device limit.
        limit: usize,
        /// The factor at which the search gave up.
        factor: f64,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::LimitExceeded {
                pair,
                length,
                limit,
                factor,
            } => write!(
                f,
                "pair {pair} needs {length} control points (limit {limit}) \
                 even at factor {factor}"
            ),
        }
    }
}

impl Error for FitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for FitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
