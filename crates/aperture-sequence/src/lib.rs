//! Leaf-pair sequencing engine.
//!
//! Two stages, both pure value-returning functions:
//!
//! - [`sweep_profile`] — decompose one intensity profile into leading and
//!   trailing leaf breakpoint schedules (the unidirectional-sweep
//!   minimum-segment result).
//! - [`build_trajectory`] — sample those schedules at unit-MU steps into
//!   an ordered control-point table, duplicate-row transitions included.
//!
//! [`sequence_profile`] chains the two for callers that only need the
//! final trajectory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod sweep;

pub use builder::build_trajectory;
pub use sweep::sweep_profile;

use aperture_core::{IntensityProfile, Trajectory};

/// Sequence one profile straight to its trajectory.
pub fn sequence_profile(profile: &IntensityProfile) -> Trajectory {
    build_trajectory(&sweep_profile(profile))
}
