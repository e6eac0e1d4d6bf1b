//! Core types and errors for the Aperture leaf-sequencing toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model shared by the rest of the workspace: pair identifiers,
//! intensity profiles and grids, leaf schedules, control-point
//! trajectories, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod profile;
pub mod schedule;
pub mod trajectory;

pub use error::{AssembleError, ConfigError, FitError};
pub use id::PairId;
pub use profile::{IntensityGrid, IntensityProfile, FULL_SCALE};
pub use schedule::{LeafSchedules, ScheduleEntry};
pub use trajectory::{ControlPoint, Trajectory};
