//! Aperture: dynamic multileaf-collimator (DMLC) leaf sequencing.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Aperture sub-crates. For most users, adding `aperture` as a
//! single dependency is sufficient.
//!
//! The pipeline turns a 2D intensity map into a device control file in
//! four stages: digitize a raster into an intensity grid, search for
//! the largest compression factor whose trajectories fit the device's
//! control-point limit, normalize every pair to that limit, and stream
//! the result as a textual plan.
//!
//! # Quick start
//!
//! ```rust
//! use aperture::prelude::*;
//!
//! // A small intensity map, one row per leaf pair.
//! let grid = IntensityGrid::from_rows(vec![
//!     vec![0, 40, 80, 40, 0],
//!     vec![0, 0, 60, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! // Fit the grid under the device's control-point limit.
//! let config = FitConfig {
//!     control_limit: 120,
//!     ..FitConfig::default()
//! };
//! let field = fit_field(&grid, &config).unwrap();
//! assert_eq!(field.pair_count(), 3);
//!
//! // Stream the plan to any `Write` sink.
//! let header = PlanHeader {
//!     patient_id: "42".into(),
//!     number_of_fields: field.control_limit(),
//!     ..PlanHeader::default()
//! };
//! let mut writer = DmlcWriter::new(Vec::new(), &header, MachineGeometry::default()).unwrap();
//! writer.write_field(&field).unwrap();
//! let text = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(text.starts_with("File Rev = G"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `aperture-core` | Profiles, grids, schedules, trajectories, error types |
//! | [`sequence`] | `aperture-sequence` | Sweep decomposition and trajectory building |
//! | [`field`] | `aperture-field` | Compression fitting and field assembly |
//! | [`raster`] | `aperture-raster` | Raster digitizing into intensity grids |
//! | [`dmlc`] | `aperture-dmlc` | Control-file geometry, headers, and the writer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Profiles, grids, schedules, trajectories, and errors (`aperture-core`).
pub use aperture_core as types;

/// Sweep decomposition and trajectory building (`aperture-sequence`).
///
/// [`sequence::sweep_profile`] produces leaf breakpoint schedules,
/// [`sequence::build_trajectory`] samples them into control points, and
/// [`sequence::sequence_profile`] chains the two.
pub use aperture_sequence as sequence;

/// Compression fitting and field assembly (`aperture-field`).
///
/// [`field::fit`] searches for the largest usable compression factor;
/// [`field::assemble`] normalizes trajectories to the control limit.
pub use aperture_field as field;

/// Raster digitizing (`aperture-raster`).
///
/// Converts a decoded RGB pixel buffer into an intensity grid via luma
/// grayscale, inversion, and nearest-neighbour resampling.
pub use aperture_raster as raster;

/// Control-file emission (`aperture-dmlc`).
///
/// [`dmlc::DmlcWriter`] streams a [`dmlc::PlanHeader`] and per-control-
/// point leaf blocks, mapping columns to millimetres through a
/// [`dmlc::MachineGeometry`].
pub use aperture_dmlc as dmlc;

/// Common imports for typical Aperture usage.
///
/// ```rust
/// use aperture::prelude::*;
/// ```
pub mod prelude {
    // Core values
    pub use aperture_core::{
        ControlPoint, IntensityGrid, IntensityProfile, LeafSchedules, PairId, ScheduleEntry,
        Trajectory, FULL_SCALE,
    };

    // Errors
    pub use aperture_core::{AssembleError, ConfigError, FitError};

    // Sequencing
    pub use aperture_sequence::{build_trajectory, sequence_profile, sweep_profile};

    // Fitting and assembly
    pub use aperture_field::{assemble, fit, fit_field, Field, FitConfig, FitOutcome};

    // Digitizing
    pub use aperture_raster::{digitize, Raster, RasterError};

    // Emission
    pub use aperture_dmlc::{DmlcWriter, EmitError, MachineGeometry, PlanHeader};
}
