//! Shared test fixtures for the Aperture workspace.
//!
//! Canonical profiles with known sequencing results, plus deterministic
//! grid generators for integration tests and benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{gradient_grid, plateau_profile, random_grid, staircase_profile, triangle_profile};
