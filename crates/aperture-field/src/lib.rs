//! Field-level assembly and the compression-fitter search.
//!
//! [`assemble`](crate::assemble::assemble) normalizes every pair's
//! trajectory to one common control-point count and enforces the
//! device's hard upper bound. [`fit`](crate::fit::fit) wraps the whole
//! per-row sequencing pipeline in a bracket-and-converge search over the
//! intensity compression factor, maximizing dose-rate resolution within
//! the control-point budget.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assemble;
pub mod fit;

pub use assemble::{assemble, Field};
pub use fit::{fit, fit_field, FitConfig, FitOutcome};
