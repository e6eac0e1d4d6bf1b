//! DMLC control-file emission.
//!
//! Renders an assembled [`Field`](aperture_field::Field) into the
//! device's textual control format: a key-value plan header followed by
//! one block per control point, each listing every leaf's physical
//! position. [`DmlcWriter`] streams to any `Write` sink, so tests use
//! `Vec<u8>` and production code a `BufWriter<File>`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod header;
pub mod writer;

pub use error::EmitError;
pub use geometry::MachineGeometry;
pub use header::PlanHeader;
pub use writer::DmlcWriter;
