//! Raster digitizing: turn an in-memory RGB pixel buffer into an
//! [`IntensityGrid`](aperture_core::IntensityGrid).
//!
//! File decoding stays outside this workspace; callers hand over a
//! decoded 8-bit RGB buffer. Digitizing is three steps: luma grayscale
//! conversion, inversion (dark pixels print as high dose), and
//! nearest-neighbour resampling to the device geometry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod digitize;

pub use digitize::{digitize, Raster, RasterError};
