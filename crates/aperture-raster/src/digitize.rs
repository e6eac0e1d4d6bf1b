//! Grayscale conversion, inversion, and resampling.

use std::error::Error;
use std::fmt;

use aperture_core::IntensityGrid;

/// Luma weights for grayscale conversion (ITU-style, red/green/blue).
const LUMA: [f64; 3] = [0.21, 0.72, 0.07];

/// A decoded 8-bit RGB image, row-major, three bytes per pixel.
#[derive(Clone, Debug)]
pub struct Raster {
    width: usize,
    height: usize,
    rgb: Vec<u8>,
}

impl Raster {
    /// Wrap a decoded pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyRaster`] for zero width or height and
    /// [`RasterError::BufferMismatch`] if `rgb.len() != width * height * 3`.
    pub fn new(width: usize, height: usize, rgb: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyRaster);
        }
        let expected = width * height * 3;
        if rgb.len() != expected {
            return Err(RasterError::BufferMismatch {
                expected,
                found: rgb.len(),
            });
        }
        Ok(Self { width, height, rgb })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Inverted luma intensity of one pixel: 0 for white, 255 for black.
    fn intensity(&self, x: usize, y: usize) -> u32 {
        let i = (y * self.width + x) * 3;
        let gray = LUMA[0] * f64::from(self.rgb[i])
            + LUMA[1] * f64::from(self.rgb[i + 1])
            + LUMA[2] * f64::from(self.rgb[i + 2]);
        255 - (gray as u8) as u32
    }
}

/// Errors from raster digitizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// The raster or the requested grid has zero extent.
    EmptyRaster,
    /// The pixel buffer length disagrees with the declared dimensions.
    BufferMismatch {
        /// Expected byte count (`width * height * 3`).
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRaster => write!(f, "raster or target grid has zero extent"),
            Self::BufferMismatch { expected, found } => {
                write!(f, "pixel buffer has {found} bytes, expected {expected}")
            }
        }
    }
}

impl Error for RasterError {}

/// Digitize a raster into a `rows × cols` intensity grid.
///
/// Each grid cell samples the nearest source pixel (nearest-neighbour
/// resampling), converted to inverted luma: dark image regions become
/// high intensity, so the printed portrait is dose-positive.
///
/// # Errors
///
/// Returns [`RasterError::EmptyRaster`] if `rows` or `cols` is zero.
pub fn digitize(raster: &Raster, rows: usize, cols: usize) -> Result<IntensityGrid, RasterError> {
    if rows == 0 || cols == 0 {
        return Err(RasterError::EmptyRaster);
    }
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let y = nearest(r, rows, raster.height);
        for c in 0..cols {
            let x = nearest(c, cols, raster.width);
            data.push(raster.intensity(x, y));
        }
    }
    Ok(IntensityGrid::from_flat(rows, cols, data).expect("dims checked above"))
}

/// Map target index `i` of `n` onto the nearest of `m` source indices.
fn nearest(i: usize, n: usize, m: usize) -> usize {
    (((i as f64 + 0.5) * m as f64 / n as f64) as usize).min(m - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_raster(width: usize, height: usize, rgb: [u8; 3]) -> Raster {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Raster::new(width, height, data).unwrap()
    }

    #[test]
    fn rejects_empty_and_mismatched_buffers() {
        match Raster::new(0, 4, vec![]) {
            Err(RasterError::EmptyRaster) => {}
            other => panic!("expected EmptyRaster, got {other:?}"),
        }
        match Raster::new(2, 2, vec![0; 11]) {
            Err(RasterError::BufferMismatch {
                expected: 12,
                found: 11,
            }) => {}
            other => panic!("expected BufferMismatch, got {other:?}"),
        }
    }

    #[test]
    fn black_maps_to_full_intensity() {
        let raster = solid_raster(4, 4, [0, 0, 0]);
        let grid = digitize(&raster, 2, 2).unwrap();
        assert!(grid.iter_rows().flatten().all(|&v| v == 255));
    }

    #[test]
    fn white_maps_to_zero_intensity() {
        let raster = solid_raster(4, 4, [255, 255, 255]);
        let grid = digitize(&raster, 2, 2).unwrap();
        assert_eq!(grid.max_value(), 0);
    }

    #[test]
    fn luma_weights_applied() {
        // Pure green: gray = 0.72 * 255 = 183 (truncated), intensity 72.
        let raster = solid_raster(2, 2, [0, 255, 0]);
        let grid = digitize(&raster, 1, 1).unwrap();
        assert_eq!(grid.row(0)[0], 255 - 183);
    }

    #[test]
    fn resampling_picks_nearest_pixel() {
        // Left half black, right half white, downsampled to two columns.
        let mut data = Vec::new();
        for _y in 0..2 {
            for x in 0..4 {
                let v = if x < 2 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v]);
            }
        }
        let raster = Raster::new(4, 2, data).unwrap();
        let grid = digitize(&raster, 1, 2).unwrap();
        assert_eq!(grid.row(0)[0], 255);
        assert_eq!(grid.row(0)[1], 0);
    }

    #[test]
    fn zero_target_rejected() {
        let raster = solid_raster(2, 2, [0, 0, 0]);
        match digitize(&raster, 0, 3) {
            Err(RasterError::EmptyRaster) => {}
            other => panic!("expected EmptyRaster, got {other:?}"),
        }
    }

    #[test]
    fn upsampling_repeats_pixels() {
        let raster = solid_raster(1, 1, [0, 0, 0]);
        let grid = digitize(&raster, 3, 3).unwrap();
        assert!(grid.iter_rows().flatten().all(|&v| v == 255));
    }
}
