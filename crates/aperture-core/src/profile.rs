//! Intensity profiles and grids.
//!
//! An [`IntensityProfile`] is one leaf pair's worth of target intensity:
//! an ordered sequence of non-negative integers, one per leaf-travel
//! column. An [`IntensityGrid`] stacks one profile per pair in row-major
//! order, the shape an external digitizer produces.

use crate::error::ConfigError;

/// Full-scale raw intensity. Digitized grids are 8-bit, so compression
/// factors are expressed relative to this value: a factor of 255 scales
/// by exactly 1.
pub const FULL_SCALE: u32 = 255;

/// Target intensity for one leaf pair, one value per leaf-travel column.
///
/// Values are cumulative open-time targets in integer MU. The sequencer
/// treats the profile as implicitly padded with a leading and trailing
/// zero: the field starts and ends fully closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityProfile {
    values: Vec<u32>,
}

impl IntensityProfile {
    /// Wrap a sequence of column intensities.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Number of leaf-travel columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the profile has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The column intensities.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Returns `true` if every column is zero (a static pair: the leaves
    /// never open).
    pub fn is_flat(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }

    /// Scale every column by `factor / 255`, rounding to the nearest
    /// integer MU.
    ///
    /// This is the compression-factor application: the fitter trades
    /// dose-rate resolution against the device's control-point budget by
    /// varying `factor`.
    pub fn scaled(&self, factor: f64) -> IntensityProfile {
        IntensityProfile {
            values: self.values.iter().map(|&v| scale_value(v, factor)).collect(),
        }
    }
}

impl From<Vec<u32>> for IntensityProfile {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<u32> for IntensityProfile {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn scale_value(value: u32, factor: f64) -> u32 {
    (value as f64 * factor / FULL_SCALE as f64).round() as u32
}

/// A rectangular intensity map: one row per leaf pair, one column per
/// leaf-position sample, stored flat in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityGrid {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl IntensityGrid {
    /// Build a grid from per-pair rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] if there are no rows or no
    /// columns, and [`ConfigError::RaggedGrid`] if any row's length
    /// differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, ConfigError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ConfigError::RaggedGrid {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build a grid from flat row-major storage.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] for zero rows or columns, and
    /// [`ConfigError::RaggedGrid`] if `data.len() != rows * cols`.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<u32>) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if data.len() != rows * cols {
            return Err(ConfigError::RaggedGrid {
                row: data.len() / cols.max(1),
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of leaf pairs (rows).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of leaf-travel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One pair's row of column intensities.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over rows in pair order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks_exact(self.cols)
    }

    /// One pair's row as an owned [`IntensityProfile`].
    pub fn profile(&self, row: usize) -> IntensityProfile {
        IntensityProfile::new(self.row(row).to_vec())
    }

    /// Largest intensity anywhere in the grid. Zero means every pair is
    /// static.
    pub fn max_value(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Scale every cell by `factor / 255`, rounding to integer MU.
    pub fn scaled(&self, factor: f64) -> IntensityGrid {
        IntensityGrid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| scale_value(v, factor)).collect(),
        }
    }
}
