//! Mapping from grid columns to physical leaf positions.

/// Physical description of the leaf banks.
///
/// Trajectories are column-indexed; the control file wants millimetres.
/// The geometry maps a column index onto a position along the leaf
/// travel axis, offset per bank so that column 0 places both leaves at
/// their rest positions.
#[derive(Clone, Debug, PartialEq)]
pub struct MachineGeometry {
    /// Usable leaf travel spanned by the grid, in millimetres.
    pub travel_distance_mm: f64,
    /// Number of grid columns the travel is divided into.
    pub column_count: u32,
    /// Rest position of the leading bank (bank A), in millimetres.
    pub bank_a_rest_mm: f64,
    /// Rest position of the trailing bank (bank B), in millimetres.
    pub bank_b_rest_mm: f64,
}

impl MachineGeometry {
    /// Travel per grid column, in millimetres.
    pub fn step_mm(&self) -> f64 {
        self.travel_distance_mm / f64::from(self.column_count)
    }

    /// Physical position of a leading (bank A) leaf at `column`.
    pub fn bank_a_mm(&self, column: u32) -> f64 {
        self.bank_a_rest_mm + f64::from(column) * self.step_mm()
    }

    /// Physical position of a trailing (bank B) leaf at `column`.
    pub fn bank_b_mm(&self, column: u32) -> f64 {
        self.bank_b_rest_mm + f64::from(column) * self.step_mm()
    }
}

impl Default for MachineGeometry {
    fn default() -> Self {
        Self {
            travel_distance_mm: 140.0,
            column_count: 56,
            bank_a_rest_mm: -70.0,
            bank_b_rest_mm: -70.0,
        }
    }
}
