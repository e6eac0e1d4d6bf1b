//! Plan-level header of the control file.

use indexmap::IndexMap;

/// Identity block written once at the top of a control file.
///
/// The device parses the header as ordered `key = value` lines, so
/// [`PlanHeader::entries`] returns an [`IndexMap`] preserving the
/// order the format requires.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanHeader {
    /// Patient last name.
    pub last_name: String,
    /// Patient first name.
    pub first_name: String,
    /// Patient identifier.
    pub patient_id: String,
    /// Number of control points the file will contain.
    pub number_of_fields: usize,
    /// Collimator model string.
    pub model: String,
    /// Leaf position tolerance, in millimetres.
    pub tolerance_mm: f64,
}

impl PlanHeader {
    /// Header lines in file order.
    pub fn entries(&self) -> IndexMap<&'static str, String> {
        let mut map = IndexMap::new();
        map.insert("File Rev", "G".to_string());
        map.insert("Treatment", "Dynamic Dose".to_string());
        map.insert("Last Name", self.last_name.clone());
        map.insert("First Name", self.first_name.clone());
        map.insert("Patient ID", self.patient_id.clone());
        map.insert("Number of Fields", self.number_of_fields.to_string());
        map.insert("Model", self.model.clone());
        map.insert("Tolerance", format!("{:.2}", self.tolerance_mm));
        map
    }
}

impl Default for PlanHeader {
    fn default() -> Self {
        Self {
            last_name: String::new(),
            first_name: String::new(),
            patient_id: String::new(),
            number_of_fields: 0,
            model: "Varian 80".to_string(),
            tolerance_mm: 0.5,
        }
    }
}
