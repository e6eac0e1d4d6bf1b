//! End-to-end plan generation example.
//!
//! Demonstrates: build a grid → fit the compression factor → assemble a
//! field → write the control file to stdout.

use std::io::{self, Write};

use aperture_bench::reference_grid;
use aperture_dmlc::{DmlcWriter, MachineGeometry, PlanHeader};
use aperture_field::{fit, fit_field, FitConfig};

fn main() {
    let grid = reference_grid();
    let config = FitConfig::default();

    let outcome = fit(&grid, &config).unwrap();
    eprintln!(
        "fit: {} pairs, factor {:.1}, longest trajectory {} of {} control points",
        grid.rows(),
        outcome.factor,
        outcome.max_length,
        config.control_limit
    );

    let field = fit_field(&grid, &config).unwrap();
    let header = PlanHeader {
        last_name: "Example".to_string(),
        first_name: "Portrait".to_string(),
        patient_id: "0000".to_string(),
        number_of_fields: field.control_limit(),
        ..PlanHeader::default()
    };

    let stdout = io::stdout();
    let mut writer = DmlcWriter::new(stdout.lock(), &header, MachineGeometry::default()).unwrap();
    writer.write_field(&field).unwrap();
    writer.flush().unwrap();
    eprintln!("wrote {} control-point blocks", writer.points_written());
}
