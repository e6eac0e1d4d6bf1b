//! Streaming control-file writer.

use std::io::Write;

use aperture_field::Field;

use crate::error::EmitError;
use crate::geometry::MachineGeometry;
use crate::header::PlanHeader;

/// Streams a plan header and per-control-point leaf blocks to any
/// `Write` sink.
///
/// The header is written up front when the writer is constructed, so a
/// writer that exists has already committed its identity block.
/// [`write_field`](DmlcWriter::write_field) then emits one block per
/// control point, leading bank first.
///
/// Write to an in-memory `Vec<u8>` for tests or wrap a
/// `BufWriter<File>` for real output.
pub struct DmlcWriter<W: Write> {
    sink: W,
    geometry: MachineGeometry,
    declared_fields: usize,
    points_written: usize,
}

impl<W: Write> DmlcWriter<W> {
    /// Create a writer and emit the plan header immediately.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Io`] if the sink rejects the header.
    pub fn new(
        mut sink: W,
        header: &PlanHeader,
        geometry: MachineGeometry,
    ) -> Result<Self, EmitError> {
        for (key, value) in header.entries() {
            writeln!(sink, "{key} = {value}")?;
        }
        writeln!(sink)?;
        Ok(Self {
            sink,
            geometry,
            declared_fields: header.number_of_fields,
            points_written: 0,
        })
    }

    /// Emit every control point of an assembled field.
    ///
    /// Each block carries a 1-based `Field` counter, a beam fraction
    /// `Index` in `[0, 1]`, and one position line per leaf: the whole
    /// leading bank (`A`), then the whole trailing bank (`B`).
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::EmptyField`] for a field with no leaf
    /// pairs, [`EmitError::FieldCountMismatch`] if the field's
    /// control-point count disagrees with the header, and
    /// [`EmitError::Io`] on sink failure. Nothing past the header is
    /// written in the first two cases.
    pub fn write_field(&mut self, field: &Field) -> Result<(), EmitError> {
        if field.pair_count() == 0 {
            return Err(EmitError::EmptyField);
        }
        let count = field.control_limit();
        if count != self.declared_fields {
            return Err(EmitError::FieldCountMismatch {
                declared: self.declared_fields,
                found: count,
            });
        }
        for k in 0..count {
            let index = if count == 1 {
                0.0
            } else {
                k as f64 / (count - 1) as f64
            };
            writeln!(self.sink, "Field = {}", k + 1)?;
            writeln!(self.sink, "Index = {index:.4}")?;
            for (id, trajectory) in field.iter() {
                let point = trajectory.points()[k];
                let mm = self.geometry.bank_a_mm(point.leading);
                writeln!(self.sink, "Leaf {}A = {mm:.2}", id.0 + 1)?;
            }
            for (id, trajectory) in field.iter() {
                let point = trajectory.points()[k];
                let mm = self.geometry.bank_b_mm(point.trailing);
                writeln!(self.sink, "Leaf {}B = {mm:.2}", id.0 + 1)?;
            }
            writeln!(self.sink)?;
            self.points_written += 1;
        }
        Ok(())
    }

    /// Number of control-point blocks emitted so far.
    pub fn points_written(&self) -> usize {
        self.points_written
    }

    /// Flush the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Io`] if the flush fails.
    pub fn flush(&mut self) -> Result<(), EmitError> {
        self.sink.flush()?;
        Ok(())
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aperture_core::IntensityProfile;
    use aperture_field::assemble;
    use aperture_sequence::sequence_profile;
    use aperture_test_utils::triangle_profile;

    fn geometry() -> MachineGeometry {
        MachineGeometry {
            travel_distance_mm: 100.0,
            column_count: 10,
            bank_a_rest_mm: -50.0,
            bank_b_rest_mm: -50.0,
        }
    }

    fn emit(field: &Field, declared: usize) -> String {
        let header = PlanHeader {
            last_name: "Doe".to_string(),
            first_name: "Jo".to_string(),
            patient_id: "42".to_string(),
            number_of_fields: declared,
            ..PlanHeader::default()
        };
        let mut writer = DmlcWriter::new(Vec::new(), &header, geometry()).unwrap();
        writer.write_field(field).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn header_precedes_blocks() {
        let pairs = vec![sequence_profile(&IntensityProfile::new(vec![0, 0, 0]))];
        let field = assemble(pairs, 1).unwrap();
        let text = emit(&field, 1);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "File Rev = G");
        assert_eq!(lines[1], "Treatment = Dynamic Dose");
        assert_eq!(lines[2], "Last Name = Doe");
        assert_eq!(lines[5], "Number of Fields = 1");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Field = 1");
    }

    #[test]
    fn static_pair_emits_single_rest_block() {
        let pairs = vec![sequence_profile(&IntensityProfile::new(vec![0, 0]))];
        let field = assemble(pairs, 1).unwrap();
        let text = emit(&field, 1);
        assert!(text.contains("Field = 1\n"));
        assert!(text.contains("Index = 0.0000\n"));
        assert!(text.contains("Leaf 1A = -50.00\n"));
        assert!(text.contains("Leaf 1B = -50.00\n"));
        assert!(!text.contains("Field = 2\n"));
    }

    #[test]
    fn index_spans_zero_to_one() {
        let trajectory = sequence_profile(&triangle_profile());
        let count = trajectory.len();
        let field = assemble(vec![trajectory], count).unwrap();
        let text = emit(&field, count);
        assert!(text.contains("Index = 0.0000\n"));
        assert!(text.contains("Index = 1.0000\n"));
        let blocks = text.matches("Field = ").count();
        assert_eq!(blocks, count);
    }

    #[test]
    fn columns_map_through_geometry() {
        // Triangle schedules put the leading leaf at column 2 and the
        // trailing leaf at column 1; with a 10 mm step those are
        // -30.00 and -40.00.
        let trajectory = sequence_profile(&triangle_profile());
        let count = trajectory.len();
        let field = assemble(vec![trajectory], count).unwrap();
        let text = emit(&field, count);
        assert!(text.contains("Leaf 1A = -30.00\n"));
        assert!(text.contains("Leaf 1B = -40.00\n"));
    }

    #[test]
    fn two_pairs_interleave_banks_per_block() {
        let pairs = vec![
            sequence_profile(&triangle_profile()),
            sequence_profile(&IntensityProfile::new(vec![0, 0, 0])),
        ];
        let field = assemble(pairs, 8).unwrap();
        let text = emit(&field, 8);
        let first_block: Vec<_> = text
            .lines()
            .skip_while(|l| *l != "Field = 1")
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(
            first_block,
            [
                "Field = 1",
                "Index = 0.0000",
                "Leaf 1A = -30.00",
                "Leaf 2A = -50.00",
                "Leaf 1B = -40.00",
                "Leaf 2B = -50.00",
            ]
        );
    }

    #[test]
    fn declared_count_must_match() {
        let pairs = vec![sequence_profile(&triangle_profile())];
        let field = assemble(pairs, 6).unwrap();
        let header = PlanHeader {
            number_of_fields: 3,
            ..PlanHeader::default()
        };
        let mut writer = DmlcWriter::new(Vec::new(), &header, geometry()).unwrap();
        match writer.write_field(&field) {
            Err(EmitError::FieldCountMismatch {
                declared: 3,
                found,
            }) => assert_eq!(found, 6),
            other => panic!("expected FieldCountMismatch, got {other:?}"),
        }
        // Nothing past the header landed in the sink.
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(!text.contains("Field = "));
    }

    #[test]
    fn empty_field_rejected() {
        let field = assemble(Vec::new(), 499).unwrap();
        let header = PlanHeader::default();
        let mut writer = DmlcWriter::new(Vec::new(), &header, geometry()).unwrap();
        match writer.write_field(&field) {
            Err(EmitError::EmptyField) => {}
            other => panic!("expected EmptyField, got {other:?}"),
        }
    }
}
