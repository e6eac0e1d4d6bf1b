//! Criterion benchmarks for control-file emission.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aperture_bench::{reference_fit_config, reference_grid};
use aperture_dmlc::{DmlcWriter, MachineGeometry, PlanHeader};
use aperture_field::fit_field;

fn bench_write_reference_plan(c: &mut Criterion) {
    let grid = reference_grid();
    let config = reference_fit_config();
    let field = fit_field(&grid, &config).unwrap();
    let header = PlanHeader {
        number_of_fields: field.control_limit(),
        ..PlanHeader::default()
    };

    c.bench_function("write_reference_plan", |b| {
        b.iter(|| {
            let mut writer =
                DmlcWriter::new(Vec::new(), &header, MachineGeometry::default()).unwrap();
            writer.write_field(black_box(&field)).unwrap();
            black_box(writer.into_inner());
        });
    });
}

fn bench_header_only(c: &mut Criterion) {
    let header = PlanHeader {
        last_name: "Benchmark".to_string(),
        number_of_fields: 499,
        ..PlanHeader::default()
    };

    c.bench_function("write_plan_header", |b| {
        b.iter(|| {
            let writer =
                DmlcWriter::new(Vec::new(), black_box(&header), MachineGeometry::default())
                    .unwrap();
            black_box(writer.into_inner());
        });
    });
}

criterion_group!(benches, bench_write_reference_plan, bench_header_only);
criterion_main!(benches);
