//! Benchmarks for the yield estimator and form parsing.

use agriyield::{estimate, Crop, CropSelection, PredictionReport, SoilForm};
use agriyield::selection::CropForm;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let sample = SoilForm::sample().parse().unwrap();

    for crop in Crop::ALL.iter() {
        let selection = CropSelection::new(*crop, "Pune, Maharashtra");
        group.bench_with_input(BenchmarkId::from_parameter(crop), crop, |b, _| {
            b.iter(|| estimate(black_box(&selection), black_box(&sample)));
        });
    }

    group.finish();
}

fn bench_report_from_forms(c: &mut Criterion) {
    let crop_form = CropForm {
        crop: "wheat".to_string(),
        location: "Pune, Maharashtra".to_string(),
    };
    let soil_form = SoilForm::sample();

    c.bench_function("report_from_forms", |b| {
        b.iter(|| PredictionReport::from_forms(black_box(&crop_form), black_box(&soil_form)).unwrap());
    });
}

criterion_group!(benches, bench_estimate, bench_report_from_forms);
criterion_main!(benches);
