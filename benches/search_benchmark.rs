use affine_offset::dataset::FORWARD_MATRIX;
use affine_offset::decrypt::{decrypt_bounded, GridBounds};
use affine_offset::search::{
    find_offset_parallel, find_offset_sequential, known_pairs, SearchConfig,
};
use affine_offset::Vector3;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Samples for "HTB" whose only consistent offsets lie far into the cube, so
/// both searches scan most of it
fn samples() -> Vec<Vector3> {
    let offset = Vector3::new(35.0, 35.0, 35.0);
    [('H', 5.0, 9.0), ('T', 17.0, 3.0), ('B', 60.0, 42.0)]
        .iter()
        .map(|&(c, a, b)| {
            let v = FORWARD_MATRIX * Vector3::new(c as u32 as f64, a, b);
            Vector3::new(v.x + offset.x, v.y + offset.y, v.z + offset.z)
        })
        .collect()
}

fn bench_offset_search(c: &mut Criterion) {
    let inverse = FORWARD_MATRIX.invert().unwrap();
    let samples = samples();
    let pairs = known_pairs(&samples, &['H', 'T', 'B']).unwrap();
    let mut group = c.benchmark_group("offset_search");
    group.sample_size(10);

    group.bench_function("sequential", |b| {
        let config = SearchConfig::new(40, 1);
        b.iter(|| find_offset_sequential(black_box(&inverse), black_box(&pairs), &config))
    });

    for workers in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("parallel", workers),
            &workers,
            |b, &workers| {
                let config = SearchConfig::new(40, workers);
                b.iter(|| find_offset_parallel(black_box(&inverse), black_box(&pairs), &config))
            },
        );
    }
    group.finish();
}

fn bench_bounded_decrypt(c: &mut Criterion) {
    let inverse = FORWARD_MATRIX.invert().unwrap();
    let sample = Vector3::new(-981.0, 1395.0, -1668.0);
    c.bench_function("decrypt_bounded_full_grid", |b| {
        b.iter(|| {
            decrypt_bounded(
                black_box(sample),
                &inverse,
                Vector3::ZERO,
                GridBounds::default(),
            )
        })
    });
}

criterion_group!(benches, bench_offset_search, bench_bounded_decrypt);
criterion_main!(benches);
