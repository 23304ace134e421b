use criterion::{Criterion, criterion_group, criterion_main};
use image_attendant::image::rescale_to_u8;
use image_attendant::{Range, SampleGrid, normalize_to_uint8, tiles};
use ndarray::{Array2, Array3};
use std::hint::black_box;

fn synthetic_u16(lines: usize, samples: usize) -> Array2<u16> {
    Array2::from_shape_fn((lines, samples), |(y, x)| ((y * 31 + x * 17) % 4096) as u16)
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Full min-max rescale of a 16-bit frame
fn bench_normalize_derived_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let grid = synthetic_u16(2048, 2048);

    group.bench_function("u16_2048_derived", |b| {
        b.iter(|| {
            let input = SampleGrid::from(grid.clone().into_dyn());
            normalize_to_uint8(black_box(input), None).unwrap()
        });
    });

    group.bench_function("u16_2048_explicit", |b| {
        b.iter(|| rescale_to_u8(black_box(&grid), Some(Range::new(0.0, 4095.0))).unwrap());
    });

    group.finish();
}

// ============================================================================
// TILING
// ============================================================================

/// Walk every tile of an RGB frame and touch its samples
fn bench_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiles");
    let grid = Array3::<u8>::from_elem((2048, 2048, 3), 7);

    group.bench_function("rgb_2048_by_256", |b| {
        b.iter(|| {
            tiles(black_box(&grid), 256)
                .unwrap()
                .map(|tile| tile.data.iter().map(|&v| u64::from(v)).sum::<u64>())
                .sum::<u64>()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_normalize_derived_range, bench_tiles);

criterion_main!(benches);
