//! Criterion benchmarks for the sprc compile pipeline
//!
//! Benchmarks the core operations:
//! - Packer: hires and multicolor byte packing
//! - Bounds: bounding box accumulation
//! - Compile: full sheet compilation
//! - Emit: C and assembly rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sprc::bounds::BoundingBoxAccumulator;
use sprc::compile::compile_sheet;
use sprc::emit::asm::Dialect;
use sprc::models::{SpriteFrame, SpriteSheet};
use sprc::packer::pack;

// =============================================================================
// Test Data Generators
// =============================================================================

/// A 24x21 frame with a deterministic speckle pattern.
fn make_frame(seed: usize, multicolor: bool) -> SpriteFrame {
    let max = if multicolor { 3 } else { 1 };
    let pixels = (0..21)
        .map(|row| {
            (0..24)
                .map(|col| {
                    if (row * 31 + col * 7 + seed) % 3 == 0 {
                        ((row + col + seed) % max + 1) as u8
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();
    SpriteFrame {
        pixels,
        multicolor,
        double_x: seed % 2 == 0,
        double_y: false,
    }
}

fn make_sheet(frames: usize, multicolor: bool) -> SpriteSheet {
    SpriteSheet {
        name: "bench".to_string(),
        frames: (0..frames).map(|i| make_frame(i, multicolor)).collect(),
    }
}

// =============================================================================
// Packer Benchmarks
// =============================================================================

fn bench_packer(c: &mut Criterion) {
    let mut group = c.benchmark_group("packer");

    let hires = make_frame(0, false);
    group.throughput(Throughput::Bytes(63));
    group.bench_function("pack_hires", |b| b.iter(|| pack(black_box(&hires))));

    let multicolor = make_frame(0, true);
    group.bench_function("pack_multicolor", |b| {
        b.iter(|| pack(black_box(&multicolor)))
    });

    group.finish();
}

// =============================================================================
// Bounds Benchmarks
// =============================================================================

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");

    let frame = make_frame(0, false);
    group.bench_function("observe_frame", |b| {
        b.iter(|| {
            let mut acc = BoundingBoxAccumulator::new();
            acc.observe_frame(black_box(&frame));
            acc.finish(false, false)
        })
    });

    group.finish();
}

// =============================================================================
// Compile Benchmarks
// =============================================================================

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for count in [1, 8, 64] {
        let sheet = make_sheet(count, false);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("compile_sheet", count), &sheet, |b, s| {
            b.iter(|| compile_sheet(black_box(s)))
        });
    }

    group.finish();
}

// =============================================================================
// Emit Benchmarks
// =============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");

    let compiled = compile_sheet(&make_sheet(8, false)).unwrap();
    group.bench_function("emit_c", |b| {
        b.iter(|| sprc::emit::c::emit(black_box(&compiled), "bench.h"))
    });
    group.bench_function("emit_gas", |b| {
        b.iter(|| sprc::emit::asm::emit(black_box(&compiled), Dialect::Gas))
    });
    group.bench_function("emit_ca65", |b| {
        b.iter(|| sprc::emit::asm::emit(black_box(&compiled), Dialect::Ca65))
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_packer, bench_bounds, bench_compile, bench_emit);

criterion_main!(benches);
