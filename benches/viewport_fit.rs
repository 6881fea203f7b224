// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the detail screen's hot paths.
//!
//! Measures the performance of:
//! - Fit computation and layout at each zoom step
//! - Decoding a downloaded PNG into a thumbnail

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::domain::fit::{Extent, ViewportFit};
use iced_gallery::media::{decode, DecodeTarget};
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use std::hint::black_box;
use std::io::Cursor;

fn fit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_fit");
    let image = Extent::new(4000.0, 3000.0);
    let viewport = Extent::new(1280.0, 720.0);

    group.bench_function("compute", |b| {
        b.iter(|| ViewportFit::compute(black_box(image), black_box(viewport)))
    });

    let Ok(fit) = ViewportFit::compute(image, viewport) else {
        return;
    };
    group.bench_function("layout_zoom_sweep", |b| {
        b.iter(|| {
            (1..=10)
                .map(|factor| fit.layout(black_box(fit.scale * factor as f32)))
                .fold(0.0, |acc, layout| acc + layout.offset_x + layout.offset_y)
        })
    });

    group.finish();
}

fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let image = ImageBuffer::from_pixel(1024, 768, Rgba([90u8, 120, 200, 255]));
    let mut bytes = Vec::new();
    if image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .is_err()
    {
        return;
    }

    group.bench_function("png_thumbnail", |b| {
        b.iter(|| decode(black_box(&bytes), DecodeTarget::Thumbnail(96)))
    });

    group.finish();
}

criterion_group!(benches, fit_benchmark, decode_benchmark);
criterion_main!(benches);
