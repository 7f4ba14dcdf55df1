#[macro_use]
extern crate criterion;
extern crate mandelbands;
extern crate num;

use criterion::{black_box, Criterion};
use num::Complex;

use mandelbands::escape::escape_time;
use mandelbands::grid::PixelGrid;
use mandelbands::viewport::Viewport;
use mandelbands::BandRenderer;

// c = 0.26 sits just outside the cardioid and burns almost the whole
// iteration budget before escaping, which is the per-pixel worst case
// the full-frame numbers are made of.
fn slow_point(c: &mut Criterion) {
    c.bench_function("escape_time near the cardioid", |b| {
        b.iter(|| escape_time(black_box(Complex::new(0.26, 0.0)), black_box(200)))
    });
}

fn small_frame(c: &mut Criterion) {
    c.bench_function("64x64 whole-set frame, 4 workers", |b| {
        let renderer = BandRenderer::new(Viewport::WHOLE_SET, 200);
        let mut grid = PixelGrid::new(64, 64);
        b.iter(|| renderer.render_parallel(&mut grid, black_box(4)))
    });
}

criterion_group!(benches, slow_point, small_frame);
criterion_main!(benches);
