// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use juliabrot::config::JULIA_SEED;
use juliabrot::{FractalConfig, FractalRenderer};

fn mandelbrot(c: &mut Criterion) {
    let renderer = FractalRenderer::new(FractalConfig::mandelbrot(), 375, 300).unwrap();
    c.bench_function("mandelbrot 375x300", |b| b.iter(|| black_box(renderer.render())));
}

fn julia_threaded(c: &mut Criterion) {
    let threads = num_cpus::get();
    let renderer = FractalRenderer::new(FractalConfig::julia(JULIA_SEED), 375, 300).unwrap();
    c.bench_function("julia 375x300 threaded", move |b| {
        b.iter(|| black_box(renderer.render_threaded(threads)))
    });
}

criterion_group!(benches, mandelbrot, julia_threaded);
criterion_main!(benches);
