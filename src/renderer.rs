// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the escape-time kernel over every pixel of a raster and
//! paints the result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use itertools::iproduct;
use log::{debug, info, warn};

use crate::color::Color;
use crate::config::FractalConfig;
use crate::error::{FractalError, Result};
use crate::planes::{Pixel, PlaneMapper};
use crate::raster::PixelRaster;

/// A validated configuration bound to a raster size.  Once built, it
/// can render as often as you like, always with the same result.
#[derive(Debug, Clone)]
pub struct FractalRenderer {
    config: FractalConfig,
    plane: PlaneMapper,
}

impl FractalRenderer {
    /// Validate the configuration and the raster size.  Nothing is
    /// computed if either is bad.
    pub fn new(config: FractalConfig, width: usize, height: usize) -> Result<Self> {
        config.validate()?;
        let plane = PlaneMapper::new(width, height, config.leftlower, config.rightupper)?;
        debug!(
            "{:?} over {:?}..{:?}, {}x{} pixels, precision {}",
            config.family,
            config.leftlower,
            config.rightupper,
            width,
            height,
            plane.precision()
        );
        Ok(FractalRenderer { config, plane })
    }

    /// The configuration this renderer was built from.
    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    /// The pixel to complex-plane mapping.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Escape count for one pixel; `max_iterations` means the point
    /// stayed inside.
    #[inline]
    pub fn escape_count(&self, pixel: &Pixel) -> usize {
        let point = self.plane.pixel_to_point(pixel);
        self.config
            .family
            .escape_time(point, self.config.max_iterations)
    }

    /// Map an escape count to its color.
    #[inline]
    pub fn color_for(&self, escape: usize) -> Color {
        if escape >= self.config.max_iterations {
            return self.config.convergence_color;
        }
        let t = (escape as f64) / (self.config.max_iterations as f64);
        self.config.color_schema.shade(t)
    }

    /// The color one pixel ends up with.
    pub fn color_at(&self, pixel: &Pixel) -> Color {
        self.color_for(self.escape_count(pixel))
    }

    fn render_row(&self, row: usize, cells: &mut [Color]) {
        for (column, cell) in cells.iter_mut().enumerate() {
            *cell = self.color_at(&Pixel(column, row));
        }
    }

    /// Single-threaded render, one pixel after another.
    pub fn render(&self) -> PixelRaster {
        let start = Instant::now();
        let (width, height) = (self.plane.width(), self.plane.height());
        let pixels: Vec<Color> = iproduct!(0..height, 0..width)
            .map(|(row, column)| self.color_at(&Pixel(column, row)))
            .collect();
        info!("Rendered {}x{} in {:?}", width, height, start.elapsed());
        PixelRaster::from_pixels(width, height, pixels)
    }

    /// Render with `threads` workers, each owning a contiguous band of
    /// rows.  The result is identical to `render`.
    pub fn render_threaded(&self, threads: usize) -> PixelRaster {
        let start = Instant::now();
        let raster = self.render_bands(threads, &AtomicBool::new(false));
        info!(
            "Rendered {}x{} on {} threads in {:?}",
            raster.width(),
            raster.height(),
            threads,
            start.elapsed()
        );
        raster
    }

    /// A threaded render that gives up once `cancel` is raised.  A
    /// cancelled pass returns `FractalError::Cancelled` and its partial
    /// output is dropped; it never reaches the caller.
    pub fn render_cancellable(&self, threads: usize, cancel: &AtomicBool) -> Result<PixelRaster> {
        let start = Instant::now();
        let raster = self.render_bands(threads, cancel);
        if cancel.load(Ordering::Relaxed) {
            warn!("Render cancelled after {:?}; discarding output", start.elapsed());
            return Err(FractalError::Cancelled);
        }
        info!("Rendered {}x{} in {:?}", raster.width(), raster.height(), start.elapsed());
        Ok(raster)
    }

    // Workers write disjoint row bands of one allocation, so no
    // locking is needed.  Rows left unvisited after a cancel keep the
    // convergence color.
    fn render_bands(&self, threads: usize, cancel: &AtomicBool) -> PixelRaster {
        let (width, height) = (self.plane.width(), self.plane.height());
        let threads = threads.max(1).min(height);
        let band = (height + threads - 1) / threads;
        debug!("Rendering with {} threads, {} rows each", threads, band);

        let mut pixels = vec![self.config.convergence_color; width * height];
        let outcome = crossbeam::scope(|spawner| {
            for (index, rows) in pixels.chunks_mut(band * width).enumerate() {
                spawner.spawn(move |_| {
                    for (offset, cells) in rows.chunks_mut(width).enumerate() {
                        if cancel.load(Ordering::Relaxed) {
                            return;
                        }
                        self.render_row(index * band + offset, cells);
                    }
                });
            }
        });
        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
        PixelRaster::from_pixels(width, height, pixels)
    }
}

/// Validate `config`, then render it single-threaded into a fresh
/// `width` by `height` raster.
pub fn render(config: FractalConfig, width: usize, height: usize) -> Result<PixelRaster> {
    Ok(FractalRenderer::new(config, width, height)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSchema;
    use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, JULIA_SEED};
    use num::Complex;

    fn overview() -> FractalRenderer {
        FractalRenderer::new(FractalConfig::mandelbrot(), DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap()
    }

    #[test]
    fn bad_configurations_fail_up_front() {
        let inverted = FractalConfig::mandelbrot()
            .with_bounds(Complex::new(1.0, 1.0), Complex::new(-2.0, -1.0));
        assert!(FractalRenderer::new(inverted, 10, 10).is_err());
        let no_budget = FractalConfig::mandelbrot().with_max_iterations(0);
        assert_eq!(
            render(no_budget, 10, 10).unwrap_err(),
            FractalError::InvalidIterations(0)
        );
        assert_eq!(
            render(FractalConfig::mandelbrot(), 0, 10).unwrap_err(),
            FractalError::EmptyRaster {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn cardioid_interior_gets_the_convergence_color() {
        let renderer = overview();
        // -2 + 250 * 0.004 = -1, -1 + 250 * 0.004 = 0
        let pixel = Pixel(250, 250);
        let point = renderer.plane().pixel_to_point(&pixel);
        assert!((point - Complex::new(-1.0, 0.0)).norm() < 1e-9);
        assert_eq!(renderer.escape_count(&pixel), 50);
        assert_eq!(renderer.color_at(&pixel), Color::WHITE);
    }

    #[test]
    fn far_corner_escapes_quickly() {
        let renderer = overview();
        // The last column sits one step short of re = 1.
        let pixel = Pixel(749, 500);
        let point = renderer.plane().pixel_to_point(&pixel);
        assert!((point - Complex::new(1.0, 1.0)).norm() < 0.005);
        assert!(renderer.escape_count(&pixel) <= 2);
        assert_ne!(renderer.color_at(&pixel), Color::WHITE);
    }

    #[test]
    fn escape_zero_in_blue_is_black() {
        let config = FractalConfig::mandelbrot().with_color_schema(ColorSchema::Blue);
        let renderer = FractalRenderer::new(config, 10, 10).unwrap();
        assert_eq!(renderer.color_for(0), Color::BLACK);
    }

    #[test]
    fn escaped_points_use_the_schema() {
        let renderer = overview();
        // t = 0.5: c1 = 255, c2 = 0, red schema.
        assert_eq!(renderer.color_for(25), Color::RED);
        assert_eq!(renderer.color_for(50), Color::WHITE);
    }

    #[test]
    fn every_cell_is_painted() {
        let config = FractalConfig::mandelbrot().with_convergence_color(Color::MAGENTA);
        let renderer = FractalRenderer::new(config, 30, 20).unwrap();
        let raster = renderer.render();
        assert_eq!((raster.width(), raster.height()), (30, 20));
        assert_eq!(raster.len(), 600);
        for (row, column) in iproduct!(0..20, 0..30) {
            let pixel = Pixel(column, row);
            assert_eq!(raster.get(pixel), Some(renderer.color_at(&pixel)));
        }
    }

    #[test]
    fn renders_are_repeatable() {
        let config = FractalConfig::julia(JULIA_SEED).with_color_schema(ColorSchema::Cyan);
        let first = render(config, 75, 60).unwrap();
        let second = render(config, 75, 60).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn threaded_matches_sequential() {
        let renderer = FractalRenderer::new(FractalConfig::mandelbrot(), 75, 61).unwrap();
        let sequential = renderer.render();
        for threads in &[1, 2, 3, 8, 200] {
            assert_eq!(renderer.render_threaded(*threads), sequential);
        }
        assert_eq!(renderer.render_threaded(0), sequential);
    }

    #[test]
    fn cancelled_renders_return_nothing() {
        let renderer = FractalRenderer::new(FractalConfig::mandelbrot(), 75, 60).unwrap();
        let cancel = AtomicBool::new(true);
        assert_eq!(
            renderer.render_cancellable(4, &cancel),
            Err(FractalError::Cancelled)
        );
    }

    #[test]
    fn cancelling_mid_render_discards_the_pass() {
        // Nearly every point here is inside the set, so each row costs
        // a full iteration budget per pixel and the pass runs for ages.
        let config = FractalConfig::mandelbrot()
            .with_bounds(Complex::new(-0.4, -0.2), Complex::new(0.1, 0.2))
            .with_max_iterations(1_000_000);
        let renderer = FractalRenderer::new(config, 200, 800).unwrap();
        let cancel = AtomicBool::new(false);
        let start = Instant::now();

        let outcome = crossbeam::scope(|spawner| {
            spawner.spawn(|_| {
                std::thread::sleep(std::time::Duration::from_millis(50));
                cancel.store(true, Ordering::Relaxed);
            });
            renderer.render_cancellable(4, &cancel)
        })
        .unwrap();

        assert_eq!(outcome, Err(FractalError::Cancelled));
        assert!(start.elapsed() < std::time::Duration::from_secs(60));
    }

    #[test]
    fn julia_and_mandelbrot_differ() {
        let mandelbrot = render(
            FractalConfig::mandelbrot().with_bounds(Complex::new(-1.5, -1.5), Complex::new(1.5, 1.5)),
            40,
            40,
        )
        .unwrap();
        let julia = render(FractalConfig::julia(JULIA_SEED), 40, 40).unwrap();
        assert_ne!(mandelbrot, julia);
    }

    #[test]
    fn julia_at_origin_uses_the_seed_as_constant() {
        // Frame both planes so that pixel 0,0 is the point of interest.
        let seed = Complex::new(0.3, -0.5);
        let julia = FractalConfig::julia(seed)
            .with_bounds(Complex::new(0.0, 0.0), Complex::new(1.0, 1.0));
        let mandelbrot = FractalConfig::mandelbrot()
            .with_bounds(Complex::new(0.3, -0.5), Complex::new(1.3, 0.5));
        let julia = FractalRenderer::new(julia, 10, 10).unwrap();
        let mandelbrot = FractalRenderer::new(mandelbrot, 10, 10).unwrap();
        assert_eq!(
            julia.escape_count(&Pixel(0, 0)),
            mandelbrot.escape_count(&Pixel(0, 0))
        );
    }
}
