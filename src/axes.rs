// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A coordinate-axis overlay.  It is worked out from the same plane
//! mapping the renderer uses, and painted over a finished raster; it
//! never feeds back into the escape-time computation.

use num::Complex;

use crate::color::Color;
use crate::planes::{Pixel, PlaneMapper};
use crate::raster::PixelRaster;

/// Half the length of a unit tick, in pixels.
pub const TICK_REACH: usize = 10;

/// Where the axes fall on a raster.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisOverlay {
    /// Column of the imaginary axis (re = 0), if it is on screen.
    pub imaginary_axis: Option<usize>,
    /// Row of the real axis (im = 0), if it is on screen.
    pub real_axis: Option<usize>,
    /// Columns of the unit marks at re = -1 and re = 1 that are on screen.
    pub ticks: Vec<usize>,
    width: usize,
    height: usize,
}

impl AxisOverlay {
    /// Locate the axes for a plane mapping.
    pub fn new(plane: &PlaneMapper) -> Self {
        let row_of = |point: Complex<f64>| plane.point_to_pixel(&point).map(|p| p.1);
        let column_of = |point: Complex<f64>| plane.point_to_pixel(&point).map(|p| p.0);

        // Probe the axes at a point known to be inside the raster, so
        // that an axis off one edge doesn't hide the other.
        let inside = plane.pixel_to_point(&Pixel(0, 0));
        let imaginary_axis = column_of(Complex::new(0.0, inside.im));
        let real_axis = row_of(Complex::new(inside.re, 0.0));

        let ticks = [-1.0, 1.0]
            .iter()
            .filter_map(|re| column_of(Complex::new(*re, inside.im)))
            .collect();

        AxisOverlay {
            imaginary_axis,
            real_axis,
            ticks,
            width: plane.width(),
            height: plane.height(),
        }
    }

    /// Paint the overlay onto `raster` in `color`.  Ticks straddle the
    /// real axis, or the middle row when the real axis is off screen.
    pub fn draw(&self, raster: &mut PixelRaster, color: Color) {
        if let Some(column) = self.imaginary_axis {
            for row in 0..self.height {
                raster.set(Pixel(column, row), color);
            }
        }
        if let Some(row) = self.real_axis {
            for column in 0..self.width {
                raster.set(Pixel(column, row), color);
            }
        }
        let center = self.real_axis.unwrap_or(self.height / 2);
        let top = center.saturating_sub(TICK_REACH);
        for column in &self.ticks {
            for row in top..=center + TICK_REACH {
                raster.set(Pixel(*column, row), color);
            }
        }
    }
}
