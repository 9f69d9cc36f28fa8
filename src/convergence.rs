// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  Both the Mandelbrot and the Julia sets
//! come from iterating z <- z^2 + c; the only difference between them
//! is which of `z` and `c` varies from pixel to pixel.

use num::Complex;

/// Squared magnitude at which an orbit is considered gone.  This is
/// a bailout radius of 2.
pub const BAILOUT: f64 = 4.0;

/// Iterate z <- z^2 + c from `start`, and report the iteration at
/// which |z|^2 first reaches the bailout.  If the orbit is still
/// inside after `max_iterations` steps the point is treated as part
/// of the set, and `max_iterations` itself comes back.
///
/// The function is pure: every call is independent, so pixels may be
/// evaluated on as many threads as you like.
#[inline]
pub fn escape_time(c: Complex<f64>, start: Complex<f64>, max_iterations: usize) -> usize {
    let (mut re, mut im) = (start.re, start.im);
    for i in 0..max_iterations {
        let next_im = 2.0 * re * im;
        let next_re = re * re - im * im;
        re = next_re + c.re;
        im = next_im + c.im;
        if re * re + im * im >= BAILOUT {
            return i;
        }
    }
    max_iterations
}

/// Which member of the quadratic family we're drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Family {
    /// The pixel is the added constant; every orbit starts at the origin.
    Mandelbrot,
    /// The seed is the added constant; every orbit starts at the pixel.
    Julia {
        /// The fixed constant added at every iteration.
        seed: Complex<f64>,
    },
}

impl Family {
    /// Assign a point on the plane its role, returning `(c, start)`.
    #[inline]
    pub fn roles(&self, point: Complex<f64>) -> (Complex<f64>, Complex<f64>) {
        match *self {
            Family::Mandelbrot => (point, Complex::new(0.0, 0.0)),
            Family::Julia { seed } => (seed, point),
        }
    }

    /// Escape time for a single point on the plane.
    #[inline]
    pub fn escape_time(&self, point: Complex<f64>, max_iterations: usize) -> usize {
        let (c, start) = self.roles(point);
        escape_time(c, start, max_iterations)
    }
}
