// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners.
//!
//! Unlike a naive mapper, both axes advance by the same step per
//! pixel, so circles stay circular.  The step is the larger of the two
//! per-axis steps, which means the requested rectangle is always
//! covered along one axis and may be overshot along the other.
use num::Complex;

use crate::error::{FractalError, Result};

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column, row of a pixel in the raster.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps points from one to the other.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the requested complex plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // Distance along either axis of the complex plane covered by one pixel.
    precision: f64,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the complex plane.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper> {
        if width == 0 || height == 0 {
            return Err(FractalError::EmptyRaster { width, height });
        }

        // Written this way round so that NaN corners are rejected too.
        if !(rightupper.re > leftlower.re) || !(rightupper.im > leftlower.im) {
            return Err(FractalError::InvalidBounds {
                re_min: leftlower.re,
                re_max: rightupper.re,
                im_min: leftlower.im,
                im_max: rightupper.im,
            });
        }

        let precision = f64::max(
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            precision,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Always false; the constructor refuses empty planes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The complex distance covered by one pixel, on both axes.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// The rectangle the raster actually shows.  It shares its
    /// left-lower corner with the requested one.
    pub fn covered(&self) -> ComplexPlane {
        let origin = self.complex_plane.0;
        ComplexPlane(
            origin,
            Complex::new(
                origin.re + (self.integral_plane.0 as f64) * self.precision,
                origin.im + (self.integral_plane.1 as f64) * self.precision,
            ),
        )
    }

    /// Given a pixel on the integral cartesian plane, map it to its
    /// point on the complex cartesian plane.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + (pixel.0 as f64) * self.precision,
            self.complex_plane.0.im + (pixel.1 as f64) * self.precision,
        )
    }

    /// Given a complex number, find the nearest pixel on the integral
    /// plane, or None if that pixel falls outside the raster.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = ((point.re - self.complex_plane.0.re) / self.precision).round();
        let top = ((point.im - self.complex_plane.0.im) / self.precision).round();
        if left < 0.0
            || top < 0.0
            || left >= (self.integral_plane.0 as f64)
            || top >= (self.integral_plane.1 as f64)
        {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Complex::new(1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Complex::new(std::f64::NAN, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_empty_raster() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert_eq!(
            pm.unwrap_err(),
            FractalError::EmptyRaster {
                width: 0,
                height: 4
            }
        );
        assert!(PlaneMapper::new(4, 0, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
        assert_eq!(pm.unwrap().len(), 16);
    }

    #[test]
    fn precision_uses_the_larger_step() {
        // 3/750 = 0.004 wins over 2/600 = 0.00333...
        let pm =
            PlaneMapper::new(750, 600, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        assert_eq!(pm.precision(), 3.0 / 750.0);
        let covered = pm.covered();
        assert!((covered.1.re - 1.0).abs() < 1e-12);
        assert!((covered.1.im - 1.4).abs() < 1e-12);
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_points_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn non_square_planes_share_one_step() {
        // Twice as wide as tall in pixels, square in the plane: the
        // vertical step wins and the right half overshoots.
        let pm = PlaneMapper::new(8, 4, Complex::new(0.0, 0.0), Complex::new(4.0, 4.0)).unwrap();
        assert_eq!(pm.precision(), 1.0);
        assert_eq!(pm.pixel_to_point(&Pixel(7, 3)), Complex::new(7.0, 3.0));
    }

    #[test]
    fn point_to_pixel_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, 0.0)), Some(Pixel(2, 2)));
        assert_eq!(pm.point_to_pixel(&Complex::new(-2.0, -2.0)), Some(Pixel(0, 0)));
        assert_eq!(pm.point_to_pixel(&Complex::new(2.0, 2.0)), None);
        assert_eq!(pm.point_to_pixel(&Complex::new(-3.0, 0.0)), None);
    }

    #[test]
    fn point_to_pixel_inverts_pixel_to_point() {
        let pm =
            PlaneMapper::new(750, 600, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        for pixel in &[Pixel(0, 0), Pixel(250, 250), Pixel(749, 599), Pixel(13, 400)] {
            assert_eq!(pm.point_to_pixel(&pm.pixel_to_point(pixel)), Some(*pixel));
        }
    }
}
