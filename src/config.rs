// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parameters of a single render pass.  A FractalConfig is a
//! plain value: to change anything, build a new one.  A render in
//! flight never sees an edit.

use num::Complex;

use crate::color::{Color, ColorSchema};
use crate::convergence::Family;
use crate::error::{FractalError, Result};

/// Raster width used by the interactive tool.
pub const DEFAULT_WIDTH: usize = 750;
/// Raster height used by the interactive tool.
pub const DEFAULT_HEIGHT: usize = 600;
/// Iteration budget used by the interactive tool.
pub const DEFAULT_ITERATIONS: usize = 50;

/// Left-lower corner of the Mandelbrot view.
pub const MANDELBROT_LEFTLOWER: Complex<f64> = Complex { re: -2.0, im: -1.0 };
/// Right-upper corner of the Mandelbrot view.
pub const MANDELBROT_RIGHTUPPER: Complex<f64> = Complex { re: 1.0, im: 1.0 };
/// Left-lower corner of the Julia view.
pub const JULIA_LEFTLOWER: Complex<f64> = Complex { re: -1.5, im: -1.5 };
/// Right-upper corner of the Julia view.
pub const JULIA_RIGHTUPPER: Complex<f64> = Complex { re: 1.5, im: 1.5 };
/// The seed the Julia view starts out with.
pub const JULIA_SEED: Complex<f64> = Complex { re: 0.3, im: -0.5 };

/// Everything a render pass needs to know, apart from the raster size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FractalConfig {
    /// Mandelbrot or Julia, and the Julia seed.
    pub family: Family,
    /// Left-lower corner of the complex rectangle.
    pub leftlower: Complex<f64>,
    /// Right-upper corner of the complex rectangle.
    pub rightupper: Complex<f64>,
    /// Iterations before a point is declared part of the set.
    pub max_iterations: usize,
    /// Channel-assignment rule for escaping points.
    pub color_schema: ColorSchema,
    /// Color of points that never escape.
    pub convergence_color: Color,
}

impl FractalConfig {
    /// The classic Mandelbrot overview.
    pub fn mandelbrot() -> Self {
        FractalConfig {
            family: Family::Mandelbrot,
            leftlower: MANDELBROT_LEFTLOWER,
            rightupper: MANDELBROT_RIGHTUPPER,
            max_iterations: DEFAULT_ITERATIONS,
            color_schema: ColorSchema::default(),
            convergence_color: Color::WHITE,
        }
    }

    /// A Julia set for `seed`, framed on the square of radius 1.5.
    pub fn julia(seed: Complex<f64>) -> Self {
        FractalConfig {
            family: Family::Julia { seed },
            leftlower: JULIA_LEFTLOWER,
            rightupper: JULIA_RIGHTUPPER,
            ..FractalConfig::mandelbrot()
        }
    }

    /// Same configuration, different rectangle.
    pub fn with_bounds(self, leftlower: Complex<f64>, rightupper: Complex<f64>) -> Self {
        FractalConfig {
            leftlower,
            rightupper,
            ..self
        }
    }

    /// Same configuration, different iteration budget.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        FractalConfig {
            max_iterations,
            ..self
        }
    }

    /// Same configuration, different schema.
    pub fn with_color_schema(self, color_schema: ColorSchema) -> Self {
        FractalConfig {
            color_schema,
            ..self
        }
    }

    /// Same configuration, different convergence color.
    pub fn with_convergence_color(self, convergence_color: Color) -> Self {
        FractalConfig {
            convergence_color,
            ..self
        }
    }

    /// Replace the Julia seed.  A Mandelbrot configuration has no seed
    /// and comes back untouched.
    pub fn with_seed(self, seed: Complex<f64>) -> Self {
        match self.family {
            Family::Julia { .. } => FractalConfig {
                family: Family::Julia { seed },
                ..self
            },
            Family::Mandelbrot => self,
        }
    }

    /// Check the invariants a render pass relies on.
    pub fn validate(&self) -> Result<()> {
        if !(self.rightupper.re > self.leftlower.re) || !(self.rightupper.im > self.leftlower.im)
        {
            return Err(FractalError::InvalidBounds {
                re_min: self.leftlower.re,
                re_max: self.rightupper.re,
                im_min: self.leftlower.im,
                im_max: self.rightupper.im,
            });
        }
        if self.max_iterations == 0 {
            return Err(FractalError::InvalidIterations(self.max_iterations));
        }
        Ok(())
    }
}

impl Default for FractalConfig {
    fn default() -> Self {
        FractalConfig::mandelbrot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(FractalConfig::mandelbrot().validate().is_ok());
        assert!(FractalConfig::julia(JULIA_SEED).validate().is_ok());
    }

    #[test]
    fn julia_preset_keeps_the_other_defaults() {
        let julia = FractalConfig::julia(JULIA_SEED);
        assert_eq!(julia.family, Family::Julia { seed: JULIA_SEED });
        assert_eq!(julia.max_iterations, DEFAULT_ITERATIONS);
        assert_eq!(julia.convergence_color, Color::WHITE);
        assert_eq!(julia.color_schema, ColorSchema::Red);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let bad = FractalConfig::mandelbrot()
            .with_bounds(Complex::new(1.0, -1.0), Complex::new(-2.0, 1.0));
        assert_eq!(
            bad.validate(),
            Err(FractalError::InvalidBounds {
                re_min: 1.0,
                re_max: -2.0,
                im_min: -1.0,
                im_max: 1.0
            })
        );
        let flat = FractalConfig::mandelbrot()
            .with_bounds(Complex::new(-2.0, 1.0), Complex::new(1.0, 1.0));
        assert!(flat.validate().is_err());
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let bad = FractalConfig::mandelbrot().with_max_iterations(0);
        assert_eq!(bad.validate(), Err(FractalError::InvalidIterations(0)));
    }

    #[test]
    fn seed_only_applies_to_julia() {
        let seed = Complex::new(-0.8, 0.156);
        assert_eq!(
            FractalConfig::mandelbrot().with_seed(seed),
            FractalConfig::mandelbrot()
        );
        assert_eq!(
            FractalConfig::julia(JULIA_SEED).with_seed(seed).family,
            Family::Julia { seed }
        );
    }
}
