// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The result of a render pass: a fixed-size grid of colors.

use std::path::Path;

use image::{ImageBuffer, RgbImage};

use crate::color::Color;
use crate::error::{FractalError, Result};
use crate::planes::Pixel;

/// A row-major grid of colors, `width` columns by `height` rows.
/// Row 0 holds the lowest imaginary values.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelRaster {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelRaster {
    /// A raster with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FractalError::EmptyRaster { width, height });
        }
        Ok(PixelRaster {
            width,
            height,
            pixels: vec![fill; width * height],
        })
    }

    /// Wrap cells that were computed elsewhere, row after row.
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        PixelRaster {
            width,
            height,
            pixels,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Never true; empty rasters can't be built.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The color at a pixel, or None outside the raster.
    pub fn get(&self, pixel: Pixel) -> Option<Color> {
        self.offset(pixel).map(|offset| self.pixels[offset])
    }

    /// Overwrite one cell.  Pixels outside the raster are ignored.
    pub fn set(&mut self, pixel: Pixel, color: Color) {
        if let Some(offset) = self.offset(pixel) {
            self.pixels[offset] = color;
        }
    }

    /// All cells, row after row.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn offset(&self, pixel: Pixel) -> Option<usize> {
        if pixel.0 < self.width && pixel.1 < self.height {
            Some(pixel.1 * self.width + pixel.0)
        } else {
            None
        }
    }

    /// Quantize to an 8-bit RGB image.  The raster is stored with the
    /// imaginary axis growing downwards, and so is the image.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.pixels[(y as usize) * self.width + (x as usize)].to_rgb8()
        })
    }

    /// Write the raster to disk.  The format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), failure::Error> {
        self.to_image().save(path)?;
        Ok(())
    }
}
