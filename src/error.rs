// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong before, or instead of, a render pass.

use failure::Fail;

/// The errors the renderer reports.  All configuration errors are
/// raised before a single pixel is computed.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum FractalError {
    /// The complex rectangle is empty or inverted.
    #[fail(
        display = "Invalid plane bounds: re {}..{}, im {}..{}",
        re_min, re_max, im_min, im_max
    )]
    InvalidBounds {
        /// Left edge of the rectangle.
        re_min: f64,
        /// Right edge of the rectangle.
        re_max: f64,
        /// Lower edge of the rectangle.
        im_min: f64,
        /// Upper edge of the rectangle.
        im_max: f64,
    },

    /// The iteration budget must be at least one.
    #[fail(display = "Iteration count must be positive, got {}", _0)]
    InvalidIterations(usize),

    /// A raster needs at least one row and one column.
    #[fail(display = "Raster size {}x{} has no pixels", width, height)]
    EmptyRaster {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Text that should have been a number wasn't.
    #[fail(display = "Not a number: {:?}", _0)]
    InvalidNumericInput(String),

    /// No color schema goes by that name.
    #[fail(display = "Unknown color schema: {:?}", _0)]
    UnknownColorSchema(String),

    /// Neither a color name nor a #rrggbb triple.
    #[fail(display = "Could not parse color: {:?}", _0)]
    InvalidColor(String),

    /// The render pass was abandoned; whatever it produced is stale.
    #[fail(display = "Render cancelled")]
    Cancelled,
}

/// Shorthand used throughout the library.
pub type Result<T> = std::result::Result<T, FractalError>;
