#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot and Julia renderer
//!
//! Both sets come from the same map: take a complex number z, square
//! it, add a constant c, and repeat.  Points whose orbit runs off
//! past a radius of 2 are outside the set, and the number of steps
//! they took to get there is their "escape time."  Points that are
//! still inside after a fixed budget of steps are treated as members.
//!
//! For the Mandelbrot set every pixel supplies its own c and every
//! orbit starts at the origin.  For a Julia set c is a fixed seed and
//! the pixel is where the orbit starts.  That swap is the only
//! difference between the two, and this crate expresses it as a
//! single `Family` value rather than two algorithms.
//!
//! A render pass takes an immutable `FractalConfig` and a raster
//! size, maps every pixel onto the complex plane, and turns each
//! escape time into a color through one of a handful of channel
//! schemas.

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;

pub mod axes;
pub mod color;
pub mod config;
pub mod convergence;
pub mod error;
pub mod input;
pub mod planes;
pub mod raster;
pub mod renderer;

pub use color::{Color, ColorSchema};
pub use config::FractalConfig;
pub use convergence::{escape_time, Family};
pub use error::FractalError;
pub use planes::{Pixel, PlaneMapper};
pub use raster::PixelRaster;
pub use renderer::{render, FractalRenderer};
