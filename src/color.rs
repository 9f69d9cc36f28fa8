// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning escape counts into colors.
//!
//! The escape fraction `t` drives two intensities: `c1` climbs from 0
//! to 255 over the first half of the range and then stays put, while
//! `c2` sits at 0 for the first half and climbs to 255 over the
//! second.  A color schema decides which of the two lands in each of
//! the red, green and blue channels.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use num::clamp;

use crate::error::FractalError;

/// An RGB color with each channel normalized to [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    /// Black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// Pure red.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    /// Pure green.
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    /// Pure blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    /// Red and green.
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    /// Green and blue.
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    /// Red and blue.
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);

    /// Build a color from normalized channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Quantize to 8 bits per channel, rounding to nearest.
    pub fn to_rgb8(self) -> Rgb<u8> {
        fn channel(v: f64) -> u8 {
            clamp((v * 255.0).round(), 0.0, 255.0) as u8
        }
        Rgb([channel(self.r), channel(self.g), channel(self.b)])
    }
}

impl FromStr for Color {
    type Err = FractalError;

    /// Accepts one of the named constants, case-insensitively, or a
    /// `#rrggbb` hex triple.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FractalError::InvalidColor(s.to_string());
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "white" => return Ok(Color::WHITE),
            "black" => return Ok(Color::BLACK),
            "red" => return Ok(Color::RED),
            "green" => return Ok(Color::GREEN),
            "blue" => return Ok(Color::BLUE),
            "yellow" => return Ok(Color::YELLOW),
            "cyan" => return Ok(Color::CYAN),
            "magenta" => return Ok(Color::MAGENTA),
            _ => {}
        }

        let hex = name.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Derive the two channel intensities, each in [0, 255], from an
/// escape fraction `t` in [0, 1).
#[inline]
pub fn intensities(t: f64) -> (f64, f64) {
    let c1 = f64::min(255.0 * 2.0 * t, 255.0);
    let c2 = f64::max(255.0 * (2.0 * t - 1.0), 0.0);
    (c1, c2)
}

/// The fixed channel-assignment rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSchema {
    /// (c1, c2, c2)
    Red,
    /// (c1, c1, c2)
    Yellow,
    /// (c1, c2, c1)
    Magenta,
    /// (c2, c2, c1)
    Blue,
    /// (c2, c1, c2)
    Green,
    /// (c2, c1, c1)
    Cyan,
    /// Falls back to the green assignment.
    Default,
}

impl ColorSchema {
    /// Every schema, in menu order.
    pub const ALL: [ColorSchema; 7] = [
        ColorSchema::Red,
        ColorSchema::Yellow,
        ColorSchema::Magenta,
        ColorSchema::Blue,
        ColorSchema::Green,
        ColorSchema::Cyan,
        ColorSchema::Default,
    ];

    /// Spread the two intensities over the channels.
    pub fn colorize(self, c1: f64, c2: f64) -> Color {
        let (c1, c2) = (c1 / 255.0, c2 / 255.0);
        match self {
            ColorSchema::Red => Color::new(c1, c2, c2),
            ColorSchema::Yellow => Color::new(c1, c1, c2),
            ColorSchema::Magenta => Color::new(c1, c2, c1),
            ColorSchema::Blue => Color::new(c2, c2, c1),
            ColorSchema::Green => Color::new(c2, c1, c2),
            ColorSchema::Cyan => Color::new(c2, c1, c1),
            ColorSchema::Default => Color::new(c2, c1, c2),
        }
    }

    /// Color for an escape fraction.
    pub fn shade(self, t: f64) -> Color {
        let (c1, c2) = intensities(t);
        self.colorize(c1, c2)
    }

    fn name(self) -> &'static str {
        match self {
            ColorSchema::Red => "RED",
            ColorSchema::Yellow => "YELLOW",
            ColorSchema::Magenta => "MAGENTA",
            ColorSchema::Blue => "BLUE",
            ColorSchema::Green => "GREEN",
            ColorSchema::Cyan => "CYAN",
            ColorSchema::Default => "DEFAULT",
        }
    }
}

impl Default for ColorSchema {
    fn default() -> Self {
        ColorSchema::Red
    }
}

impl fmt::Display for ColorSchema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSchema {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorSchema::ALL
            .iter()
            .cloned()
            .find(|schema| schema.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FractalError::UnknownColorSchema(s.to_string()))
    }
}
