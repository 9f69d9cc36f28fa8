// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Numeric text entry for whatever front end edits a configuration.
//! Bad input is refused and the field keeps its last accepted value,
//! so the renderer only ever sees numbers.
//!
//! The command-line binary validates its arguments through clap and
//! has no use for this; it is here for interactive front ends that
//! keep a text box per parameter.

use std::str::FromStr;

use log::warn;

use crate::error::{FractalError, Result};

/// A text field holding one floating-point parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NumericField {
    value: f64,
}

impl NumericField {
    /// A field that starts out holding `value`.
    pub fn new(value: f64) -> Self {
        NumericField { value }
    }

    /// The last accepted value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// What the field should display: always the accepted value.
    pub fn text(&self) -> String {
        self.value.to_string()
    }

    /// Offer new text.  A finite number replaces the value and is
    /// returned; anything else leaves the value alone.
    pub fn submit(&mut self, text: &str) -> Result<f64> {
        match f64::from_str(text.trim()) {
            Ok(value) if value.is_finite() => {
                self.value = value;
                Ok(value)
            }
            _ => {
                warn!("Rejected {:?}; keeping {}", text, self.value);
                Err(FractalError::InvalidNumericInput(text.to_string()))
            }
        }
    }
}
