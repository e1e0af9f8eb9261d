//! Baseline grid arithmetic.
//!
//! Guides snap elements onto a repeating grid (an 8px baseline grid, for
//! example). The remainder of a size against that grid is what has to be
//! trimmed off, or added, to land on a grid line.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};
use crate::length::{CssLength, format_px};

/// A validated, strictly positive grid interval in pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GridUnit(f64);

impl GridUnit {
    /// Validate `pixels` as a grid interval.
    ///
    /// # Errors
    /// Returns [`GuideError::InvalidArgument`] for zero, negative or non-finite units.
    pub fn new(pixels: f64) -> Result<Self> {
        if pixels.is_finite() && pixels > 0.0 {
            Ok(Self(pixels))
        } else {
            debug!(target: "guides_values", "rejecting grid unit {pixels}");
            Err(GuideError::invalid(format!(
                "grid unit must be a positive finite number, got {pixels}"
            )))
        }
    }

    /// The interval in pixels.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Remainder of `value` against this grid.
    ///
    /// Division truncates toward zero, so the result carries the sign of
    /// `value`: `-2` on an 8px grid stays `-2`.
    #[inline]
    pub fn remainder(self, value: f64) -> f64 {
        let rem = value % self.0;
        if rem == 0.0 { 0.0 } else { rem }
    }

    /// `value` with its remainder removed, i.e. moved toward zero onto the
    /// nearest grid line.
    #[inline]
    pub fn trim(self, value: f64) -> f64 {
        value - self.remainder(value)
    }

    /// Amount to add to `value` so it reaches the next grid line away from zero.
    ///
    /// Zero when `value` already sits on the grid.
    pub fn fill(self, value: f64) -> f64 {
        let rem = self.remainder(value);
        if rem == 0.0 {
            0.0
        } else {
            self.0.copysign(rem) - rem
        }
    }
}

impl TryFrom<f64> for GridUnit {
    type Error = GuideError;

    fn try_from(pixels: f64) -> Result<Self> {
        Self::new(pixels)
    }
}

impl From<GridUnit> for f64 {
    fn from(unit: GridUnit) -> Self {
        unit.0
    }
}

/// Remainder of `value` against a grid of `unit` pixels, formatted as CSS text.
///
/// Numeric strings (`"14"`, `"14px"`) are read as pixels and a missing value
/// counts as zero. The sign of the input is kept: `moduloize(-2, 8.0)` is
/// `"-2px"`.
///
/// # Errors
/// Returns [`GuideError::InvalidArgument`] when `unit` is not a positive finite
/// number or `value` is a non-numeric token such as `"auto"`.
pub fn moduloize(value: impl Into<CssLength>, unit: f64) -> Result<String> {
    let grid = GridUnit::new(unit)?;
    let magnitude = value.into().pixel_magnitude()?;
    Ok(format_px(grid.remainder(magnitude)))
}
