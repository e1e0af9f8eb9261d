//! Shape detection for the loosely typed padding and spacing inputs.
//!
//! Every accepted shape becomes a variant here. Anything else (a three-entry
//! tuple, an object with unknown keys) is rejected when the value is built,
//! so resolution itself never has to guess.

use guides_values::{GuideError, Result};
use log::debug;
use serde::Deserialize;

use crate::edges::{Edges, PartialEdges, PartialEnds};

/// Unified padding for all four sides.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawShape<PartialEdges>")]
pub enum PaddingValue {
    /// One number for every side.
    All(f64),
    /// `[block, inline]`: top/bottom then left/right.
    Axes { block: f64, inline: f64 },
    /// `[top, right, bottom, left]` in that literal order.
    Sides(Edges),
    /// Only the named sides.
    Partial(PartialEdges),
}

impl PaddingValue {
    /// Detect the shape of a numeric list: one, two or four entries.
    ///
    /// # Errors
    /// Returns [`GuideError::InvalidArgument`] for any other length.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [all] => Ok(Self::All(all)),
            [block, inline] => Ok(Self::Axes { block, inline }),
            [top, right, bottom, left] => Ok(Self::Sides(Edges {
                top,
                right,
                bottom,
                left,
            })),
            _ => {
                debug!(target: "guides_spacing", "rejecting padding list of {} values", values.len());
                Err(GuideError::invalid(format!(
                    "padding accepts 1, 2 or 4 values, got {}",
                    values.len()
                )))
            }
        }
    }

    /// Write this padding over `edges`. Only [`PaddingValue::Partial`] leaves
    /// sides untouched.
    pub fn apply_to(self, edges: &mut Edges) {
        match self {
            Self::All(all) => *edges = Edges::uniform(all),
            Self::Axes { block, inline } => {
                *edges = Edges {
                    top: block,
                    right: inline,
                    bottom: block,
                    left: inline,
                };
            }
            Self::Sides(sides) => *edges = sides,
            Self::Partial(partial) => edges.apply(partial),
        }
    }
}

/// Spacing along one axis, independent of [`PaddingValue`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawShape<PartialEnds>")]
pub enum SpacingValue {
    /// One number for both ends.
    Both(f64),
    /// `[start, end]`.
    Ends { start: f64, end: f64 },
    /// Only the named ends.
    Partial(PartialEnds),
}

impl SpacingValue {
    /// Detect the shape of a numeric list: one or two entries.
    ///
    /// # Errors
    /// Returns [`GuideError::InvalidArgument`] for any other length.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [both] => Ok(Self::Both(both)),
            [start, end] => Ok(Self::Ends { start, end }),
            _ => {
                debug!(target: "guides_spacing", "rejecting spacing list of {} values", values.len());
                Err(GuideError::invalid(format!(
                    "spacing accepts 1 or 2 values, got {}",
                    values.len()
                )))
            }
        }
    }

    /// The `(start, end)` pair this spacing sets; `None` leaves that end alone.
    pub const fn ends(self) -> PartialEnds {
        match self {
            Self::Both(both) => PartialEnds {
                start: Some(both),
                end: Some(both),
            },
            Self::Ends { start, end } => PartialEnds {
                start: Some(start),
                end: Some(end),
            },
            Self::Partial(partial) => partial,
        }
    }
}

/// The JSON forms a padding or spacing prop may take before shape detection.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawShape<Named> {
    Number(f64),
    List(Vec<f64>),
    Named(Named),
}

impl TryFrom<RawShape<PartialEdges>> for PaddingValue {
    type Error = GuideError;

    fn try_from(raw: RawShape<PartialEdges>) -> Result<Self> {
        match raw {
            RawShape::Number(all) => Ok(Self::All(all)),
            RawShape::List(values) => Self::from_slice(&values),
            RawShape::Named(partial) => Ok(Self::Partial(partial)),
        }
    }
}

impl TryFrom<RawShape<PartialEnds>> for SpacingValue {
    type Error = GuideError;

    fn try_from(raw: RawShape<PartialEnds>) -> Result<Self> {
        match raw {
            RawShape::Number(both) => Ok(Self::Both(both)),
            RawShape::List(values) => Self::from_slice(&values),
            RawShape::Named(partial) => Ok(Self::Partial(partial)),
        }
    }
}

impl TryFrom<&[f64]> for PaddingValue {
    type Error = GuideError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<&[f64]> for SpacingValue {
    type Error = GuideError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl From<f64> for PaddingValue {
    fn from(all: f64) -> Self {
        Self::All(all)
    }
}

impl From<i32> for PaddingValue {
    fn from(all: i32) -> Self {
        Self::All(f64::from(all))
    }
}

impl From<[f64; 2]> for PaddingValue {
    fn from([block, inline]: [f64; 2]) -> Self {
        Self::Axes { block, inline }
    }
}

impl From<[f64; 4]> for PaddingValue {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::Sides(Edges {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl From<PartialEdges> for PaddingValue {
    fn from(partial: PartialEdges) -> Self {
        Self::Partial(partial)
    }
}

/// Feeds a resolved value back in as a partial padding naming every side.
impl From<Edges> for PaddingValue {
    fn from(edges: Edges) -> Self {
        Self::Partial(edges.into())
    }
}

impl From<f64> for SpacingValue {
    fn from(both: f64) -> Self {
        Self::Both(both)
    }
}

impl From<i32> for SpacingValue {
    fn from(both: i32) -> Self {
        Self::Both(f64::from(both))
    }
}

impl From<[f64; 2]> for SpacingValue {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::Ends { start, end }
    }
}

impl From<PartialEnds> for SpacingValue {
    fn from(partial: PartialEnds) -> Self {
        Self::Partial(partial)
    }
}
