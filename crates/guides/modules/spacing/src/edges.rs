//! Four-sided and per-axis measurement structures.

use core::fmt;

use guides_values::format_px;
use serde::{Deserialize, Serialize};

/// Fully resolved padding: every side present, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    /// Block-start padding.
    pub top: f64,
    /// Inline-end padding.
    pub right: f64,
    /// Block-end padding.
    pub bottom: f64,
    /// Inline-start padding.
    pub left: f64,
}

impl Edges {
    /// Same value on all four sides.
    #[inline]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Space consumed along the inline axis (`left + right`).
    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Space consumed along the block axis (`top + bottom`).
    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Overwrite the sides named in `partial`, leaving the rest untouched.
    pub fn apply(&mut self, partial: PartialEdges) {
        if let Some(top) = partial.top {
            self.top = top;
        }
        if let Some(right) = partial.right {
            self.right = right;
        }
        if let Some(bottom) = partial.bottom {
            self.bottom = bottom;
        }
        if let Some(left) = partial.left {
            self.left = left;
        }
    }
}

/// CSS `padding` shorthand in top/right/bottom/left order, e.g. `10px 20px 10px 20px`.
impl fmt::Display for Edges {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} {} {} {}",
            format_px(self.top),
            format_px(self.right),
            format_px(self.bottom),
            format_px(self.left)
        )
    }
}

/// Any subset of the four sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialEdges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl From<Edges> for PartialEdges {
    fn from(edges: Edges) -> Self {
        Self {
            top: Some(edges.top),
            right: Some(edges.right),
            bottom: Some(edges.bottom),
            left: Some(edges.left),
        }
    }
}

/// Either end of a single axis. `start` is top/left, `end` is bottom/right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialEnds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
}
