//! Padding resolution with per-axis overrides.

use guides_values::{GuideError, Result};
use log::trace;
use serde::Deserialize;

use crate::edges::{Edges, PartialEdges};
use crate::shape::{PaddingValue, SpacingValue};

/// The padding-related props of a guide component.
///
/// `padding` is applied first; `block` and `inline` then overwrite their axis,
/// so a caller can set overall padding and adjust just one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaddingConfig {
    /// Padding for all four sides, applied first.
    pub padding: Option<PaddingValue>,
    /// Top/bottom spacing; overrides `padding` on those sides.
    pub block: Option<SpacingValue>,
    /// Left/right spacing; overrides `padding` on those sides.
    pub inline: Option<SpacingValue>,
}

impl PaddingConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<PaddingValue>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: impl Into<SpacingValue>) -> Self {
        self.block = Some(block.into());
        self
    }

    #[must_use]
    pub fn with_inline(mut self, inline: impl Into<SpacingValue>) -> Self {
        self.inline = Some(inline.into());
        self
    }

    /// Read the config from a JSON props object. Keys other than `padding`,
    /// `block` and `inline` are ignored.
    ///
    /// # Errors
    /// Returns [`GuideError::InvalidArgument`] when the JSON is malformed or a
    /// prop has an unsupported shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| GuideError::invalid(err.to_string()))
    }

    /// Resolve into four concrete sides. Same as [`parse_padding`].
    #[inline]
    pub fn resolve(&self) -> Edges {
        parse_padding(self)
    }
}

/// Resolve padding props into a fully specified [`Edges`].
///
/// Resolution starts from zero on every side, applies `padding` according to
/// its shape, then lets `block` overwrite top/bottom and `inline` overwrite
/// left/right.
pub fn parse_padding(config: &PaddingConfig) -> Edges {
    let mut edges = Edges::default();
    if let Some(padding) = config.padding {
        padding.apply_to(&mut edges);
    }
    // Axis spacing overrides unified padding on the sides it names.
    if let Some(block) = config.block {
        let ends = block.ends();
        trace!(target: "guides_spacing", "block spacing {ends:?} over {edges:?}");
        edges.apply(PartialEdges {
            top: ends.start,
            bottom: ends.end,
            ..PartialEdges::default()
        });
    }
    if let Some(inline) = config.inline {
        let ends = inline.ends();
        trace!(target: "guides_spacing", "inline spacing {ends:?} over {edges:?}");
        edges.apply(PartialEdges {
            left: ends.start,
            right: ends.end,
            ..PartialEdges::default()
        });
    }
    edges
}
