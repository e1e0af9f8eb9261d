//! Normalization layer behind the layout guide overlays.
//!
//! Guide components (padding indicators, spacing rulers, baseline grids) take
//! loosely typed props and hand them to this crate. Everything here is a pure
//! function of its arguments: size formatting and grid remainders live in
//! [`guides_values`], padding resolution in [`guides_spacing`], class and style
//! merging in [`guides_style`]. This crate re-exports all of it and adds the
//! glue that turns resolved values into style entries.

#![forbid(unsafe_code)]

mod props;
mod styles;

pub use guides_spacing::{
    Edges, PaddingConfig, PaddingValue, PartialEdges, PartialEnds, SpacingValue, parse_padding,
};
pub use guides_style::{
    ClassFragment, ClassList, StyleFragment, StyleMap, StyleValue, cs, cx,
};
pub use guides_values::{
    CssLength, GridUnit, GuideError, Result, format_px, format_value, moduloize,
};

pub use props::{GuideProps, ResolvedGuide};
pub use styles::{grid_offset_style, padding_style};

/// Everything a guide component usually needs, including the `cx!`/`cs!` macros.
pub mod prelude {
    pub use crate::{
        CssLength, Edges, GridUnit, GuideError, GuideProps, PaddingConfig, StyleMap, cs, cx,
        format_value, grid_offset_style, moduloize, padding_style, parse_padding,
    };
}
