//! Padding and spacing normalization for layout guides.
//!
//! Callers describe padding in whichever shape is convenient: one number, a
//! `[block, inline]` pair, a `[top, right, bottom, left]` quadruple, a partial
//! set of named sides, or per-axis `block`/`inline` spacing. [`parse_padding`]
//! folds all of that into a single four-sided [`Edges`] value.

#![forbid(unsafe_code)]

mod edges;
mod resolve;
mod shape;

pub use edges::{Edges, PartialEdges, PartialEnds};
pub use guides_values::{GuideError, Result};
pub use resolve::{PaddingConfig, parse_padding};
pub use shape::{PaddingValue, SpacingValue};
