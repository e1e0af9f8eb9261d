//! Style entries derived from resolved measurements.

use guides_spacing::Edges;
use guides_style::StyleMap;
use guides_values::{CssLength, GridUnit, Result};
use log::debug;

/// `paddingTop`/`paddingRight`/`paddingBottom`/`paddingLeft` entries for `edges`.
pub fn padding_style(edges: &Edges) -> StyleMap {
    StyleMap::new()
        .set("paddingTop", edges.top)
        .set("paddingRight", edges.right)
        .set("paddingBottom", edges.bottom)
        .set("paddingLeft", edges.left)
}

/// A `marginBottom` entry that pushes an element of `height` down onto the next
/// line of a `unit` pixel grid.
///
/// Elements already on the grid get a zero margin.
///
/// # Errors
/// Returns [`GuideError::InvalidArgument`](guides_values::GuideError) for a
/// non-positive unit or a non-numeric height token.
pub fn grid_offset_style(height: impl Into<CssLength>, unit: f64) -> Result<StyleMap> {
    let grid = GridUnit::new(unit)?;
    let height = height.into().pixel_magnitude()?;
    let fill = grid.fill(height);
    debug!(target: "guides", "height {height} on {unit}px grid needs {fill}px");
    Ok(StyleMap::new().set("marginBottom", fill))
}
