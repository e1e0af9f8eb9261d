//! Class-name and inline-style combination for guide components.
//!
//! Both combiners are left-to-right folds. [`cx`] keeps every truthy class
//! fragment in order; [`cs`] merges style fragments so the last value given for
//! a property wins.

#![forbid(unsafe_code)]

mod classes;
mod macros;
mod style_map;

pub use classes::{ClassFragment, ClassList, cx};
pub use style_map::{StyleFragment, StyleMap, StyleValue, cs};
