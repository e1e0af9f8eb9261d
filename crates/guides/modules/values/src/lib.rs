//! Length values and grid arithmetic shared by every layout guide.
//!
//! A guide receives sizes as bare numbers (pixels), pre-unitized tokens such as
//! `"1fr"` or `"auto"`, or nothing at all. This crate turns those into CSS length
//! text and computes how far a value overshoots a repeating grid.

#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod length;

pub use error::{GuideError, Result};
pub use grid::{GridUnit, moduloize};
pub use length::{CssLength, format_px, format_value};
