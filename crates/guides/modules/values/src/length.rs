//! CSS length values as handed to guide components, and their canonical text form.

use core::fmt;

use cssparser::{Parser, ParserInput, Token};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};

/// A size as supplied by a caller: pixels, a ready-made CSS token, or nothing.
///
/// Deserializes from the loose JSON shapes component props use: a number is
/// pixels, a string is kept verbatim, and `null` is [`CssLength::Unset`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssLength {
    /// A plain number, interpreted as CSS pixels.
    Pixels(f64),
    /// A token that already carries its unit or is a keyword (`"1fr"`, `"auto"`).
    Token(String),
    /// No value was given.
    #[default]
    Unset,
}

impl CssLength {
    /// Numeric pixel magnitude of this value.
    ///
    /// [`CssLength::Unset`] counts as zero. Tokens must be a unitless number or a
    /// `px` dimension; keywords and other units have no pixel magnitude.
    ///
    /// # Errors
    /// Returns [`GuideError::InvalidArgument`] when a token is not numeric.
    pub fn pixel_magnitude(&self) -> Result<f64> {
        match self {
            Self::Pixels(value) => Ok(*value),
            Self::Unset => Ok(0.0),
            Self::Token(text) => parse_pixel_token(text),
        }
    }
}

/// Parse `"14"`, `"14px"` or `" -2.5px "` into its pixel value.
///
/// `cssparser` decides whether the text is a single number or `px` dimension;
/// the magnitude is then read from the source slice so it keeps full `f64`
/// precision instead of the tokenizer's `f32`.
fn parse_pixel_token(text: &str) -> Result<f64> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let start = parser.position();
    let unit_len = match parser.next() {
        Ok(Token::Number { .. }) => Some(0),
        Ok(Token::Dimension { unit, .. }) if unit.eq_ignore_ascii_case("px") => Some(unit.len()),
        _ => None,
    };
    let source = parser.slice_from(start).trim();
    let magnitude = unit_len
        .and_then(|len| source.get(..source.len() - len))
        .and_then(|digits| digits.parse::<f64>().ok());
    match magnitude {
        Some(value) if parser.is_exhausted() => Ok(value),
        _ => {
            debug!(target: "guides_values", "rejecting non-numeric length token {text:?}");
            Err(GuideError::invalid(format!(
                "expected a number or px length, found {text:?}"
            )))
        }
    }
}

/// Render a pixel quantity as CSS text, e.g. `16.0` → `"16px"`.
///
/// Negative zero is printed as `0px`.
pub fn format_px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

impl fmt::Display for CssLength {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(value) => formatter.write_str(&format_px(*value)),
            Self::Token(text) => formatter.write_str(text),
            Self::Unset => formatter.write_str("0px"),
        }
    }
}

/// Canonical CSS text for a caller-supplied size.
///
/// Numbers gain a `px` suffix, tokens pass through untouched and a missing value
/// becomes `"0px"`.
pub fn format_value(value: impl Into<CssLength>) -> String {
    value.into().to_string()
}

impl From<f64> for CssLength {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Pixels(value)
    }
}

impl From<f32> for CssLength {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Pixels(f64::from(value))
    }
}

impl From<i32> for CssLength {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Pixels(f64::from(value))
    }
}

impl From<u32> for CssLength {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Pixels(f64::from(value))
    }
}

impl From<&str> for CssLength {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Token(value.to_owned())
    }
}

impl From<String> for CssLength {
    #[inline]
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<&CssLength> for CssLength {
    #[inline]
    fn from(value: &CssLength) -> Self {
        value.clone()
    }
}

impl<T: Into<Self>> From<Option<T>> for CssLength {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}
