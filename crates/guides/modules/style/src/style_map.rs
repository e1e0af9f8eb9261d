//! Inline style objects and their merge.

use core::fmt;

use guides_values::format_px;
use indexmap::IndexMap;
use indexmap::map::Iter;
use log::trace;
use serde::{Deserialize, Deserializer, Serialize};

/// Properties that take bare numbers; every other numeric value is pixels.
const UNITLESS_PROPERTIES: &[&str] = &[
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "line-height",
    "opacity",
    "order",
    "z-index",
];

/// A style property value: a number or literal CSS text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Text(text) => formatter.write_str(text),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Property name → value, in first-insertion order.
///
/// Setting a property that already exists replaces its value but keeps its
/// position, like assigning to an existing key of a JavaScript object.
/// Deserializing skips properties whose value is `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    #[serde(deserialize_with = "skip_null_values")]
    properties: IndexMap<String, StyleValue>,
}

fn skip_null_values<'de, D>(deserializer: D) -> Result<IndexMap<String, StyleValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = IndexMap::<String, Option<StyleValue>>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|(property, value)| value.map(|present| (property, present)))
        .collect())
}

impl StyleMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleMap::insert`].
    #[must_use]
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set `property`, returning the value it replaces.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.properties.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Remove `property`, keeping the order of the remaining entries.
    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.properties.shift_remove(property)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.properties.iter()
    }

    /// Copy every property of `other` over this map; `other` wins on conflicts.
    pub fn extend_from(&mut self, other: &Self) {
        for (property, value) in &other.properties {
            if let Some(previous) = self.properties.insert(property.clone(), value.clone()) {
                trace!(target: "guides_style", "{property}: {previous} replaced by {value}");
            }
        }
    }

    /// Render as the body of a `style` attribute, e.g. `color: red; margin-top: 8px;`.
    ///
    /// camelCase property names are written in kebab-case and numbers gain a `px`
    /// suffix unless the property is unitless (`opacity`, `z-index`, ...).
    pub fn to_inline(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| {
                let name = to_kebab_case(property);
                let text = match value {
                    StyleValue::Number(number) if !UNITLESS_PROPERTIES.contains(&name.as_str()) => {
                        format_px(*number)
                    }
                    StyleValue::Number(_) | StyleValue::Text(_) => value.to_string(),
                };
                format!("{name}: {text};")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse the body of a `style` attribute.
    ///
    /// Declarations are split on `;` and then on the first `:`. Items with an
    /// empty property or value are skipped, and a repeated property keeps the
    /// last value.
    pub fn parse_inline(input: &str) -> Self {
        let mut map = Self::new();
        for item in input.split(';') {
            let Some((raw_property, raw_value)) = item.split_once(':') else {
                continue;
            };
            let property = raw_property.trim();
            let value = raw_value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            map.insert(property, value);
        }
        map
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_inline())
    }
}

impl<'map> IntoIterator for &'map StyleMap {
    type Item = (&'map String, &'map StyleValue);
    type IntoIter = Iter<'map, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut map = Self::new();
        for (property, value) in entries {
            map.insert(property, value);
        }
        map
    }
}

/// `marginTop` → `margin-top`, `WebkitTransition` → `-webkit-transition`,
/// `msTransform` → `-ms-transform`. Custom properties (`--gap`) and names
/// already in kebab-case are returned unchanged.
fn to_kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_owned();
    }
    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms")
        && property
            .chars()
            .nth(2)
            .is_some_and(|character| character.is_ascii_uppercase())
    {
        out.push('-');
    }
    for character in property.chars() {
        if character.is_ascii_uppercase() {
            out.push('-');
            out.push(character.to_ascii_lowercase());
        } else {
            out.push(character);
        }
    }
    out
}

/// One input to [`cs`]: a style map, or something that may turn out falsy.
pub trait StyleFragment {
    /// Merge this fragment's properties, if any, into `target`.
    fn merge_into(&self, target: &mut StyleMap);
}

impl StyleFragment for StyleMap {
    fn merge_into(&self, target: &mut StyleMap) {
        target.extend_from(self);
    }
}

/// A bare boolean carries no properties.
impl StyleFragment for bool {
    fn merge_into(&self, _target: &mut StyleMap) {}
}

impl<T: StyleFragment> StyleFragment for Option<T> {
    fn merge_into(&self, target: &mut StyleMap) {
        if let Some(fragment) = self {
            fragment.merge_into(target);
        }
    }
}

/// `(style, condition)` merges `style` only when `condition` holds.
impl<T: StyleFragment> StyleFragment for (T, bool) {
    fn merge_into(&self, target: &mut StyleMap) {
        if self.1 {
            self.0.merge_into(target);
        }
    }
}

impl<T: StyleFragment + ?Sized> StyleFragment for &T {
    fn merge_into(&self, target: &mut StyleMap) {
        (**self).merge_into(target);
    }
}

/// Merge style fragments left to right; a later value for a property wins.
///
/// For fragments of different types use the [`cs!`](crate::cs!) macro.
pub fn cs<I>(fragments: I) -> StyleMap
where
    I: IntoIterator,
    I::Item: StyleFragment,
{
    let mut merged = StyleMap::new();
    for fragment in fragments {
        fragment.merge_into(&mut merged);
    }
    merged
}
