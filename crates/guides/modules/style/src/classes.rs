//! Class-name combination.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A space-separated class list built up fragment by fragment.
///
/// Whitespace inside fragments is collapsed; duplicate class names are kept.
///
/// Deserializes from a class string or from a boolean, which names no class
/// (hosts pass `className: cond && "name"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawClassName", into = "String")]
pub struct ClassList {
    joined: String,
}

impl ClassList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Falsy fragments (empty text, `false`, `None`) add nothing.
    pub fn push<F: ClassFragment + ?Sized>(&mut self, fragment: &F) -> &mut Self {
        fragment.append_to(self);
        self
    }

    /// Append every class token found in `text`.
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        for token in text.split_ascii_whitespace() {
            if !self.joined.is_empty() {
                self.joined.push(' ');
            }
            self.joined.push_str(token);
        }
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// Individual class names in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.joined.split(' ').filter(|token| !token.is_empty())
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.joined
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.joined)
    }
}

impl From<String> for ClassList {
    fn from(text: String) -> Self {
        let mut list = Self::new();
        list.push_str(&text);
        list
    }
}

/// JSON forms a `className` prop takes.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawClassName {
    Text(String),
    Flag(bool),
}

impl From<RawClassName> for ClassList {
    fn from(raw: RawClassName) -> Self {
        match raw {
            RawClassName::Text(text) => text.into(),
            RawClassName::Flag(_) => Self::new(),
        }
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.joined
    }
}

impl<F: ClassFragment> FromIterator<F> for ClassList {
    fn from_iter<I: IntoIterator<Item = F>>(fragments: I) -> Self {
        let mut list = Self::new();
        for fragment in fragments {
            list.push(&fragment);
        }
        list
    }
}

impl<F: ClassFragment> Extend<F> for ClassList {
    fn extend<I: IntoIterator<Item = F>>(&mut self, fragments: I) {
        for fragment in fragments {
            self.push(&fragment);
        }
    }
}

/// One input to [`cx`]: a class name, or something that may turn out falsy.
pub trait ClassFragment {
    /// Append this fragment's class names, if any, to `list`.
    fn append_to(&self, list: &mut ClassList);
}

impl ClassFragment for str {
    fn append_to(&self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl ClassFragment for String {
    fn append_to(&self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl ClassFragment for ClassList {
    fn append_to(&self, list: &mut ClassList) {
        list.push_str(&self.joined);
    }
}

/// A bare boolean names no class; it only shows up as the falsy half of a
/// conditional expression.
impl ClassFragment for bool {
    fn append_to(&self, _list: &mut ClassList) {}
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn append_to(&self, list: &mut ClassList) {
        if let Some(fragment) = self {
            fragment.append_to(list);
        }
    }
}

/// `(name, condition)` includes `name` only when `condition` holds.
impl<T: ClassFragment> ClassFragment for (T, bool) {
    fn append_to(&self, list: &mut ClassList) {
        if self.1 {
            self.0.append_to(list);
        }
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn append_to(&self, list: &mut ClassList) {
        (**self).append_to(list);
    }
}

/// Join the truthy class fragments in order with single spaces.
///
/// For fragments of different types use the [`cx!`](crate::cx!) macro.
pub fn cx<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: ClassFragment,
{
    fragments.into_iter().collect::<ClassList>().into_string()
}
