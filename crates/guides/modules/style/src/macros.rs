//! Variadic forms of the combiners for fragments of mixed types.

/// Join class fragments of any [`ClassFragment`](crate::ClassFragment) type.
///
/// ```
/// use guides_style::cx;
///
/// let active = true;
/// assert_eq!(cx!("guide", false, ("guide--active", active), None::<&str>), "guide guide--active");
/// ```
#[macro_export]
macro_rules! cx {
    ($($fragment:expr),* $(,)?) => {{
        #[allow(unused_mut, reason = "an empty invocation pushes nothing")]
        let mut list = $crate::ClassList::new();
        $( list.push(&$fragment); )*
        list.into_string()
    }};
}

/// Merge style fragments of any [`StyleFragment`](crate::StyleFragment) type.
///
/// ```
/// use guides_style::{StyleMap, cs};
///
/// let base = StyleMap::new().set("color", "red");
/// let merged = cs!(base, None::<StyleMap>, StyleMap::new().set("color", "blue"));
/// assert_eq!(merged.to_inline(), "color: blue;");
/// ```
#[macro_export]
macro_rules! cs {
    ($($fragment:expr),* $(,)?) => {{
        #[allow(unused_mut, reason = "an empty invocation merges nothing")]
        let mut merged = $crate::StyleMap::new();
        $( $crate::StyleFragment::merge_into(&$fragment, &mut merged); )*
        merged
    }};
}
