//! Loose component props and their resolved form.

use guides_spacing::{Edges, PaddingConfig, parse_padding};
use guides_style::{ClassList, StyleMap, cs, cx};
use guides_values::{GuideError, Result};
use serde::{Deserialize, Serialize};

use crate::styles::padding_style;

/// Props shared by padding-aware guides, as they arrive from the host
/// application.
///
/// JSON keys follow the host's camelCase convention: `padding`, `block`,
/// `inline`, `className` and `style`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideProps {
    #[serde(flatten)]
    pub spacing: PaddingConfig,
    pub class_name: Option<ClassList>,
    pub style: Option<StyleMap>,
}

impl GuideProps {
    /// Parse props from a JSON object.
    ///
    /// # Errors
    /// Returns [`GuideError::InvalidArgument`] for malformed JSON or a padding
    /// prop of unsupported shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| GuideError::invalid(err.to_string()))
    }

    /// Resolve against the guide's own class name.
    ///
    /// The caller's `className` is appended after `base_class`, and the caller's
    /// `style` is merged over the padding entries so explicit styles win.
    pub fn resolve(&self, base_class: &str) -> ResolvedGuide {
        let edges = parse_padding(&self.spacing);
        ResolvedGuide {
            class_name: cx!(base_class, self.class_name.as_ref()),
            style: cs!(padding_style(&edges), self.style.as_ref()),
            edges,
        }
    }
}

/// Canonical values a rendering collaborator consumes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGuide {
    pub edges: Edges,
    pub class_name: String,
    pub style: StyleMap,
}
