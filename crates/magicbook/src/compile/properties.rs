//! The CSS property allow-list.
//!
//! A body entry whose value is a book is either a nested selector or a
//! property with a compound value. The allow-list decides: keys naming a
//! known CSS property are declarations, everything else nests.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::util::dash_camel_case;

/// Standard CSS property names, dash-cased.
pub const CSS_PROPERTIES: &[&str] = &[
    "accent-color",
    "align-content",
    "align-items",
    "align-self",
    "all",
    "animation",
    "animation-delay",
    "animation-direction",
    "animation-duration",
    "animation-fill-mode",
    "animation-iteration-count",
    "animation-name",
    "animation-play-state",
    "animation-timing-function",
    "appearance",
    "aspect-ratio",
    "backdrop-filter",
    "backface-visibility",
    "background",
    "background-attachment",
    "background-blend-mode",
    "background-clip",
    "background-color",
    "background-image",
    "background-origin",
    "background-position",
    "background-repeat",
    "background-size",
    "border",
    "border-bottom",
    "border-bottom-color",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-bottom-style",
    "border-bottom-width",
    "border-collapse",
    "border-color",
    "border-image",
    "border-left",
    "border-left-color",
    "border-left-style",
    "border-left-width",
    "border-radius",
    "border-right",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-spacing",
    "border-style",
    "border-top",
    "border-top-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-top-style",
    "border-top-width",
    "border-width",
    "bottom",
    "box-shadow",
    "box-sizing",
    "caption-side",
    "caret-color",
    "clear",
    "clip",
    "clip-path",
    "color",
    "column-count",
    "column-gap",
    "column-rule",
    "column-width",
    "columns",
    "content",
    "counter-increment",
    "counter-reset",
    "cursor",
    "direction",
    "display",
    "empty-cells",
    "fill",
    "filter",
    "flex",
    "flex-basis",
    "flex-direction",
    "flex-flow",
    "flex-grow",
    "flex-shrink",
    "flex-wrap",
    "float",
    "font",
    "font-family",
    "font-feature-settings",
    "font-size",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "gap",
    "grid",
    "grid-area",
    "grid-auto-columns",
    "grid-auto-flow",
    "grid-auto-rows",
    "grid-column",
    "grid-column-end",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-start",
    "grid-template",
    "grid-template-areas",
    "grid-template-columns",
    "grid-template-rows",
    "height",
    "hyphens",
    "inset",
    "isolation",
    "justify-content",
    "justify-items",
    "justify-self",
    "left",
    "letter-spacing",
    "line-height",
    "list-style",
    "list-style-image",
    "list-style-position",
    "list-style-type",
    "margin",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "mask",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "mix-blend-mode",
    "object-fit",
    "object-position",
    "opacity",
    "order",
    "outline",
    "outline-color",
    "outline-offset",
    "outline-style",
    "outline-width",
    "overflow",
    "overflow-wrap",
    "overflow-x",
    "overflow-y",
    "padding",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "perspective",
    "perspective-origin",
    "place-content",
    "place-items",
    "place-self",
    "pointer-events",
    "position",
    "quotes",
    "resize",
    "right",
    "rotate",
    "row-gap",
    "scale",
    "scroll-behavior",
    "stroke",
    "stroke-width",
    "tab-size",
    "table-layout",
    "text-align",
    "text-decoration",
    "text-decoration-color",
    "text-decoration-line",
    "text-decoration-style",
    "text-indent",
    "text-overflow",
    "text-shadow",
    "text-transform",
    "top",
    "transform",
    "transform-origin",
    "transform-style",
    "transition",
    "transition-delay",
    "transition-duration",
    "transition-property",
    "transition-timing-function",
    "translate",
    "unicode-bidi",
    "user-select",
    "vertical-align",
    "visibility",
    "white-space",
    "width",
    "will-change",
    "word-break",
    "word-spacing",
    "word-wrap",
    "writing-mode",
    "z-index",
];

static STANDARD: Lazy<PropertyAllowList> =
    Lazy::new(|| PropertyAllowList::new(CSS_PROPERTIES.iter().copied()));

/// A frozen set of CSS property names.
///
/// Names are stored dash-cased; lookups accept either the camelCase form
/// used in style books or the dash-cased CSS form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAllowList {
    names: HashSet<String>,
}

impl PropertyAllowList {
    /// Builds an allow-list from property names in either case style.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| dash_camel_case(name.as_ref()))
                .collect(),
        }
    }

    /// The builtin list of standard properties ([`CSS_PROPERTIES`]).
    pub fn standard() -> &'static PropertyAllowList {
        &STANDARD
    }

    /// Returns a copy extended with more property names.
    pub fn with<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = self.names.clone();
        names.extend(extra.into_iter().map(|name| dash_camel_case(name.as_ref())));
        Self { names }
    }

    /// Returns true if `key` names a known property.
    ///
    /// Custom properties (`--name`) always count as known.
    pub fn contains(&self, key: &str) -> bool {
        key.starts_with("--") || self.names.contains(&dash_camel_case(key))
    }

    /// Number of names in the list.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for PropertyAllowList {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_accepts_both_cases() {
        let list = PropertyAllowList::standard();
        assert!(list.contains("transformOrigin"));
        assert!(list.contains("transform-origin"));
        assert!(list.contains("color"));
    }

    #[test]
    fn test_selectors_are_not_properties() {
        let list = PropertyAllowList::standard();
        assert!(!list.contains("& > *"));
        assert!(!list.contains("title"));
        assert!(!list.contains("?body"));
    }

    #[test]
    fn test_custom_properties_are_known() {
        assert!(PropertyAllowList::standard().contains("--accent"));
    }

    #[test]
    fn test_with_extends_copy_only() {
        let extended = PropertyAllowList::standard().with(["WebkitLineClamp"]);
        assert!(extended.contains("WebkitLineClamp"));
        assert!(!PropertyAllowList::standard().contains("WebkitLineClamp"));
        assert_eq!(extended.len(), PropertyAllowList::standard().len() + 1);
    }
}
