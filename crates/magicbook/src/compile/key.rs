//! Selector key parsing and conversion.
//!
//! A style-book key is tagged by its first character:
//!
//! | Prefix | Variant                      | Converted form (scope `.light`)       |
//! |--------|------------------------------|---------------------------------------|
//! | `&`    | [`SelectorKey::Nested`]      | every `&` replaced by the parent      |
//! | `!`    | [`SelectorKey::RawAbsolute`] | every `!` replaced by `.light .`      |
//! | `?`    | [`SelectorKey::RawScoped`]   | every `?` replaced by `.light `       |
//! | other  | [`SelectorKey::Plain`]       | `.light .dash-cased-key`              |
//!
//! Keys are parsed once and the variant drives both nesting and whether the
//! key registers a class name.

use crate::util::dash_camel_case;

/// A style-book key, classified by its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKey<'a> {
    /// A camelCase class key such as `padSmall`.
    Plain(&'a str),
    /// A selector relative to its parent, such as `&:hover` or `& > *`.
    Nested(&'a str),
    /// One or more raw class selectors under the scope, such as
    /// `!MuiButton-root` or `!MuiInput-root, !MuiSelect-root`.
    RawAbsolute(&'a str),
    /// A raw selector under the scope, such as `?body` or `?h1, ?h2`.
    RawScoped(&'a str),
}

impl<'a> SelectorKey<'a> {
    /// Classifies a key by its first character.
    pub fn parse(key: &'a str) -> Self {
        match key.as_bytes().first() {
            Some(b'&') => SelectorKey::Nested(key),
            Some(b'!') => SelectorKey::RawAbsolute(key),
            Some(b'?') => SelectorKey::RawScoped(key),
            _ => SelectorKey::Plain(key),
        }
    }

    /// The key as written.
    pub fn as_str(&self) -> &'a str {
        match *self {
            SelectorKey::Plain(key)
            | SelectorKey::Nested(key)
            | SelectorKey::RawAbsolute(key)
            | SelectorKey::RawScoped(key) => key,
        }
    }

    /// Converts the key into a selector under `scope`.
    ///
    /// At the top of a book `scope` is the theme scope (`.light`, or empty
    /// for unscoped books). Inside a body it is the parent selector, so the
    /// same rules produce nested selectors. A parent that is a selector list
    /// is distributed: the key is converted under each entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magicbook::SelectorKey;
    ///
    /// assert_eq!(SelectorKey::parse("padSmall").convert(".light"), ".light .pad-small");
    /// assert_eq!(SelectorKey::parse("!MuiButton-root").convert(".light"), ".light .MuiButton-root");
    /// assert_eq!(SelectorKey::parse("?body").convert(".light"), ".light body");
    /// assert_eq!(SelectorKey::parse("&:hover").convert(".light .pad"), ".light .pad:hover");
    /// assert_eq!(SelectorKey::parse("&:hover").convert(".a, .b"), ".a:hover, .b:hover");
    /// ```
    pub fn convert(&self, scope: &str) -> String {
        let parents = split_selector_list(scope);
        let already_scoped = matches!(*self, SelectorKey::Plain(key)
            if !parents[0].is_empty() && key.starts_with(parents[0]));
        if already_scoped {
            return self.as_str().to_string();
        }
        if parents.len() > 1 && *self != SelectorKey::Nested("&") {
            return parents
                .iter()
                .map(|parent| self.convert_one(parent))
                .collect::<Vec<_>>()
                .join(", ");
        }
        self.convert_one(scope)
    }

    fn convert_one(&self, scope: &str) -> String {
        match *self {
            SelectorKey::Nested(key) => key.replace('&', scope),
            SelectorKey::RawAbsolute(key) => key.replace('!', &descend(scope, ".")),
            SelectorKey::RawScoped(key) => key.replace('?', &descend(scope, "")),
            SelectorKey::Plain(key) => {
                if !scope.is_empty() && key.starts_with(scope) {
                    key.to_string()
                } else {
                    descend(scope, &format!(".{}", dash_camel_case(key)))
                }
            }
        }
    }

    /// The class name this key registers, if any.
    ///
    /// Only plain identifier keys register classes; escapes and selectors
    /// written out in full do not.
    pub fn class_name(&self) -> Option<String> {
        match *self {
            SelectorKey::Plain(key) if is_identifier(key) => Some(dash_camel_case(key)),
            _ => None,
        }
    }
}

/// Converts `key` under `scope`. Shorthand for
/// `SelectorKey::parse(key).convert(scope)`.
pub fn convert(key: &str, scope: &str) -> String {
    SelectorKey::parse(key).convert(scope)
}

fn descend(scope: &str, selector: &str) -> String {
    if scope.is_empty() {
        selector.to_string()
    } else {
        format!("{} {}", scope, selector)
    }
}

/// Splits a selector list on its top-level commas.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts
}

fn is_identifier(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
