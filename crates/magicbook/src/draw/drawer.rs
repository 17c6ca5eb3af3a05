//! Drawing utility-class families from compact tables.

use crate::style::{StyleBook, StyleValue};
use crate::util::camel_case_dash;

/// Table key holding declarations shared by every drawn entry.
pub const SHARED: &str = "*";

/// Which CSS properties the values of a table are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DrawProperty {
    /// The camelCase form of the table prefix (`"flex-wrap"` → `flexWrap`).
    #[default]
    Prefix,
    /// A single property.
    One(String),
    /// Every listed property receives the same value.
    Many(Vec<String>),
    /// Each value is itself a table, drawn with the inner property under
    /// the prefix extended by its suffix.
    Nested(Box<DrawProperty>),
}

impl DrawProperty {
    /// Wraps `inner` for two-level tables.
    pub fn nested(inner: impl Into<DrawProperty>) -> Self {
        DrawProperty::Nested(Box::new(inner.into()))
    }

    fn names(&self, prefix: &str) -> Vec<String> {
        match self {
            DrawProperty::Prefix => vec![camel_case_dash(prefix)],
            DrawProperty::One(name) => vec![name.clone()],
            DrawProperty::Many(names) => names.clone(),
            DrawProperty::Nested(inner) => inner.names(prefix),
        }
    }
}

impl From<&str> for DrawProperty {
    fn from(name: &str) -> Self {
        DrawProperty::One(name.to_string())
    }
}

impl From<String> for DrawProperty {
    fn from(name: String) -> Self {
        DrawProperty::One(name)
    }
}

impl From<Vec<&str>> for DrawProperty {
    fn from(names: Vec<&str>) -> Self {
        DrawProperty::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DrawProperty {
    fn from(names: [&str; N]) -> Self {
        DrawProperty::Many(names.iter().map(|name| name.to_string()).collect())
    }
}

impl From<Option<&str>> for DrawProperty {
    fn from(name: Option<&str>) -> Self {
        name.map_or(DrawProperty::Prefix, DrawProperty::from)
    }
}

/// Expands a `{ suffix: value }` table into a style book.
///
/// Every entry other than [`SHARED`] produces a class keyed
/// `prefix + suffix` whose body assigns `value` to the chosen properties.
/// Declarations under the `"*"` key are copied into every body first.
/// Absent values are skipped.
///
/// # Example
///
/// ```rust
/// use magicbook::{draw_magic_table, style_book, StyleValue};
///
/// let book = draw_magic_table(
///     "color",
///     &style_book! { "" => "inherit", "White" => "white" },
///     ["color", "fill"],
/// );
///
/// let keys: Vec<&str> = book.keys().collect();
/// assert_eq!(keys, vec!["color", "colorWhite"]);
///
/// let white = book.get("colorWhite").and_then(StyleValue::as_book).unwrap();
/// assert_eq!(white.get("fill"), Some(&StyleValue::from("white")));
/// ```
pub fn draw_magic_table(
    prefix: &str,
    table: &StyleBook,
    property: impl Into<DrawProperty>,
) -> StyleBook {
    draw(prefix, table, &property.into())
}

fn draw(prefix: &str, table: &StyleBook, property: &DrawProperty) -> StyleBook {
    let shared = table.get(SHARED).and_then(StyleValue::as_book);
    let mut book = StyleBook::new();

    for (suffix, value) in table.iter() {
        if suffix == SHARED || value.is_absent() {
            continue;
        }
        let key = format!("{}{}", prefix, suffix);

        match (property, value) {
            (DrawProperty::Nested(inner), StyleValue::Book(sub)) => {
                for (drawn_key, drawn) in draw(&key, sub, inner) {
                    let body = match drawn {
                        StyleValue::Book(body) => StyleValue::Book(with_shared(shared, &body)),
                        other => other,
                    };
                    book.insert(&drawn_key, body);
                }
            }
            _ => {
                let mut body = with_shared(shared, &StyleBook::new());
                for name in property.names(prefix) {
                    body.insert(&name, value.clone());
                }
                book.insert(&key, body);
            }
        }
    }

    book
}

fn with_shared(shared: Option<&StyleBook>, body: &StyleBook) -> StyleBook {
    let mut merged = shared.cloned().unwrap_or_default();
    merged.extend_from(body);
    merged
}
