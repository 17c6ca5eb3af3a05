//! Style values: terminal CSS values or nested books.

use serde::{Deserialize, Serialize};

use super::book::StyleBook;

/// A value in a [`StyleBook`].
///
/// Terminal values (`Text`, `Number`) become CSS declarations; `Book` values
/// nest selectors. `Absent` stands in for optional fragments that were not
/// supplied and never produces any CSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum StyleValue {
    /// A literal CSS value such as `"8px"` or `"flex"`.
    Text(String),
    /// A numeric CSS value, written without a unit.
    Number(f64),
    /// A nested style book (selector nesting or a compound value).
    Book(StyleBook),
    /// No value. Compiles to nothing.
    #[default]
    Absent,
}

impl StyleValue {
    /// Returns true for values that become declarations directly.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StyleValue::Text(_) | StyleValue::Number(_))
    }

    /// Returns true for the absent value.
    pub fn is_absent(&self) -> bool {
        matches!(self, StyleValue::Absent)
    }

    /// Returns the nested book, if this value is one.
    pub fn as_book(&self) -> Option<&StyleBook> {
        match self {
            StyleValue::Book(book) => Some(book),
            _ => None,
        }
    }

    /// Renders the value as CSS text.
    ///
    /// Books render as the space-joined CSS text of their entries, which is
    /// how compound values (`transformOrigin: { x: "left", y: "top" }`) are
    /// written. Returns `None` when there is nothing to write.
    pub fn to_css(&self) -> Option<String> {
        match self {
            StyleValue::Text(text) => Some(text.clone()),
            StyleValue::Number(n) => Some(n.to_string()),
            StyleValue::Book(book) => {
                let parts: Vec<String> = book.values().filter_map(StyleValue::to_css).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(" "))
                }
            }
            StyleValue::Absent => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Text(value.clone())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<StyleBook> for StyleValue {
    fn from(book: StyleBook) -> Self {
        StyleValue::Book(book)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Absent, Into::into)
    }
}
