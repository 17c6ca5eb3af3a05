//! Style books: ordered mappings from keys to style values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// An insertion-ordered mapping from keys to [`StyleValue`]s.
///
/// At the top level keys are class keys (`padSmall`) or selector escapes
/// (`!MuiButton-root`, `?body`); inside a body they are CSS property names or
/// nested selectors (`& > *`). Insertion order decides the order of the
/// emitted CSS.
///
/// # Example
///
/// ```rust
/// use magicbook::StyleBook;
///
/// let book = StyleBook::new()
///     .add("padSmall", StyleBook::new().add("padding", "8px"))
///     .add("flexGrowChildren", StyleBook::new()
///         .add("& > *", StyleBook::new().add("flexGrow", 1)));
///
/// assert_eq!(book.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleBook {
    entries: IndexMap<String, StyleValue>,
}

impl StyleBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated book for chaining.
    ///
    /// An existing entry with the same key is replaced in place.
    pub fn add<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, returning the previous value for `key`.
    pub fn insert<V: Into<StyleValue>>(&mut self, key: &str, value: V) -> Option<StyleValue> {
        self.entries.insert(key.to_string(), value.into())
    }

    /// Looks up an entry.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Returns true if `key` has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an entry, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.shift_remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the book has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &StyleValue> {
        self.entries.values()
    }

    /// Copies every entry of `other` into this book, later keys winning.
    ///
    /// This is a shallow merge, like spreading one object into another.
    pub fn extend_from(&mut self, other: &StyleBook) {
        for (key, value) in other.iter() {
            self.entries.insert(key.to_string(), value.clone());
        }
    }

    /// Shallow-merges several books into one, later keys winning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magicbook::StyleBook;
    ///
    /// let base = StyleBook::new().add("pad", StyleBook::new().add("padding", "16px"));
    /// let themed = StyleBook::new().add("paper", StyleBook::new().add("backgroundColor", "#fff"));
    /// let all = StyleBook::merge([&base, &themed]);
    ///
    /// assert!(all.contains_key("pad"));
    /// assert!(all.contains_key("paper"));
    /// ```
    pub fn merge<'a, I>(books: I) -> StyleBook
    where
        I: IntoIterator<Item = &'a StyleBook>,
    {
        let mut merged = StyleBook::new();
        for book in books {
            merged.extend_from(book);
        }
        merged
    }
}

impl FromIterator<(String, StyleValue)> for StyleBook {
    fn from_iter<T: IntoIterator<Item = (String, StyleValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StyleBook {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds a [`StyleBook`] from `key => value` pairs.
///
/// Values are anything convertible into a [`StyleValue`], including nested
/// `style_book!` invocations.
///
/// ```rust
/// use magicbook::style_book;
///
/// let book = style_book! {
///     "blockHorizontal" => style_book! {
///         "& > *" => style_book! {
///             "float" => "left",
///             "marginLeft" => "16px",
///         },
///     },
/// };
/// assert!(book.contains_key("blockHorizontal"));
/// ```
#[macro_export]
macro_rules! style_book {
    () => { $crate::StyleBook::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::StyleBook::new()$(.add($key, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let book = StyleBook::new().add("b", "1").add("a", "2").add("c", "3");
        let keys: Vec<&str> = book.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_add_replaces_in_place() {
        let book = StyleBook::new().add("a", "1").add("b", "2").add("a", "3");
        let keys: Vec<&str> = book.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(book.get("a"), Some(&StyleValue::from("3")));
    }

    #[test]
    fn test_merge_later_wins() {
        let first = StyleBook::new().add("gap", "16px").add("display", "flex");
        let second = StyleBook::new().add("gap", "8px");
        let merged = StyleBook::merge([&first, &second]);
        assert_eq!(merged.get("gap"), Some(&StyleValue::from("8px")));
        assert_eq!(merged.get("display"), Some(&StyleValue::from("flex")));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = StyleBook::new().add("opacity", 1).add("width", "10px");
        let b = StyleBook::new().add("width", "10px").add("opacity", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut book = StyleBook::new().add("a", "1").add("b", "2").add("c", "3");
        assert_eq!(book.remove("b"), Some(StyleValue::from("2")));
        let keys: Vec<&str> = book.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_macro_builds_nested_books() {
        let book = crate::style_book! {
            "flexGrowChildren" => crate::style_book! { "& > *" => crate::style_book! { "flexGrow" => 1 } },
        };
        let inner = book.get("flexGrowChildren").and_then(StyleValue::as_book).unwrap();
        assert!(inner.contains_key("& > *"));
    }
}
