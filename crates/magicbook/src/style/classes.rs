//! The compiled class table ("magic").

use indexmap::{IndexMap, IndexSet};

use crate::error::{MagicError, MagicResult};

/// Compiled mapping from camelCase class keys to class names.
///
/// The table also remembers every scoped selector whose CSS has been
/// injected, which is what makes compilation idempotent. Entries are only
/// ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTable {
    classes: IndexMap<String, String>,
    selectors: IndexSet<String>,
}

impl ClassTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the class name for a camelCase key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.classes.get(key).map(String::as_str)
    }

    /// Returns true if a class is registered under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.classes.contains_key(key)
    }

    /// Returns true if CSS for this fully scoped selector was already injected.
    pub fn contains_selector(&self, selector: &str) -> bool {
        self.selectors.contains(selector)
    }

    /// Number of registered class keys.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no class keys are registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates `(key, class name)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates injected selectors in injection order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    /// Resolves a space-separated list of class keys into class names.
    ///
    /// # Errors
    ///
    /// Returns [`MagicError::UnknownToken`] for the first word that is not a
    /// registered key. An unknown key is a typo in the calling code, so it
    /// is reported instead of silently dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magicbook::{Document, MagicCompiler, StyleBook};
    ///
    /// let mut compiler = MagicCompiler::new(Document::new());
    /// compiler.compile(
    ///     &StyleBook::new()
    ///         .add("padSmall", StyleBook::new().add("padding", "8px"))
    ///         .add("flexGrow", StyleBook::new().add("flexGrow", 1)),
    ///     "",
    /// );
    ///
    /// let classes = compiler.classes().cast("padSmall flexGrow").unwrap();
    /// assert_eq!(classes, "pad-small flex-grow");
    /// ```
    pub fn cast(&self, phrase: &str) -> MagicResult<String> {
        let names = phrase
            .split_whitespace()
            .map(|word| {
                self.get(word).ok_or_else(|| MagicError::UnknownToken {
                    token: word.to_string(),
                })
            })
            .collect::<MagicResult<Vec<&str>>>()?;
        Ok(names.join(" "))
    }

    pub(crate) fn insert_class(&mut self, key: String, class: String) {
        self.classes.entry(key).or_insert(class);
    }

    pub(crate) fn mark_selector(&mut self, selector: String) {
        self.selectors.insert(selector);
    }

    /// Forgets the given compiled selectors. Class names are kept.
    pub(crate) fn forget_selectors<'s>(
        &mut self,
        selectors: impl IntoIterator<Item = &'s str>,
    ) -> usize {
        selectors
            .into_iter()
            .filter(|selector| self.selectors.shift_remove(*selector))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ClassTable {
        let mut table = ClassTable::new();
        table.insert_class("padSmall".into(), "pad-small".into());
        table.insert_class("h3".into(), "h-3".into());
        table
    }

    #[test]
    fn test_cast_maps_every_word() {
        assert_eq!(table().cast("padSmall  h3").unwrap(), "pad-small h-3");
        assert_eq!(table().cast("").unwrap(), "");
    }

    #[test]
    fn test_cast_unknown_word_fails() {
        let err = table().cast("padSmall padHuge").unwrap_err();
        assert!(matches!(err, MagicError::UnknownToken { ref token } if token == "padHuge"));
    }

    #[test]
    fn test_insert_never_overwrites() {
        let mut table = table();
        table.insert_class("padSmall".into(), "other".into());
        assert_eq!(table.get("padSmall"), Some("pad-small"));
    }

    #[test]
    fn test_forget_selectors_keeps_classes() {
        let mut table = table();
        table.mark_selector(".light .pad-small".into());
        table.mark_selector(".light .h-3".into());
        table.mark_selector(".lighter .pad-small".into());

        assert_eq!(table.forget_selectors([".light .pad-small", ".dark .pad-small"]), 1);
        assert!(!table.contains_selector(".light .pad-small"));
        assert!(table.contains_selector(".light .h-3"));
        assert!(table.contains_selector(".lighter .pad-small"));
        assert_eq!(table.get("padSmall"), Some("pad-small"));
    }

    #[test]
    fn test_selectors_are_tracked_separately() {
        let mut table = ClassTable::new();
        table.mark_selector(".light .pad".into());
        assert!(table.contains_selector(".light .pad"));
        assert!(!table.contains_selector(".dark .pad"));
        assert!(table.is_empty());
    }
}
