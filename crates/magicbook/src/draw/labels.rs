//! Label catalogue for composing class keys from words.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::{MagicError, MagicResult};
use crate::util::{capitalize, decapitalize};

static STANDARD: Lazy<Labels> = Lazy::new(|| {
    Labels::new()
        .add("SIZE", "size")
        .add("HORIZONTAL", "horizontal")
        .add("VERTICAL", "vertical")
        .add("FULL", "full")
        .add("TEXT_ALIGN", "textAlign")
        .add("ALIGN_ITEMS", "alignItems")
        .add("JUSTIFY_CONTENT", "justifyContent")
        .add("CENTER", "center")
        .add("START", "start")
        .add("END", "end")
        .add("SPACE_BETWEEN", "spaceBetween")
        .add("SMALL", "small")
        .add("FLEX", "flex")
        .add("WRAP", "wrap")
});

/// A catalogue mapping upper-case label words to camelCase fragments.
///
/// Phrases such as `"SIZE VERTICAL FULL"` are resolved word by word into a
/// class key (`sizeVerticalFull`), so a misspelt word in a static style
/// catalogue fails immediately instead of producing a class nobody uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    words: IndexMap<String, String>,
}

impl Labels {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin layout labels.
    pub fn standard() -> &'static Labels {
        &STANDARD
    }

    /// Adds a label word, returning the updated catalogue for chaining.
    pub fn add(mut self, word: &str, label: &str) -> Self {
        self.words.insert(word.to_string(), label.to_string());
        self
    }

    /// Returns the fragment for a single word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Resolves a space-separated phrase into a camelCase class key.
    ///
    /// # Errors
    ///
    /// Returns [`MagicError::UnknownLabel`] for the first word missing from
    /// the catalogue.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magicbook::Labels;
    ///
    /// let labels = Labels::standard();
    /// assert_eq!(labels.lab("SIZE VERTICAL FULL").unwrap(), "sizeVerticalFull");
    /// assert_eq!(labels.lab("JUSTIFY_CONTENT SPACE_BETWEEN").unwrap(), "justifyContentSpaceBetween");
    /// assert!(labels.lab("SIZE ENORMOUS").is_err());
    /// ```
    pub fn lab(&self, phrase: &str) -> MagicResult<String> {
        let mut key = String::new();
        for word in phrase.split_whitespace() {
            let label = self.get(word).ok_or_else(|| MagicError::UnknownLabel {
                word: word.to_string(),
                phrase: phrase.to_string(),
            })?;
            key.push_str(&capitalize(label));
        }
        Ok(decapitalize(&key))
    }
}

/// Resolves `phrase` with the builtin labels. See [`Labels::lab`].
pub fn lab(phrase: &str) -> MagicResult<String> {
    Labels::standard().lab(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(lab("HORIZONTAL").unwrap(), "horizontal");
    }

    #[test]
    fn test_multi_word_phrase() {
        assert_eq!(lab("HORIZONTAL SMALL").unwrap(), "horizontalSmall");
        assert_eq!(lab("TEXT_ALIGN CENTER").unwrap(), "textAlignCenter");
    }

    #[test]
    fn test_unknown_word_is_an_error() {
        let err = lab("FLEX WRAPPED").unwrap_err();
        match err {
            MagicError::UnknownLabel { word, phrase } => {
                assert_eq!(word, "WRAPPED");
                assert_eq!(phrase, "FLEX WRAPPED");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_catalogue() {
        let labels = Labels::new().add("PAD", "pad").add("TINY", "tiny");
        assert_eq!(labels.lab("PAD TINY").unwrap(), "padTiny");
        assert!(labels.lab("SIZE").is_err());
    }
}
