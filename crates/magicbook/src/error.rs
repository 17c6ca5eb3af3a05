//! Error types.
//!
//! Only programming mistakes in a static style catalogue and theme loading
//! failures are errors. Malformed style values never are: they simply
//! produce no CSS.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the style catalogue and theme configuration.
#[derive(Error, Debug)]
pub enum MagicError {
    /// A label word is not part of the label catalogue.
    #[error("no label '{word}' in phrase '{phrase}'")]
    UnknownLabel {
        /// The word that failed to resolve.
        word: String,
        /// The full phrase being resolved.
        phrase: String,
    },

    /// A class key passed to `cast` has never been compiled.
    #[error("failed to cast '{token}': no compiled class with that key")]
    UnknownToken {
        /// The unresolved class key.
        token: String,
    },

    /// An octave asked its builtin table for an index past its end.
    #[error("octave index {index} out of range for builtin '{scale}' table of {len} entries")]
    OctaveIndex {
        /// Which builtin table was consulted.
        scale: &'static str,
        /// The index requested.
        index: usize,
        /// Number of entries in the builtin table.
        len: usize,
    },

    /// A theme fragment could not be turned into a theme.
    #[error("invalid theme '{name}': {details}")]
    ThemeParse {
        /// Name the fragment was registered under.
        name: String,
        /// What the deserializer reported.
        details: String,
    },

    /// A theme document was not a mapping of theme names to fragments.
    #[error("theme document must map theme names to theme fragments, found {found}")]
    ThemeDocument {
        /// Kind of value found at the document root.
        found: &'static str,
    },

    /// A theme file could not be loaded.
    #[error("failed to load theme file {path:?}: {source}")]
    ThemeFile {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<MagicError>,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for fallible catalogue and theme operations.
pub type MagicResult<T> = Result<T, MagicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_display() {
        let err = MagicError::UnknownLabel {
            word: "HUGE".to_string(),
            phrase: "SIZE HUGE".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HUGE"));
        assert!(msg.contains("SIZE HUGE"));
    }

    #[test]
    fn test_octave_index_display() {
        let err = MagicError::OctaveIndex {
            scale: "spacing",
            index: 9,
            len: 6,
        };
        assert_eq!(
            err.to_string(),
            "octave index 9 out of range for builtin 'spacing' table of 6 entries"
        );
    }

    #[test]
    fn test_theme_file_keeps_source() {
        use std::error::Error as _;

        let err = MagicError::ThemeFile {
            path: PathBuf::from("themes.yaml"),
            source: Box::new(MagicError::ThemeDocument { found: "a list" }),
        };
        assert!(err.to_string().contains("themes.yaml"));
        assert!(err.source().is_some());
    }
}
