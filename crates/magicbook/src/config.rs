//! Configuration for a [`Magic`](crate::Magic) instance.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{MagicError, MagicResult};

/// Startup settings, usually read from a YAML or JSON file.
///
/// Every field is optional in the document.
///
/// ```yaml
/// theme: dark
/// follow_system: false
/// base_scope: ""
/// include_base: true
/// themes:
///   ocean:
///     palette:
///       divider: "#0af"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagicConfig {
    /// Name of the initially active theme.
    pub theme: String,
    /// Pick `light` or `dark` from the OS colour mode instead of `theme`.
    pub follow_system: bool,
    /// Scope the base utility book is compiled under.
    pub base_scope: String,
    /// Compile the base utility book on startup.
    pub include_base: bool,
    /// Theme document (`name: fragment`) registered on startup.
    pub themes: Value,
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            follow_system: false,
            base_scope: String::new(),
            include_base: true,
            themes: Value::Null,
        }
    }
}

impl MagicConfig {
    /// Parses a YAML configuration document.
    pub fn from_yaml_str(source: &str) -> MagicResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON configuration document.
    pub fn from_json_str(source: &str) -> MagicResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a configuration file. `.yaml` and `.yml` files are read as
    /// YAML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> MagicResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let parsed = if yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        };
        parsed.map_err(|source| MagicError::ThemeFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = MagicConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, MagicConfig::default());
        assert!(config.include_base);
    }

    #[test]
    fn test_yaml_document() {
        let config = MagicConfig::from_yaml_str(
            "theme: dark\nfollow_system: true\nthemes:\n  ocean:\n    palette:\n      divider: \"#0af\"\n",
        )
        .unwrap();
        assert_eq!(config.theme, "dark");
        assert!(config.follow_system);
        assert_eq!(config.themes["ocean"]["palette"]["divider"], json!("#0af"));
    }

    #[test]
    fn test_json_document() {
        let config =
            MagicConfig::from_json_str(r#"{ "include_base": false, "base_scope": ".app" }"#).unwrap();
        assert!(!config.include_base);
        assert_eq!(config.base_scope, ".app");
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magic.yml");
        fs::write(&path, "theme: [not, a, name]\n").unwrap();

        let err = MagicConfig::load(&path).unwrap_err();
        assert!(matches!(err, MagicError::ThemeFile { .. }));
        assert!(err.to_string().contains("magic.yml"));
    }
}
