//! Named themes, the active theme and its subscribers.

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

use super::theme::{parse_error, Theme};
use crate::error::{MagicError, MagicResult};

/// Handle returned by [`ThemeRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&str) + Send + Sync>;

/// Registry of named themes.
///
/// Lookups for unknown names fall back to the default theme. Registering a
/// fragment deep-merges it onto the existing theme of that name, or onto the
/// default theme when the name is new.
///
/// # Example
///
/// ```rust
/// use magicbook::ThemeRegistry;
/// use serde_json::json;
///
/// let mut themes = ThemeRegistry::new();
/// themes
///     .register("ocean", &json!({ "palette": { "divider": "#0af" } }))
///     .unwrap();
///
/// assert_eq!(themes.get("ocean").palette.divider, "#0af");
/// assert_eq!(themes.get("unknown").palette.mode, "light");
/// ```
pub struct ThemeRegistry {
    themes: IndexMap<String, Theme>,
    default: Theme,
    active: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ThemeRegistry {
    /// Creates a registry holding the builtin `light` and `dark` themes.
    pub fn new() -> Self {
        let mut themes = IndexMap::new();
        themes.insert("light".to_string(), Theme::light());
        themes.insert("dark".to_string(), Theme::dark());
        Self {
            themes,
            default: Theme::light(),
            active: "light".to_string(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Replaces the fallback theme.
    pub fn with_default(mut self, default: Theme) -> Self {
        self.default = default;
        self
    }

    /// The fallback theme.
    pub fn default_theme(&self) -> &Theme {
        &self.default
    }

    /// Returns the theme called `name`, or the default theme.
    pub fn get(&self, name: &str) -> &Theme {
        match self.themes.get(name) {
            Some(theme) => theme,
            None => {
                debug!("no theme named {:?}, using the default theme", name);
                &self.default
            }
        }
    }

    /// Returns true if a theme called `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Names of all registered themes, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Deep-merges `fragment` onto the theme called `name` (or the default
    /// theme) and stores the result under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MagicError::ThemeParse`] when the merged result is not a
    /// valid theme. The registry is left unchanged.
    pub fn register(&mut self, name: &str, fragment: &Value) -> MagicResult<&Theme> {
        let base = self.themes.get(name).unwrap_or(&self.default);
        let theme = base
            .merged(fragment)
            .map_err(|err| parse_error(name, err))?;
        debug!("registered theme {:?}", name);

        self.themes.insert(name.to_string(), theme);
        Ok(&self.themes[name])
    }

    /// Registers every `name: fragment` pair of a theme document.
    ///
    /// # Errors
    ///
    /// Returns [`MagicError::ThemeDocument`] when the document is not a
    /// mapping, or the first registration error.
    pub fn register_document(&mut self, document: &Value) -> MagicResult<()> {
        let Value::Object(entries) = document else {
            return Err(MagicError::ThemeDocument {
                found: value_kind(document),
            });
        };
        for (name, fragment) in entries {
            self.register(name, fragment)?;
        }
        Ok(())
    }

    /// Registers themes from a YAML document.
    pub fn register_yaml(&mut self, source: &str) -> MagicResult<()> {
        let document: Value = serde_yaml::from_str(source)?;
        self.register_document(&document)
    }

    /// Registers themes from a JSON document.
    pub fn register_json(&mut self, source: &str) -> MagicResult<()> {
        let document: Value = serde_json::from_str(source)?;
        self.register_document(&document)
    }

    /// Registers themes from a file. `.yaml` and `.yml` files are read as
    /// YAML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`MagicError::ThemeFile`] carrying the
    /// path and the underlying error.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> MagicResult<()> {
        let path = path.as_ref();
        let wrap = |source: MagicError| MagicError::ThemeFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        };

        let content = fs::read_to_string(path).map_err(|err| wrap(err.into()))?;
        let result = if is_yaml(path) {
            self.register_yaml(&content)
        } else {
            self.register_json(&content)
        };
        result.map_err(wrap)
    }

    /// Transforms every registered theme in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magicbook::ThemeRegistry;
    ///
    /// let mut themes = ThemeRegistry::new();
    /// themes.edit_themes(|_, theme| theme.typography.html_font_size = 14);
    /// assert!(themes.names().all(|name| themes.get(name).typography.html_font_size == 14));
    /// ```
    pub fn edit_themes<F>(&mut self, mut edit: F)
    where
        F: FnMut(&str, &mut Theme),
    {
        for (name, theme) in self.themes.iter_mut() {
            edit(name, theme);
        }
    }

    /// Transforms one theme in place, starting from the default theme when
    /// `name` is new.
    pub fn edit<F>(&mut self, name: &str, edit: F)
    where
        F: FnOnce(&mut Theme),
    {
        let default = &self.default;
        let theme = self
            .themes
            .entry(name.to_string())
            .or_insert_with(|| default.clone());
        edit(theme);
    }

    /// Name of the active theme.
    pub fn theme_name(&self) -> &str {
        &self.active
    }

    /// The active theme.
    pub fn active(&self) -> &Theme {
        self.get(&self.active)
    }

    /// Makes `name` the active theme, notifying subscribers if it changed.
    ///
    /// Returns true when the active theme changed.
    pub fn set_theme(&mut self, name: &str) -> bool {
        if self.active == name {
            return false;
        }
        debug!("active theme {:?} -> {:?}", self.active, name);
        self.active = name.to_string();
        for (_, subscriber) in &self.subscribers {
            subscriber(name);
        }
        true
    }

    /// Registers a callback invoked with the new name whenever the active
    /// theme changes.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        let removed = self.subscribers.len() != before;
        if !removed {
            warn!("unsubscribe: no subscriber with id {:?}", id);
        }
        removed
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.themes.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
