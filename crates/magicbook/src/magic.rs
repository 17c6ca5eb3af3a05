//! The themed magic front end.

use indexmap::IndexMap;
use log::debug;

use crate::books::base_magic_book;
use crate::compile::{Document, MagicCompiler, StyleSink};
use crate::config::MagicConfig;
use crate::error::MagicResult;
use crate::style::{ClassTable, StyleBook};
use crate::theme::{
    detect_color_mode, StyleGenerationCache, StyleGenerator, SubscriptionId, ThemeRegistry,
};

/// Compiler, theme registry and generation cache bundled together.
///
/// [`Magic::theme_magic`] compiles a generator for a theme the first time it
/// is asked for and returns the shared class table on every later call.
///
/// # Example
///
/// ```rust
/// use magicbook::{generator, style_book, Magic, Theme};
///
/// let mut magic = Magic::default();
/// let cards = generator("cards", |theme: &Theme, _: &str| {
///     style_book! {
///         "card" => style_book! { "backgroundColor" => &theme.palette.background.paper },
///     }
/// });
///
/// magic.theme_magic("light", &cards).unwrap();
/// magic.theme_magic("dark", &cards).unwrap();
/// magic.theme_magic("dark", &cards).unwrap();
///
/// assert_eq!(magic.cast("card").unwrap(), "card");
/// assert_eq!(
///     magic.sink().text(),
///     ".light .card {\n  background-color: #fff;\n}\n.dark .card {\n  background-color: #424242;\n}\n"
/// );
/// ```
#[derive(Debug)]
pub struct Magic<S = Document> {
    compiler: MagicCompiler<S>,
    themes: ThemeRegistry,
    cache: StyleGenerationCache,
}

impl<S: StyleSink> Magic<S> {
    /// Creates an instance injecting into `sink`, with the builtin themes.
    pub fn new(sink: S) -> Self {
        Self {
            compiler: MagicCompiler::new(sink),
            themes: ThemeRegistry::new(),
            cache: StyleGenerationCache::new(),
        }
    }

    /// Creates an instance from a configuration.
    ///
    /// Registers the configured themes, selects the active theme (from the
    /// OS colour mode when `follow_system` is set) and compiles the base
    /// utility book when `include_base` is set.
    pub fn with_config(sink: S, config: &MagicConfig) -> MagicResult<Self> {
        let mut magic = Self::new(sink);
        if !config.themes.is_null() {
            magic.themes.register_document(&config.themes)?;
        }

        let active = if config.follow_system {
            detect_color_mode().theme_name()
        } else {
            config.theme.as_str()
        };
        magic.themes.set_theme(active);

        if config.include_base {
            magic.install_base(&config.base_scope);
        }
        Ok(magic)
    }

    /// Compiles `generator` for `theme_name` unless already done, and
    /// returns the class table.
    ///
    /// The book is generated from the registered theme (or the default
    /// theme) and compiled under `.{theme_name}`. An empty name compiles
    /// unscoped. A generator error leaves the pair uncompiled.
    pub fn theme_magic(
        &mut self,
        theme_name: &str,
        generator: &dyn StyleGenerator,
    ) -> MagicResult<&ClassTable> {
        if self.cache.is_applied(theme_name, generator.id()) {
            debug!(
                "generator {:?} already compiled for theme {:?}",
                generator.id(),
                theme_name
            );
            return Ok(self.compiler.classes());
        }

        let book = generator.generate(self.themes.get(theme_name), theme_name)?;
        let scope = theme_scope(theme_name);
        debug!(
            "compiling generator {:?} for theme {:?}",
            generator.id(),
            theme_name
        );
        let compiled = self.compiler.compile_tracked(&book, &scope);
        self.cache.mark(theme_name, generator.id(), compiled);
        Ok(self.compiler.classes())
    }

    /// Drops the compiled state of `theme_name`, so the next
    /// [`Magic::theme_magic`] call regenerates it from the current theme.
    ///
    /// Only selectors compiled by this theme's generators are forgotten;
    /// books compiled directly under the same scope stay compiled. Returns
    /// false if nothing had been compiled for that theme.
    pub fn invalidate_theme(&mut self, theme_name: &str) -> bool {
        let Some(selectors) = self.cache.invalidate(theme_name) else {
            return false;
        };
        self.compiler.forget(selectors.iter().map(String::as_str));
        true
    }

    /// [`Magic::theme_magic`] for the active theme.
    pub fn active_magic(&mut self, generator: &dyn StyleGenerator) -> MagicResult<&ClassTable> {
        let name = self.themes.theme_name().to_string();
        self.theme_magic(&name, generator)
    }

    /// Compiles the base utility book under `scope`.
    pub fn install_base(&mut self, scope: &str) -> &ClassTable {
        self.compiler.compile(&base_magic_book(), scope)
    }

    /// Compiles an unthemed book under `scope`.
    pub fn compile(&mut self, book: &StyleBook, scope: &str) -> &ClassTable {
        self.compiler.compile(book, scope)
    }

    /// Compiles every book of a bag under its scope.
    pub fn compile_bag(&mut self, bag: &IndexMap<String, StyleBook>) -> &ClassTable {
        self.compiler.compile_bag(bag)
    }

    /// Maps a space-separated list of class keys to class names.
    pub fn cast(&self, phrase: &str) -> MagicResult<String> {
        self.compiler.classes().cast(phrase)
    }

    /// Class names for the wrapper element of a themed subtree: the given
    /// classes followed by the theme name that scopes them.
    pub fn scope_class(&self, class_name: &str, theme_name: &str) -> String {
        [class_name, theme_name]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The compiled class table.
    pub fn classes(&self) -> &ClassTable {
        self.compiler.classes()
    }

    /// The underlying compiler.
    pub fn compiler(&self) -> &MagicCompiler<S> {
        &self.compiler
    }

    /// Mutable access to the underlying compiler.
    pub fn compiler_mut(&mut self) -> &mut MagicCompiler<S> {
        &mut self.compiler
    }

    /// The injection target.
    pub fn sink(&self) -> &S {
        self.compiler.sink()
    }

    /// The theme registry.
    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Mutable access to the theme registry.
    ///
    /// Editing a theme after it was compiled does not recompile it; call
    /// [`Magic::invalidate_theme`] for that.
    pub fn themes_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.themes
    }

    /// The generation cache.
    pub fn cache(&self) -> &StyleGenerationCache {
        &self.cache
    }

    /// Changes the active theme. See [`ThemeRegistry::set_theme`].
    pub fn set_theme(&mut self, name: &str) -> bool {
        self.themes.set_theme(name)
    }

    /// Re-reads the OS colour mode and activates the matching theme.
    pub fn follow_system(&mut self) -> bool {
        self.themes.set_theme(detect_color_mode().theme_name())
    }

    /// Subscribes to active theme changes. See [`ThemeRegistry::subscribe`].
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.themes.subscribe(subscriber)
    }
}

fn theme_scope(theme_name: &str) -> String {
    if theme_name.is_empty() {
        String::new()
    } else {
        format!(".{}", theme_name)
    }
}

impl Default for Magic<Document> {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MagicError;
    use crate::observer::SizeObserver;
    use crate::style_book;
    use crate::theme::{generator, Octave, Theme, ThemeMagicBook};
    use serde_json::json;

    fn magic() -> Magic {
        Magic::default()
    }

    #[test]
    fn test_theme_magic_compiles_once() {
        let mut magic = magic();
        magic.theme_magic("light", &ThemeMagicBook).unwrap();
        let sheets = magic.sink().len();
        magic.theme_magic("light", &ThemeMagicBook).unwrap();
        assert_eq!(magic.sink().len(), sheets);
        assert!(magic.cache().is_applied("light", ThemeMagicBook::ID));
    }

    #[test]
    fn test_unknown_theme_uses_default_with_own_scope() {
        let mut magic = magic();
        let gen = generator("divider", |theme: &Theme, _: &str| {
            style_book! { "rule" => style_book! { "borderColor" => &theme.palette.divider } }
        });
        magic.theme_magic("ocean", &gen).unwrap();
        assert_eq!(
            magic.sink().text(),
            ".ocean .rule {\n  border-color: rgba(0, 0, 0, 0.12);\n}\n"
        );
    }

    #[test]
    fn test_empty_theme_name_is_unscoped() {
        let mut magic = magic();
        let gen = generator("plain", |_: &Theme, _: &str| {
            style_book! { "pad" => style_book! { "padding" => "16px" } }
        });
        magic.theme_magic("", &gen).unwrap();
        assert_eq!(magic.sink().text(), ".pad {\n  padding: 16px;\n}\n");
    }

    #[test]
    fn test_switching_theme_keeps_cache() {
        let mut magic = magic();
        magic.active_magic(&ThemeMagicBook).unwrap();
        magic.set_theme("dark");
        magic.active_magic(&ThemeMagicBook).unwrap();
        magic.set_theme("light");
        let sheets = magic.sink().len();
        magic.active_magic(&ThemeMagicBook).unwrap();

        assert_eq!(magic.sink().len(), sheets);
        assert_eq!(magic.cache().len(), 2);
    }

    #[test]
    fn test_invalidate_theme_recompiles_edits() {
        let mut magic = magic();
        let gen = generator("rule", |theme: &Theme, _: &str| {
            style_book! { "rule" => style_book! { "borderColor" => &theme.palette.divider } }
        });
        magic.theme_magic("light", &gen).unwrap();
        magic.theme_magic("dark", &gen).unwrap();

        magic
            .themes_mut()
            .edit("light", |theme| theme.palette.divider = "#f00".to_string());
        assert!(magic.invalidate_theme("light"));
        assert!(!magic.invalidate_theme("sepia"));
        magic.theme_magic("light", &gen).unwrap();

        assert_eq!(magic.sink().len(), 3);
        assert!(magic
            .sink()
            .text()
            .ends_with(".light .rule {\n  border-color: #f00;\n}\n"));
        assert!(magic.cache().is_applied("dark", "rule"));
    }

    #[test]
    fn test_invalidate_empty_theme_keeps_direct_compiles() {
        let mut magic = magic();
        let card = style_book! { "card" => style_book! { "padding" => "8px" } };
        let gen = generator("plain", |_: &Theme, _: &str| {
            style_book! { "pad" => style_book! { "padding" => "16px" } }
        });

        magic.compile(&card, ".light");
        magic.install_base(".light");
        magic.theme_magic("", &gen).unwrap();
        let sheets = magic.sink().len();

        assert!(magic.invalidate_theme(""));
        magic.compile(&card, ".light");
        magic.install_base(".light");
        assert_eq!(magic.sink().len(), sheets);

        magic.theme_magic("", &gen).unwrap();
        assert_eq!(magic.sink().len(), sheets + 1);
        assert!(magic.sink().text().ends_with(".pad {\n  padding: 16px;\n}\n"));
    }

    #[test]
    fn test_invalidate_theme_keeps_other_books_in_its_scope() {
        let mut magic = magic();
        let card = style_book! { "card" => style_book! { "padding" => "8px" } };
        magic.compile(&card, ".light");
        magic.theme_magic("light", &ThemeMagicBook).unwrap();
        let sheets = magic.sink().len();

        assert!(magic.invalidate_theme("light"));
        magic.compile(&card, ".light");
        assert_eq!(magic.sink().len(), sheets);
        assert!(!magic.cache().is_applied("light", ThemeMagicBook::ID));
    }

    #[test]
    fn test_invalidate_theme_spares_size_buckets() {
        let mut magic = magic();
        let mut sizes = SizeObserver::new()
            .with_book("xs", style_book! { "sidebar" => style_book! { "display" => "none" } });
        let gen = generator("plain", |_: &Theme, _: &str| {
            style_book! { "pad" => style_book! { "padding" => "16px" } }
        });

        sizes.observe(100, magic.compiler_mut());
        magic.theme_magic("", &gen).unwrap();
        let sheets = magic.sink().len();

        magic.invalidate_theme("");
        sizes.observe(110, magic.compiler_mut());
        assert_eq!(magic.sink().len(), sheets);
    }

    #[test]
    fn test_generator_error_leaves_pair_uncompiled() {
        let mut magic = magic();
        magic
            .themes_mut()
            .edit("broken", |theme| theme.spacing_oct = vec![Octave::new(0, 50)]);

        let err = magic.theme_magic("broken", &ThemeMagicBook).unwrap_err();
        assert!(matches!(err, MagicError::OctaveIndex { .. }));
        assert!(!magic.cache().is_applied("broken", ThemeMagicBook::ID));
        assert!(magic.sink().is_empty());
    }

    #[test]
    fn test_with_config() {
        let config = MagicConfig {
            theme: "ocean".to_string(),
            include_base: true,
            base_scope: String::new(),
            themes: json!({ "ocean": { "palette": { "type": "dark" } } }),
            ..MagicConfig::default()
        };
        let mut magic = Magic::with_config(Document::new(), &config).unwrap();

        assert_eq!(magic.themes().theme_name(), "ocean");
        assert_eq!(magic.classes().get("flexGrow"), Some("flex-grow"));
        assert_eq!(magic.sink().len(), 1);

        magic.active_magic(&ThemeMagicBook).unwrap();
        assert!(magic.sink().text().contains(".ocean .paper"));
    }

    #[test]
    fn test_with_config_rejects_bad_themes() {
        let config = MagicConfig {
            themes: json!(["ocean"]),
            ..MagicConfig::default()
        };
        let err = Magic::with_config(Document::new(), &config).unwrap_err();
        assert!(matches!(err, MagicError::ThemeDocument { .. }));
    }

    #[test]
    fn test_cast_and_scope_class() {
        let mut magic = magic();
        magic.install_base("");
        assert_eq!(
            magic.cast("horizontalSmall padSmall").unwrap(),
            "horizontal-small pad-small"
        );
        assert!(magic.cast("padEnormous").is_err());
        assert_eq!(magic.scope_class("pad", "dark"), "pad dark");
        assert_eq!(magic.scope_class("", "dark"), "dark");
    }
}
