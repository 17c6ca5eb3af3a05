//! The magic compiler: style books in, class table and stylesheets out.

use indexmap::IndexMap;
use log::{debug, trace};

use super::emit::emit;
use super::flatten::{Flattener, SelectorMap};
use super::key::SelectorKey;
use super::properties::PropertyAllowList;
use super::sink::{Document, StyleSink};
use crate::style::{ClassTable, StyleBook};

/// Compiles style books into CSS and an append-only [`ClassTable`].
///
/// Every top-level key is converted under the scope, flattened, emitted and
/// registered. A converted selector is compiled at most once per compiler,
/// so compiling the same book twice injects nothing the second time.
///
/// # Example
///
/// ```rust
/// use magicbook::{style_book, Document, MagicCompiler};
///
/// let mut compiler = MagicCompiler::new(Document::new());
/// let book = style_book! {
///     "padSmall" => style_book! { "padding" => "8px" },
/// };
///
/// let classes = compiler.compile(&book, ".light");
/// assert_eq!(classes.get("padSmall"), Some("pad-small"));
///
/// compiler.compile(&book, ".light");
/// assert_eq!(compiler.sink().len(), 1);
/// assert_eq!(compiler.sink().text(), ".light .pad-small {\n  padding: 8px;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct MagicCompiler<S = Document> {
    sink: S,
    classes: ClassTable,
    properties: PropertyAllowList,
}

impl<S: StyleSink> MagicCompiler<S> {
    /// Creates a compiler injecting into `sink`, using the standard
    /// property allow-list.
    pub fn new(sink: S) -> Self {
        Self::with_properties(sink, PropertyAllowList::default())
    }

    /// Creates a compiler with a custom property allow-list.
    pub fn with_properties(sink: S, properties: PropertyAllowList) -> Self {
        Self {
            sink,
            classes: ClassTable::new(),
            properties,
        }
    }

    /// Compiles `book` under `scope`, injecting all new CSS as one stylesheet.
    ///
    /// Keys whose value is not a book are ignored. Nothing is injected when
    /// every key was already compiled.
    pub fn compile(&mut self, book: &StyleBook, scope: &str) -> &ClassTable {
        self.compile_tracked(book, scope);
        &self.classes
    }

    /// Like [`MagicCompiler::compile`], but returns the top-level selectors
    /// this call compiled. Selectors that were already compiled are not
    /// included.
    pub fn compile_tracked(&mut self, book: &StyleBook, scope: &str) -> Vec<String> {
        let (css, compiled) = self.render(book, scope);
        if css.is_empty() {
            trace!("compile under {:?}: nothing new", scope);
        } else {
            debug!(
                "compile under {:?}: injecting {} bytes of CSS",
                scope,
                css.len()
            );
            self.sink.inject(&css);
        }
        compiled
    }

    /// Compiles every `(scope, book)` pair of a bag, one stylesheet per book.
    ///
    /// Returns the class table holding the classes of all books.
    pub fn compile_bag(&mut self, bag: &IndexMap<String, StyleBook>) -> &ClassTable {
        for (scope, book) in bag {
            self.compile(book, scope);
        }
        &self.classes
    }

    /// Forgets that `selectors` were compiled, so the next compile that
    /// produces them injects them again. Returns how many were forgotten.
    ///
    /// Earlier stylesheets stay in the sink; the new ones come later and
    /// take precedence.
    pub fn forget<'s>(&mut self, selectors: impl IntoIterator<Item = &'s str>) -> usize {
        let forgotten = self.classes.forget_selectors(selectors);
        debug!("forgot {} compiled selectors", forgotten);
        forgotten
    }

    /// The compiled class table.
    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// The property allow-list used to tell declarations from nesting.
    pub fn properties(&self) -> &PropertyAllowList {
        &self.properties
    }

    /// The injection target.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the injection target.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the compiler, returning its injection target.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn render(&mut self, book: &StyleBook, scope: &str) -> (String, Vec<String>) {
        let flattener = Flattener::new(&self.properties);
        let mut css = String::new();
        let mut compiled = Vec::new();

        for (key, value) in book.iter() {
            let Some(body) = value.as_book() else {
                trace!("skipping {:?}: value is not a style body", key);
                continue;
            };

            let parsed = SelectorKey::parse(key);
            let selector = parsed.convert(scope);
            if self.classes.contains_selector(&selector) {
                trace!("skipping {:?}: already compiled", selector);
                continue;
            }

            let mut rules = SelectorMap::new();
            flattener.flatten(&mut rules, &selector, body);
            css.push_str(&emit(&selector, &rules));

            self.classes.mark_selector(selector.clone());
            compiled.push(selector);
            if let Some(class) = parsed.class_name() {
                self.classes.insert_class(key.to_string(), class);
            }
        }

        (css, compiled)
    }
}

impl Default for MagicCompiler<Document> {
    fn default() -> Self {
        Self::new(Document::new())
    }
}
