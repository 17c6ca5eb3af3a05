//! Width buckets for responsive classes.

use indexmap::IndexMap;
use log::debug;
use std::fmt;

use crate::compile::{MagicCompiler, StyleSink};
use crate::style::StyleBook;

/// Bucket names and their minimum widths, narrowest first.
pub const BREAKPOINTS: [(&str, u32); 5] = [
    ("xs", 0),
    ("sm", 600),
    ("md", 900),
    ("lg", 1200),
    ("xl", 1536),
];

type Listener = Box<dyn Fn(&str) + Send + Sync>;

/// Maps a container width to a `size-{bucket}` class.
///
/// Each bucket can carry a style book, compiled under `.size-{bucket}` the
/// first time the bucket is entered. Listeners hear about bucket changes.
///
/// # Example
///
/// ```rust
/// use magicbook::{style_book, MagicCompiler, SizeObserver};
///
/// let mut compiler = MagicCompiler::default();
/// let mut sizes = SizeObserver::new()
///     .with_book("xs", style_book! { "sidebar" => style_book! { "display" => "none" } });
///
/// assert_eq!(sizes.observe(320, &mut compiler), "size-xs");
/// assert_eq!(sizes.observe(1280, &mut compiler), "size-lg");
/// assert_eq!(compiler.sink().text(), ".size-xs .sidebar {\n  display: none;\n}\n");
/// ```
#[derive(Default)]
pub struct SizeObserver {
    books: IndexMap<String, StyleBook>,
    current: Option<&'static str>,
    listeners: Vec<Listener>,
}

impl SizeObserver {
    /// Creates an observer without bucket books.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a style book to a bucket.
    pub fn with_book(mut self, bucket: &str, book: StyleBook) -> Self {
        self.books.insert(bucket.to_string(), book);
        self
    }

    /// Returns the bucket a width falls into.
    pub fn bucket_for(width: u32) -> &'static str {
        BREAKPOINTS
            .iter()
            .rev()
            .find(|(_, min)| width >= *min)
            .map_or(BREAKPOINTS[0].0, |(name, _)| *name)
    }

    /// Records a new width and returns the class for its bucket.
    ///
    /// The bucket's book is compiled into `compiler` (a no-op after the first
    /// time) and listeners are notified when the bucket changed.
    pub fn observe<S: StyleSink>(&mut self, width: u32, compiler: &mut MagicCompiler<S>) -> String {
        let bucket = Self::bucket_for(width);
        let class = format!("size-{}", bucket);

        if let Some(book) = self.books.get(bucket) {
            compiler.compile(book, &format!(".{}", class));
        }

        if self.current != Some(bucket) {
            debug!("width {} entered bucket {:?}", width, bucket);
            self.current = Some(bucket);
            for listener in &self.listeners {
                listener(&class);
            }
        }
        class
    }

    /// Registers a callback invoked with the new class on bucket changes.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// The class of the last observed bucket.
    pub fn current(&self) -> Option<String> {
        self.current.map(|bucket| format!("size-{}", bucket))
    }
}

impl fmt::Debug for SizeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeObserver")
            .field("books", &self.books.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_book;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_breakpoints() {
        assert_eq!(SizeObserver::bucket_for(0), "xs");
        assert_eq!(SizeObserver::bucket_for(599), "xs");
        assert_eq!(SizeObserver::bucket_for(600), "sm");
        assert_eq!(SizeObserver::bucket_for(899), "sm");
        assert_eq!(SizeObserver::bucket_for(900), "md");
        assert_eq!(SizeObserver::bucket_for(1200), "lg");
        assert_eq!(SizeObserver::bucket_for(1535), "lg");
        assert_eq!(SizeObserver::bucket_for(4000), "xl");
    }

    #[test]
    fn test_listeners_hear_bucket_changes_only() {
        let mut compiler = MagicCompiler::default();
        let mut sizes = SizeObserver::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        sizes.on_change(move |class| sink.lock().unwrap().push(class.to_string()));

        sizes.observe(300, &mut compiler);
        sizes.observe(310, &mut compiler);
        sizes.observe(1000, &mut compiler);
        sizes.observe(200, &mut compiler);

        assert_eq!(*seen.lock().unwrap(), vec!["size-xs", "size-md", "size-xs"]);
        assert_eq!(sizes.current().as_deref(), Some("size-xs"));
    }

    #[test]
    fn test_bucket_book_compiled_once() {
        let mut compiler = MagicCompiler::default();
        let mut sizes = SizeObserver::new()
            .with_book("md", style_book! { "columns" => style_book! { "columnCount" => 2 } });

        sizes.observe(950, &mut compiler);
        sizes.observe(100, &mut compiler);
        sizes.observe(1000, &mut compiler);

        assert_eq!(compiler.sink().len(), 1);
        assert_eq!(compiler.classes().get("columns"), Some("columns"));
    }
}
