//! Stylesheet injection targets.

/// Where compiled CSS is injected.
///
/// Each compile call that produces CSS injects exactly once, so an
/// implementation can map one `inject` call to one `<style>` node.
pub trait StyleSink {
    /// Appends one stylesheet containing `css`.
    fn inject(&mut self, css: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn inject(&mut self, css: &str) {
        (**self).inject(css);
    }
}

impl<S: StyleSink + ?Sized> StyleSink for Box<S> {
    fn inject(&mut self, css: &str) {
        (**self).inject(css);
    }
}

/// An in-memory document head collecting injected stylesheets.
///
/// # Example
///
/// ```rust
/// use magicbook::{Document, StyleSink};
///
/// let mut doc = Document::new();
/// doc.inject(".pad {\n  padding: 16px;\n}\n");
/// assert_eq!(doc.len(), 1);
/// assert!(doc.text().contains("padding: 16px"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sheets: Vec<String>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The injected stylesheets, oldest first.
    pub fn stylesheets(&self) -> &[String] {
        &self.sheets
    }

    /// Number of injected stylesheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if nothing was injected.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// All injected CSS, concatenated in injection order.
    pub fn text(&self) -> String {
        self.sheets.concat()
    }
}

impl StyleSink for Document {
    fn inject(&mut self, css: &str) {
        self.sheets.push(css.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_keeps_order() {
        let mut doc = Document::new();
        doc.inject("a {}\n");
        doc.inject("b {}\n");
        assert_eq!(doc.stylesheets(), &["a {}\n".to_string(), "b {}\n".to_string()]);
        assert_eq!(doc.text(), "a {}\nb {}\n");
    }

    #[test]
    fn test_inject_through_mut_ref() {
        fn push<S: StyleSink>(mut sink: S) {
            sink.inject("x {}\n");
        }

        let mut doc = Document::new();
        push(&mut doc);
        push(&mut doc);
        assert_eq!(doc.len(), 2);
    }
}
