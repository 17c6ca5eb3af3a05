//! The style-book to CSS compiler.
//!
//! Compilation runs in four stages:
//!
//! 1. [`SelectorKey`] classifies each key and converts it under a scope
//! 2. [`Flattener`] splits nested bodies into per-selector [`Rule`]s,
//!    using the [`PropertyAllowList`] to tell compound values from nesting
//! 3. [`emit`] writes the rules as CSS text, children first
//! 4. [`MagicCompiler`] drives the above per top-level key, records the
//!    [`ClassTable`](crate::ClassTable) and injects into a [`StyleSink`]

mod compiler;
mod emit;
mod flatten;
mod key;
mod properties;
mod sink;

pub use compiler::MagicCompiler;
pub use emit::{emit, property_name};
pub use flatten::{Flattener, Rule, SelectorMap};
pub use key::{convert, SelectorKey};
pub use properties::{PropertyAllowList, CSS_PROPERTIES};
pub use sink::{Document, StyleSink};
