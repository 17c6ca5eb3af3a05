//! # Magicbook - themed CSS classes from declarative style books
//!
//! Magicbook compiles *style books* (nested maps of camelCase class keys to
//! CSS declarations) into stylesheets, and hands back a table mapping each
//! key to its generated class name.
//!
//! ## Core concepts
//!
//! - [`StyleBook`]: ordered `key → value` tree; values are text, numbers,
//!   nested books or absent
//! - [`MagicCompiler`]: converts keys into selectors under a scope, flattens
//!   nesting, emits CSS into a [`StyleSink`] and records a [`ClassTable`]
//! - [`Theme`] / [`ThemeRegistry`]: palettes and typography, merged from
//!   YAML or JSON fragments
//! - [`StyleGenerator`]: turns a theme into a style book; [`Magic`] compiles
//!   each (theme, generator) pair once under `.{theme}`
//! - [`draw_magic_table`] and [`lab`]: helpers for writing large utility
//!   catalogues
//!
//! ## Quick start
//!
//! ```rust
//! use magicbook::{style_book, MagicCompiler};
//!
//! let mut compiler = MagicCompiler::default();
//! let book = style_book! {
//!     "horizontalSmall" => style_book! {
//!         "display" => "flex",
//!         "gap" => "8px",
//!         "& > *" => style_book! { "flexGrow" => 1 },
//!     },
//! };
//!
//! let classes = compiler.compile(&book, ".light");
//! assert_eq!(classes.get("horizontalSmall"), Some("horizontal-small"));
//! assert_eq!(
//!     compiler.sink().text(),
//!     ".light .horizontal-small > * {\n  flex-grow: 1;\n}\n\
//!      .light .horizontal-small {\n  display: flex;\n  gap: 8px;\n}\n"
//! );
//! ```
//!
//! ## Key markers
//!
//! | Key            | Selector under `.light`             |
//! |----------------|-------------------------------------|
//! | `padSmall`     | `.light .pad-small`                 |
//! | `&:hover`      | parent selector + `:hover`          |
//! | `!MuiButton`   | `.light .MuiButton`                 |
//! | `?body`        | `.light body`                       |
//!
//! ## Themes
//!
//! ```rust
//! use magicbook::{Magic, ThemeMagicBook};
//!
//! let mut magic = Magic::default();
//! magic
//!     .themes_mut()
//!     .register_yaml("ocean:\n  palette:\n    divider: \"#0af\"\n")
//!     .unwrap();
//!
//! magic.theme_magic("ocean", &ThemeMagicBook).unwrap();
//! assert!(magic
//!     .sink()
//!     .text()
//!     .contains(".ocean .border-top-divider {\n  border-top: solid thin #0af;\n}\n"));
//! ```

pub mod books;
pub mod compile;
pub mod config;
pub mod draw;
pub mod error;
pub mod magic;
pub mod observer;
pub mod style;
pub mod theme;
pub mod util;

pub use books::{base_magic_book, default_magic_bag};
pub use compile::{
    convert, emit, property_name, Document, Flattener, MagicCompiler, PropertyAllowList, Rule,
    SelectorKey, SelectorMap, StyleSink, CSS_PROPERTIES,
};
pub use config::MagicConfig;
pub use draw::{draw_magic_table, lab, DrawProperty, Labels, SHARED};
pub use error::{MagicError, MagicResult};
pub use magic::Magic;
pub use observer::{SizeObserver, BREAKPOINTS};
pub use style::{ClassTable, StyleBook, StyleValue};
pub use theme::{
    deep_merge, detect_color_mode, generator, octave_steps, set_theme_detector, Background,
    Color, ColorMode, FnGenerator, Octave, OctaveFn, OctaveScale, Palette, StyleGenerationCache,
    StyleGenerator, SubscriptionId, TextColors, Theme, ThemeMagicBook, ThemeRegistry, Typography,
};
pub use util::{camel_case_dash, dash_camel_case};
