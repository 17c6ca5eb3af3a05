//! Themes and themed style generation.
//!
//! A [`Theme`] holds the palette, typography and spacing octaves a
//! [`StyleGenerator`] turns into a style book. The [`ThemeRegistry`] stores
//! named themes and the active theme name; the [`StyleGenerationCache`]
//! makes sure each (theme, generator) pair is compiled once.
//!
//! ```rust
//! use magicbook::{Magic, ThemeMagicBook};
//!
//! let mut magic = Magic::default();
//! let classes = magic.theme_magic("dark", &ThemeMagicBook).unwrap();
//! assert_eq!(classes.get("paper"), Some("paper"));
//! assert!(magic.sink().text().contains(".dark .paper {\n  background-color: #424242;\n}\n"));
//! ```

mod adaptive;
mod generator;
mod octave;
mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode};
pub use generator::{generator, FnGenerator, StyleGenerationCache, StyleGenerator, ThemeMagicBook};
pub use octave::{octave_steps, Octave, OctaveFn, OctaveScale};
pub use registry::{SubscriptionId, ThemeRegistry};
pub use theme::{deep_merge, Background, Color, Palette, TextColors, Theme, Typography};
