//! Style generators: themed style books and the per-theme cache.

use std::collections::HashMap;
use std::fmt;

use super::octave::{octave_steps, Octave, OctaveScale};
use super::theme::Theme;
use crate::draw::draw_magic_table;
use crate::error::MagicResult;
use crate::style::{StyleBook, StyleValue};
use crate::style_book;

/// Produces a style book from a theme.
///
/// Generators are pure: the same theme and name must yield the same book.
/// The id identifies the generator in the [`StyleGenerationCache`], so two
/// generators sharing an id are treated as one.
pub trait StyleGenerator {
    /// Stable identifier of this generator.
    fn id(&self) -> &str;

    /// Builds the style book for `theme`, registered as `theme_name`.
    fn generate(&self, theme: &Theme, theme_name: &str) -> MagicResult<StyleBook>;
}

/// A [`StyleGenerator`] backed by a closure.
pub struct FnGenerator<F> {
    id: String,
    func: F,
}

impl<F> StyleGenerator for FnGenerator<F>
where
    F: Fn(&Theme, &str) -> StyleBook,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn generate(&self, theme: &Theme, theme_name: &str) -> MagicResult<StyleBook> {
        Ok((self.func)(theme, theme_name))
    }
}

impl<F> fmt::Debug for FnGenerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnGenerator").field("id", &self.id).finish()
    }
}

/// Wraps a closure as a [`StyleGenerator`] with the given id.
///
/// # Example
///
/// ```rust
/// use magicbook::{generator, style_book, StyleGenerator, Theme};
///
/// let borders = generator("borders", |theme: &Theme, _name: &str| {
///     style_book! {
///         "borderDivider" => style_book! {
///             "border" => format!("solid thin {}", theme.palette.divider),
///         },
///     }
/// });
///
/// assert_eq!(borders.id(), "borders");
/// let book = borders.generate(&Theme::light(), "light").unwrap();
/// assert!(book.contains_key("borderDivider"));
/// ```
pub fn generator<F>(id: &str, func: F) -> FnGenerator<F>
where
    F: Fn(&Theme, &str) -> StyleBook,
{
    FnGenerator {
        id: id.to_string(),
        func,
    }
}

/// The default themed style book.
///
/// Contains the paper surface, typography variants, palette colours, divider
/// borders and the octave families (`pad*`, `margin*`, `gap*`, `fontSize*`,
/// `color*`, `background*`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeMagicBook;

impl ThemeMagicBook {
    /// Generator id used in the cache.
    pub const ID: &'static str = "theme-magic-book";
}

impl StyleGenerator for ThemeMagicBook {
    fn id(&self) -> &str {
        Self::ID
    }

    fn generate(&self, theme: &Theme, theme_name: &str) -> MagicResult<StyleBook> {
        let palette = &theme.palette;
        let typography = &theme.typography;
        let paper = match theme_name {
            "dark" => "#424242",
            _ => "#d2d2d2",
        };

        let mut book = style_book! {
            "paper" => style_book! { "backgroundColor" => paper },
            "caption" => typography.caption.clone(),
            "h3" => typography.h3.clone(),
            "h4" => typography.h4.clone(),
            "h5" => typography.h5.clone(),
            "h6" => typography.h6.clone(),
            "subtitle2" => typography.subtitle2.clone(),
            "colorPrimary" => style_book! { "color" => format!("{} !important", palette.text.primary) },
            "colorSecondary" => style_book! { "color" => format!("{} !important", palette.text.secondary) },
            "backgroundSuccess" => style_book! { "backgroundColor" => &palette.success.main },
            "backgroundWarning" => style_book! { "backgroundColor" => &palette.warning.main },
            "backgroundError" => style_book! { "backgroundColor" => &palette.error.main },
            "backgroundSuccessLight" => style_book! { "backgroundColor" => &palette.success.light },
            "backgroundWarningLight" => style_book! { "backgroundColor" => &palette.warning.light },
            "backgroundErrorLight" => style_book! { "backgroundColor" => &palette.error.light },
            "borderLeftDivider" => style_book! { "borderLeft" => format!("solid thin {}", palette.divider) },
            "borderTopDivider" => style_book! { "borderTop" => format!("solid thin {}", palette.divider) },
            "colorError" => style_book! { "color" => &palette.error.main },
            "colorErrorLight" => style_book! { "color" => &palette.error.light },
        };

        let spacing = steps_table(&theme.spacing_oct, OctaveScale::Spacing)?;
        book.extend_from(&draw_magic_table("pad", &spacing, "padding"));
        book.extend_from(&draw_magic_table(
            "padHorizontal",
            &spacing,
            ["paddingLeft", "paddingRight"],
        ));
        book.extend_from(&draw_magic_table(
            "padVertical",
            &spacing,
            ["paddingTop", "paddingBottom"],
        ));
        book.extend_from(&draw_magic_table("margin", &spacing, "margin"));
        book.extend_from(&draw_magic_table("gap", &spacing, "gap"));

        let font_size = steps_table(&typography.font_size, OctaveScale::FontSize)?;
        book.extend_from(&draw_magic_table("fontSize", &font_size, "fontSize"));

        let colors = steps_table(&palette.color, OctaveScale::Color)?;
        book.extend_from(&draw_magic_table("color", &colors, "color"));
        book.extend_from(&draw_magic_table("background", &colors, "backgroundColor"));

        Ok(book)
    }
}

fn steps_table(octaves: &[Octave], scale: OctaveScale) -> MagicResult<StyleBook> {
    Ok(octave_steps(octaves, scale)?
        .into_iter()
        .map(|(label, value)| (label, StyleValue::from(value)))
        .collect())
}

/// Remembers which generators were compiled for which theme, and the
/// selectors each of them compiled.
///
/// Switching the active theme never removes entries; only an explicit
/// [`StyleGenerationCache::invalidate`] does.
#[derive(Debug, Clone, Default)]
pub struct StyleGenerationCache {
    applied: HashMap<String, HashMap<String, Vec<String>>>,
}

impl StyleGenerationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `generator_id` was compiled for `theme_name`.
    pub fn is_applied(&self, theme_name: &str, generator_id: &str) -> bool {
        self.applied
            .get(theme_name)
            .is_some_and(|ids| ids.contains_key(generator_id))
    }

    /// Records that `generator_id` was compiled for `theme_name`, producing
    /// `selectors`.
    pub fn mark(&mut self, theme_name: &str, generator_id: &str, selectors: Vec<String>) {
        self.applied
            .entry(theme_name.to_string())
            .or_default()
            .entry(generator_id.to_string())
            .or_default()
            .extend(selectors);
    }

    /// Selectors compiled for `theme_name`, by any generator.
    pub fn selectors(&self, theme_name: &str) -> impl Iterator<Item = &str> {
        self.applied
            .get(theme_name)
            .into_iter()
            .flat_map(HashMap::values)
            .flatten()
            .map(String::as_str)
    }

    /// Forgets every generator compiled for `theme_name` and returns the
    /// selectors they had compiled, or `None` if there was nothing to forget.
    pub fn invalidate(&mut self, theme_name: &str) -> Option<Vec<String>> {
        self.applied
            .remove(theme_name)
            .map(|ids| ids.into_values().flatten().collect())
    }

    /// Number of compiled (theme, generator) pairs.
    pub fn len(&self) -> usize {
        self.applied.values().map(HashMap::len).sum()
    }

    /// Returns true if nothing was compiled yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
