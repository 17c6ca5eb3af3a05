//! Theme definitions and deep merging of theme fragments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::octave::Octave;
use crate::error::{MagicError, MagicResult};
use crate::style::StyleBook;
use crate::style_book;

const FONT_FAMILY: &str = "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif";

/// One palette colour with its shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub light: String,
    pub main: String,
    pub dark: String,
    pub contrast_text: String,
}

impl Color {
    /// Creates a colour from its four shades.
    pub fn new(light: &str, main: &str, dark: &str, contrast_text: &str) -> Self {
        Self {
            light: light.to_string(),
            main: main.to_string(),
            dark: dark.to_string(),
            contrast_text: contrast_text.to_string(),
        }
    }
}

/// Text colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
}

/// Surface colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub paper: String,
    pub default: String,
}

/// The theme palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Colour octaves drawn into `color{label}` / `background{label}` classes.
    #[serde(default)]
    pub color: Vec<Octave>,
    /// `"light"` or `"dark"`.
    #[serde(rename = "type")]
    pub mode: String,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub divider: String,
    pub text: TextColors,
    pub background: Background,
}

/// Typography settings and variant bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub html_font_size: u32,
    pub font_family: String,
    /// Font size octaves drawn into `fontSize{label}` classes.
    #[serde(default)]
    pub font_size: Vec<Octave>,
    pub h1: StyleBook,
    pub h2: StyleBook,
    pub h3: StyleBook,
    pub h4: StyleBook,
    pub h5: StyleBook,
    pub h6: StyleBook,
    pub subtitle2: StyleBook,
    pub caption: StyleBook,
}

/// A complete theme: palette, spacing octaves and typography.
///
/// Themes serialize to camelCase JSON, so partial fragments written in YAML
/// or JSON can be deep-merged onto an existing theme with [`Theme::merged`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub palette: Palette,
    /// Spacing octaves drawn into padding, margin and gap classes.
    #[serde(default)]
    pub spacing_oct: Vec<Octave>,
    pub typography: Typography,
}

impl Theme {
    /// The default light theme.
    pub fn light() -> Self {
        Self {
            palette: Palette {
                color: vec![Octave::builtin()],
                mode: "light".to_string(),
                primary: Color::new("#7986cb", "#3f51b5", "#303f9f", "#fff"),
                secondary: Color::new("#ff4081", "#f50057", "#c51162", "#fff"),
                success: Color::new("#81c784", "#4caf50", "#388e3c", "rgba(0, 0, 0, 0.87)"),
                warning: Color::new("#ffb74d", "#ff9800", "#f57c00", "rgba(0, 0, 0, 0.87)"),
                error: Color::new("#e57373", "#f44336", "#d32f2f", "#fff"),
                info: Color::new("#64b5f6", "#2196f3", "#1976d2", "#fff"),
                divider: "rgba(0, 0, 0, 0.12)".to_string(),
                text: TextColors {
                    primary: "rgba(0, 0, 0, 0.87)".to_string(),
                    secondary: "rgba(0, 0, 0, 0.54)".to_string(),
                },
                background: Background {
                    paper: "#fff".to_string(),
                    default: "#fafafa".to_string(),
                },
            },
            spacing_oct: vec![Octave::builtin()],
            typography: Typography {
                html_font_size: 16,
                font_family: FONT_FAMILY.to_string(),
                font_size: vec![Octave::builtin()],
                h1: variant(300, "6rem", 1.167, "-0.01562em"),
                h2: variant(300, "3.75rem", 1.2, "-0.00833em"),
                h3: variant(400, "3rem", 1.167, "0em"),
                h4: variant(400, "2.125rem", 1.235, "0.00735em"),
                h5: variant(400, "1.5rem", 1.334, "0em"),
                h6: variant(500, "1.25rem", 1.6, "0.0075em"),
                subtitle2: variant(500, "0.875rem", 1.57, "0.00714em"),
                caption: variant(400, "0.75rem", 1.66, "0.03333em"),
            },
        }
    }

    /// The default dark theme.
    pub fn dark() -> Self {
        let mut theme = Self::light();
        let palette = &mut theme.palette;
        palette.mode = "dark".to_string();
        palette.divider = "rgba(255, 255, 255, 0.12)".to_string();
        palette.text = TextColors {
            primary: "#fff".to_string(),
            secondary: "rgba(255, 255, 255, 0.7)".to_string(),
        };
        palette.background = Background {
            paper: "#424242".to_string(),
            default: "#303030".to_string(),
        };
        theme
    }

    /// Returns a copy of this theme with `patch` deep-merged into it.
    ///
    /// Objects merge key by key, `null` leaves the existing value alone and
    /// anything else replaces it. Octave generators survive the merge when
    /// the patched octave keeps its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MagicError::Json`] when the merged document is no longer a
    /// valid theme.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magicbook::Theme;
    /// use serde_json::json;
    ///
    /// let theme = Theme::light()
    ///     .merged(&json!({ "palette": { "error": { "main": "#ff0000" } } }))
    ///     .unwrap();
    /// assert_eq!(theme.palette.error.main, "#ff0000");
    /// assert_eq!(theme.palette.error.light, "#e57373");
    /// ```
    pub fn merged(&self, patch: &Value) -> MagicResult<Theme> {
        let mut document = serde_json::to_value(self)?;
        deep_merge(&mut document, patch);
        let mut theme: Theme = serde_json::from_value(document)?;

        adopt_funcs(&mut theme.palette.color, &self.palette.color);
        adopt_funcs(&mut theme.spacing_oct, &self.spacing_oct);
        adopt_funcs(&mut theme.typography.font_size, &self.typography.font_size);
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

fn variant(weight: i32, size: &str, line_height: f64, letter_spacing: &str) -> StyleBook {
    style_book! {
        "fontFamily" => FONT_FAMILY,
        "fontWeight" => weight,
        "fontSize" => size,
        "lineHeight" => line_height,
        "letterSpacing" => letter_spacing,
    }
}

fn adopt_funcs(octaves: &mut [Octave], previous: &[Octave]) {
    for (octave, old) in octaves.iter_mut().zip(previous) {
        octave.adopt_func(old);
    }
}

/// Merges `patch` into `target` in place.
///
/// Objects are merged recursively, `null` in the patch is ignored and every
/// other patch value replaces the target value.
pub fn deep_merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                if let Some(existing) = target.get_mut(key) {
                    deep_merge(existing, value);
                } else if !value.is_null() {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
        (_, Value::Null) => {}
        (target, patch) => *target = patch.clone(),
    }
}

pub(crate) fn parse_error(name: &str, err: MagicError) -> MagicError {
    match err {
        MagicError::Json(inner) => MagicError::ThemeParse {
            name: name.to_string(),
            details: inner.to_string(),
        },
        other => other,
    }
}
