//! Octaves: bounded generators of labelled scale steps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::{MagicError, MagicResult};

/// Generator mapping a step index to a `(label, value)` pair.
pub type OctaveFn = Arc<dyn Fn(usize) -> (String, String) + Send + Sync>;

/// The builtin scales an octave without a generator reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctaveScale {
    /// Spacing steps (`pad{label}`, `margin{label}`, …).
    Spacing,
    /// Font size steps.
    FontSize,
    /// Grey palette steps.
    Color,
}

const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("Tiny", "4px"),
    ("Small", "8px"),
    ("", "16px"),
    ("Big", "32px"),
    ("Huge", "64px"),
];

const FONT_SIZE: &[(&str, &str)] = &[
    ("Tiny", "0.625rem"),
    ("Small", "0.75rem"),
    ("", "1rem"),
    ("Big", "1.25rem"),
    ("Huge", "1.5rem"),
];

const COLOR: &[(&str, &str)] = &[
    ("Grey50", "#fafafa"),
    ("Grey100", "#f5f5f5"),
    ("Grey200", "#eeeeee"),
    ("Grey300", "#e0e0e0"),
    ("Grey400", "#bdbdbd"),
    ("Grey500", "#9e9e9e"),
    ("Grey600", "#757575"),
    ("Grey700", "#616161"),
    ("Grey800", "#424242"),
    ("Grey900", "#212121"),
];

impl OctaveScale {
    /// The builtin `(label, value)` table.
    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            OctaveScale::Spacing => SPACING,
            OctaveScale::FontSize => FONT_SIZE,
            OctaveScale::Color => COLOR,
        }
    }

    /// Short name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            OctaveScale::Spacing => "spacing",
            OctaveScale::FontSize => "font size",
            OctaveScale::Color => "color",
        }
    }
}

/// A bounded, deterministic sequence of `(label, value)` steps.
///
/// Steps run from `min` (inclusive) to `length` (exclusive). Missing bounds
/// default to the whole builtin table, and a missing generator reads the
/// builtin table of the scale being drawn.
///
/// # Example
///
/// ```rust
/// use magicbook::{Octave, OctaveScale};
///
/// let octave = Octave::with_func(1, 4, |i| (format!("X{}", i), format!("{}px", i * 4)));
/// let steps = octave.steps(OctaveScale::Spacing).unwrap();
/// assert_eq!(steps.len(), 3);
/// assert_eq!(steps[0], ("X1".to_string(), "4px".to_string()));
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Octave {
    #[serde(skip)]
    func: Option<OctaveFn>,
    /// First step index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    /// One past the last step index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl Octave {
    /// An octave covering the whole builtin table.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// An octave over a slice of the builtin table.
    pub fn new(min: usize, length: usize) -> Self {
        Self {
            func: None,
            min: Some(min),
            length: Some(length),
        }
    }

    /// An octave with its own step generator.
    pub fn with_func<F>(min: usize, length: usize, func: F) -> Self
    where
        F: Fn(usize) -> (String, String) + Send + Sync + 'static,
    {
        Self {
            func: Some(Arc::new(func)),
            min: Some(min),
            length: Some(length),
        }
    }

    /// Returns true if the octave has its own generator.
    pub fn has_func(&self) -> bool {
        self.func.is_some()
    }

    /// Evaluates every step of the octave.
    ///
    /// # Errors
    ///
    /// Returns [`MagicError::OctaveIndex`] when an octave without a generator
    /// reaches past the end of the builtin table.
    pub fn steps(&self, scale: OctaveScale) -> MagicResult<Vec<(String, String)>> {
        let table = scale.table();
        let min = self.min.unwrap_or(0);
        let end = self.length.unwrap_or(table.len());

        (min..end)
            .map(|index| match &self.func {
                Some(func) => Ok(func(index)),
                None => table
                    .get(index)
                    .map(|(label, value)| (label.to_string(), value.to_string()))
                    .ok_or(MagicError::OctaveIndex {
                        scale: scale.name(),
                        index,
                        len: table.len(),
                    }),
            })
            .collect()
    }

    /// Takes `other`'s generator when this octave has none and the bounds
    /// match.
    pub(crate) fn adopt_func(&mut self, other: &Octave) {
        if self.func.is_none() && self.min == other.min && self.length == other.length {
            self.func = other.func.clone();
        }
    }
}

impl fmt::Debug for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Octave")
            .field("func", &self.func.as_ref().map(|_| "<fn>"))
            .field("min", &self.min)
            .field("length", &self.length)
            .finish()
    }
}

impl PartialEq for Octave {
    fn eq(&self, other: &Self) -> bool {
        let same_func = match (&self.func, &other.func) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_func && self.min == other.min && self.length == other.length
    }
}

/// Evaluates a list of octaves in order, concatenating their steps.
pub fn octave_steps(octaves: &[Octave], scale: OctaveScale) -> MagicResult<Vec<(String, String)>> {
    let mut steps = Vec::new();
    for octave in octaves {
        steps.extend(octave.steps(scale)?);
    }
    Ok(steps)
}
