//! Case conversion between style-book keys and CSS names.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static UPPER_OR_DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[A-Z0-9]+").expect("static pattern is valid"));
static DIGIT_THEN_LOWER: Lazy<Regex> =
    Lazy::new(|| Regex::new("[0-9][a-z]+").expect("static pattern is valid"));
static DASH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new("-[a-zA-Z0-9]+").expect("static pattern is valid"));

/// Converts a camelCase key into its dash-case CSS form.
///
/// Runs of upper-case letters and digits start a new dash-separated word,
/// and a digit directly followed by lower-case letters is split as well, so
/// numeric steps stay readable in class names.
///
/// # Example
///
/// ```rust
/// use magicbook::dash_camel_case;
///
/// assert_eq!(dash_camel_case("padSmall"), "pad-small");
/// assert_eq!(dash_camel_case("backgroundColor"), "background-color");
/// assert_eq!(dash_camel_case("sizeMaxVertical7Rem"), "size-max-vertical-7-rem");
/// assert_eq!(dash_camel_case("opacity3"), "opacity-3");
/// ```
pub fn dash_camel_case(camel: &str) -> String {
    let dashed = UPPER_OR_DIGIT_RUN.replace_all(camel, |caps: &Captures<'_>| {
        format!("-{}", caps[0].to_lowercase())
    });

    DIGIT_THEN_LOWER
        .replace_all(&dashed, |caps: &Captures<'_>| {
            let run = &caps[0];
            // The leading char is an ASCII digit, so slicing at 1 is on a boundary.
            format!("{}-{}", &run[..1], &run[1..])
        })
        .into_owned()
}

/// Converts a dash-case CSS name back into camelCase.
///
/// This is the inverse of [`dash_camel_case`] for the names it produces.
///
/// # Example
///
/// ```rust
/// use magicbook::camel_case_dash;
///
/// assert_eq!(camel_case_dash("pad-small"), "padSmall");
/// assert_eq!(camel_case_dash("size-max-vertical-7-rem"), "sizeMaxVertical7Rem");
/// assert_eq!(camel_case_dash("background-color"), "backgroundColor");
/// ```
pub fn camel_case_dash(dash: &str) -> String {
    DASH_WORD
        .replace_all(dash, |caps: &Captures<'_>| {
            let word = &caps[0][1..];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .into_owned()
}

/// Upper-cases the first character of `word`.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character of `word`.
pub(crate) fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_camel_case_plain_words() {
        assert_eq!(dash_camel_case("pad"), "pad");
        assert_eq!(dash_camel_case("padSmall"), "pad-small");
        assert_eq!(dash_camel_case("justifyContentSpaceBetween"), "justify-content-space-between");
    }

    #[test]
    fn test_dash_camel_case_digits() {
        assert_eq!(dash_camel_case("h3"), "h-3");
        assert_eq!(dash_camel_case("margin0"), "margin-0");
        assert_eq!(dash_camel_case("subtitle2"), "subtitle-2");
        assert_eq!(dash_camel_case("sizeMaxVertical7Rem"), "size-max-vertical-7-rem");
    }

    #[test]
    fn test_dash_camel_case_upper_run_is_one_word() {
        assert_eq!(dash_camel_case("colorUI"), "color-ui");
    }

    #[test]
    fn test_camel_case_dash_inverts() {
        for key in ["padSmall", "h3", "sizeMaxVertical7Rem", "flexGrowChildren", "opacity8"] {
            assert_eq!(camel_case_dash(&dash_camel_case(key)), key);
        }
    }

    #[test]
    fn test_camel_case_dash_without_dashes() {
        assert_eq!(camel_case_dash("color"), "color");
        assert_eq!(camel_case_dash(""), "");
    }

    #[test]
    fn test_capitalize_helpers() {
        assert_eq!(capitalize("size"), "Size");
        assert_eq!(capitalize(""), "");
        assert_eq!(decapitalize("SizeVertical"), "sizeVertical");
    }
}
