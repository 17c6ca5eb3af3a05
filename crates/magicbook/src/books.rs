//! Builtin style books.

use indexmap::IndexMap;

use crate::error::MagicResult;
use crate::style::StyleBook;
use crate::style_book;
use crate::theme::{StyleGenerator, Theme, ThemeMagicBook};

fn horizontal0() -> StyleBook {
    style_book! { "display" => "flex", "flexDirection" => "initial" }
}

fn vertical0() -> StyleBook {
    style_book! { "display" => "flex", "flexDirection" => "column" }
}

fn with(base: StyleBook, extra: StyleBook) -> StyleBook {
    StyleBook::merge([&base, &extra])
}

/// The theme-independent layout utilities.
///
/// Flex layouts, padding, positioning, alignment, sizing, cursors, opacity
/// and a handful of typographic helpers.
///
/// # Example
///
/// ```rust
/// use magicbook::{base_magic_book, MagicCompiler};
///
/// let mut compiler = MagicCompiler::default();
/// let classes = compiler.compile(&base_magic_book(), "");
/// assert_eq!(classes.get("sizeMaxVertical7Rem"), Some("size-max-vertical-7-rem"));
/// assert_eq!(classes.get("horizontalSmall"), Some("horizontal-small"));
/// ```
pub fn base_magic_book() -> StyleBook {
    let pad_x = |value: &str| style_book! { "paddingLeft" => value, "paddingRight" => value };
    let pad_y = |value: &str| style_book! { "paddingTop" => value, "paddingBottom" => value };

    style_book! {
        "horizontal0" => horizontal0(),
        "horizontal" => with(horizontal0(), style_book! { "gap" => "16px" }),
        "horizontalSmall" => with(horizontal0(), style_book! { "gap" => "8px" }),
        "blockHorizontal" => style_book! {
            "& > *" => style_book! {
                "float" => "left",
                "marginLeft" => "16px",
                "&:first" => style_book! { "marginLeft" => "0px" },
            },
        },
        "vertical0" => vertical0(),
        "vertical" => with(vertical0(), style_book! { "rowGap" => "16px" }),
        "verticalSmall" => with(vertical0(), style_book! { "rowGap" => "8px" }),
        "pad" => style_book! { "padding" => "16px" },
        "padSmall" => style_book! { "padding" => "8px" },
        "padVertical" => pad_y("16px"),
        "padVerticalSmall" => pad_y("8px"),
        "padHorizontal" => pad_x("16px"),
        "padHorizontalSmall" => pad_x("8px"),
        "tableHorizontalSmall" => style_book! {
            "& th" => pad_x("8px"),
            "& td" => pad_x("8px"),
        },
        "relative" => style_book! { "position" => "relative" },
        "absolute" => style_book! { "position" => "absolute" },
        "positionTop0" => style_book! { "top" => 0 },
        "positionLeft0" => style_book! { "left" => 0 },
        "positionRight0" => style_book! { "right" => 0 },
        "positionBottom0" => style_book! { "bottom" => 0 },
        "positionRightNeg" => style_book! { "right" => "-16px" },
        "positionTopNeg" => style_book! { "top" => "-16px" },
        "alignSelfStretch" => style_book! { "alignSelf" => "stretch" },
        "flexGrow" => style_book! { "flexGrow" => 1 },
        "overflowAuto" => style_book! { "overflow" => "auto" },
        "overflowHidden" => style_book! { "overflow" => "hidden" },
        "alignItemsStart" => style_book! { "alignItems" => "flex-start" },
        "alignItemsEnd" => style_book! { "alignItems" => "flex-end" },
        "alignItemsCenter" => style_book! { "alignItems" => "center" },
        "justifyContentCenter" => style_book! { "justifyContent" => "center" },
        "justifyContentEnd" => style_book! { "justifyContent" => "flex-end" },
        "justifyContentSpaceBetween" => style_book! { "justifyContent" => "space-between" },
        "sizeVerticalFull" => style_book! { "height" => "100%" },
        "sizeMaxVertical7Rem" => style_book! { "maxHeight" => "7rem" },
        "sizeHorizontalFull" => style_book! { "width" => "100%" },
        "textAlignCenter" => style_book! { "textAlign" => "center" },
        "marginHorizontalNeg" => style_book! { "marginLeft" => "-16px", "marginRight" => "-16px" },
        "marginVerticalNeg" => style_book! { "marginTop" => "-16px", "marginBottom" => "-16px" },
        "paddingHorizontalSmall" => pad_x("8px"),
        "paddingVerticalSmall" => pad_y("8px"),
        "cursorHorizontalResize" => style_book! { "cursor" => "ew-resize" },
        "cursorVerticalResize" => style_book! { "cursor" => "ns-resize" },
        "flexGrowChildren" => style_book! { "& > *" => style_book! { "flexGrow" => 1 } },
        "verticalCenter" => style_book! {
            "display" => "inline-flex !important",
            "flexDirection" => "column",
            "justifyContent" => "center",
        },
        "flexWrap" => style_book! { "flexWrap" => "wrap" },
        "tableLayout" => style_book! { "tableLayout" => "fixed" },
        "tableLayoutFixed" => style_book! { "tableLayout" => "fixed" },
        "colorInherit" => style_book! { "color" => "inherit" },
        "backgroundInherit" => style_book! { "backgroundColor" => "inherit" },
        "backgroundWhite" => style_book! { "backgroundColor" => "white" },
        "backgroundBlack" => style_book! { "backgroundColor" => "black" },
        "marginLeftSmall" => style_book! { "marginLeft" => "8px" },
        "margin0" => style_book! { "margin" => 0 },
        "opacity3" => style_book! { "opacity" => 0.3 },
        "opacity5" => style_book! { "opacity" => 0.5 },
        "opacity8" => style_book! { "opacity" => 0.8 },
        "fontWeight" => style_book! { "fontWeight" => 600 },
        "fontWeightBold" => style_book! { "fontWeight" => 600 },
        "borderRadiusSmall" => style_book! { "borderRadius" => "8px" },
        "rotate" => style_book! { "transform" => "rotate(90deg)" },
        "rotatePiOverTwo" => style_book! { "transform" => "rotate(90deg)" },
        "textOverflowEllipsis" => style_book! { "textOverflow" => "ellipsis" },
    }
}

/// The unthemed default bag: the base utilities plus the light theme book,
/// all under the empty scope.
pub fn default_magic_bag() -> MagicResult<IndexMap<String, StyleBook>> {
    let themed = ThemeMagicBook.generate(&Theme::light(), "light")?;
    let mut bag = IndexMap::new();
    bag.insert(String::new(), with(base_magic_book(), themed));
    Ok(bag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::MagicCompiler;
    use crate::style::StyleValue;

    #[test]
    fn test_shared_layout_bodies() {
        let book = base_magic_book();
        let small = book.get("horizontalSmall").and_then(StyleValue::as_book).unwrap();
        assert_eq!(
            small,
            &style_book! { "display" => "flex", "flexDirection" => "initial", "gap" => "8px" }
        );
    }

    #[test]
    fn test_base_book_compiles_nested_selectors() {
        let mut compiler = MagicCompiler::default();
        compiler.compile(&base_magic_book(), "");
        let css = compiler.sink().text();

        assert!(css.contains(".block-horizontal > *:first {\n  margin-left: 0px;\n}\n"));
        assert!(css.contains(".table-horizontal-small th {\n  padding-left: 8px;\n  padding-right: 8px;\n}\n"));
        assert!(css.contains(".opacity-3 {\n  opacity: 0.3;\n}\n"));
        assert_eq!(compiler.sink().len(), 1);
    }

    #[test]
    fn test_default_bag_has_one_unscoped_book() {
        let bag = default_magic_bag().unwrap();
        assert_eq!(bag.len(), 1);
        let book = &bag[""];
        assert!(book.contains_key("flexGrowChildren"));
        assert!(book.contains_key("colorErrorLight"));

        let mut compiler = MagicCompiler::default();
        let classes = compiler.compile_bag(&bag);
        assert_eq!(classes.get("colorErrorLight"), Some("color-error-light"));
    }
}
